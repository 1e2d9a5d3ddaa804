//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 这一层只包含数据结构和少量只修改自身的辅助方法，不发起任何请求。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Sidebar / Form / Table）
//!         mod navigation;     // 侧边栏状态
//!
//!         pub mod state;      // 目录、草稿、弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 侧边栏（展开/收起）
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub catalog: CatalogState,          // 卡片列表 + 草稿
//!             pub modal: ModalState,              // 弹窗状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、目录状态（CatalogState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/catalog.rs 中定义：
//!
//!         CatalogState {
//!             cards: Vec<SaleCard>,   // 最近一次成功加载的列表，整体替换
//!             selected: usize,        // 表格选中项
//!             draft: Draft,           // 表单草稿
//!             mode: DraftMode,        // Creating / Editing(id)
//!             form_field: DraftField, // 表单焦点字段
//!             loading / submitting,   // 请求进行中标志
//!         }
//!
//!     数据流：
//!         表格中按 e
//!             ↓
//!         update/catalog.rs 调用 catalog.enter_edit(id)
//!             ↓
//!         草稿被记录填充，mode = Editing(id)，焦点移到表单
//!             ↓
//!         表单中按 Enter → begin_submit() 生成 Submission，交给 Backend 层
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - ConfirmDelete { card_id, card_title, focus }
//!             - Help
//!             - Alert { title, message }     // 提交/删除失败提示
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use state::{
    CatalogState, Draft, DraftField, DraftMode, FieldValue, Modal, ModalState, Submission,
};
