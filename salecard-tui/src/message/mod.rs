//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend → Update 之间的桥梁。
//! 所有的用户操作和请求结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod backend;        // 请求结果
//!         mod catalog;        // 表单 / 表格子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 侧边栏子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             FocusNext / FocusPrev,              // Tab / Shift+Tab 切换面板
//!             ToggleSidebar,                      // 展开/收起侧边栏
//!             Navigation(NavigationMessage),      // 侧边栏子消息
//!             Form(FormMessage),                  // 表单子消息
//!             Table(TableMessage),                // 表格子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             Backend(BackendMessage),            // 异步请求结果
//!             Refresh,                            // 重新加载列表
//!             ShowHelp,                           // 显示帮助
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作
//!         }
//!
//!
//!     消息来源有两个：
//!         - event/handler.rs 把按键翻译为消息
//!         - backend/catalog_service.rs 把请求结果包装成 BackendMessage，
//!           通过 channel 送回 app.rs 主循环
//!
//!     两者最终都进入同一个入口：
//!         update::update(app, msg) -> Option<Command>
//!

mod app;
mod backend;
mod catalog;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use catalog::{FormMessage, TableMessage};
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
