//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **目录页面内容归 `catalog.*`**：表单和表格
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 侧边栏文本
    pub nav: NavTexts,
    /// 目录页面文本
    pub catalog: CatalogTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub switch_panel: &'static str,
    pub switch_option: &'static str,
    pub submit: &'static str,
    pub cancel_edit: &'static str,
    pub open: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub new: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 侧边栏
// ============================================================================

/// 侧边栏文本
pub struct NavTexts {
    /// 展开时显示的标题
    pub title: &'static str,
    pub cards: &'static str,
}

// ============================================================================
// 目录页面
// ============================================================================

/// 目录页面文本
pub struct CatalogTexts {
    pub form_title_new: &'static str,
    pub form_title_edit: &'static str,
    pub table_title: &'static str,
    /// 表单字段标签
    pub fields: CardFieldTexts,
    /// 表格列标题
    pub columns: CardFieldTexts,
    pub image_placeholder: &'static str,
    pub submit: &'static str,
    pub update: &'static str,
    pub favorite: &'static str,
    pub sold: &'static str,
    pub no_cards: &'static str,
    pub no_image: &'static str,
}

/// 卡片字段名称
pub struct CardFieldTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub sale_price: &'static str,
    pub image: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本（所有弹窗的内容都在这里）
pub struct ModalTexts {
    /// 确认删除弹窗
    pub confirm_delete: ConfirmDeleteTexts,
    /// 提示弹窗标题
    pub alert_title: &'static str,
    /// 创建/更新失败
    pub save_failed: &'static str,
    /// 删除失败且服务端未给出消息
    pub delete_failed: &'static str,
    /// 未收到可用的服务端错误
    pub network_error: &'static str,
    pub dismiss_hint: &'static str,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusTexts {
    pub loading: &'static str,
    pub saving: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleting: &'static str,
    pub deleted: &'static str,
    pub editing: &'static str,
    pub edit_cancelled: &'static str,
    pub unlisted_category: &'static str,
    pub numbers_only: &'static str,
    pub card_count: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub table_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助弹窗快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub toggle_sidebar: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub move_field: &'static str,
    pub switch_category: &'static str,
    pub submit: &'static str,
    pub cancel_edit: &'static str,
    pub move_up_down: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub new: &'static str,
}
