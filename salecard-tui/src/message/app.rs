//! 应用主消息枚举

use super::{BackendMessage, FormMessage, ModalMessage, NavigationMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个面板
    FocusNext,

    /// 焦点移到上一个面板
    FocusPrev,

    /// 展开/收起侧边栏
    ToggleSidebar,

    /// 侧边栏相关消息
    Navigation(NavigationMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 表格相关消息
    Table(TableMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求结果
    Backend(BackendMessage),

    /// 重新加载卡片列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
