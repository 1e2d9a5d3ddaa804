//! 应用主状态结构

use super::{CatalogState, FocusPanel, ModalState, NavigationState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧边栏状态
    pub navigation: NavigationState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 目录页面状态
    pub catalog: CatalogState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            navigation: NavigationState::new(),
            status_message: None,
            catalog: CatalogState::new(),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
