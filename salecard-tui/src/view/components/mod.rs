//! 通用 UI 组件

pub mod modal;
pub mod sidebar;
pub mod statusbar;
