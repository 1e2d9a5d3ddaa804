//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 接收 Message，修改 Model。需要访问网络时不直接发请求，
//! 而是返回一个 Command，由 app.rs 主循环交给 Backend 层在后台执行。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;        // 请求结果 → 状态
//!         mod catalog;        // 表单 / 表格
//!         mod modal;          // 弹窗
//!         mod navigation;     // 侧边栏
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!
//!         - 表单 Submit          → Some(Command::Submit(..))
//!         - 确认删除弹窗 Confirm  → Some(Command::Delete { id })
//!         - Refresh              → Some(Command::LoadCards)
//!         - 其他                  → None
//!

mod backend;
mod catalog;
mod modal;
mod navigation;

use crate::backend::Command;
use crate::message::AppMessage;
use crate::model::App;

/// 处理消息，必要时返回需要在后台执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
        }

        AppMessage::ToggleSidebar => {
            app.navigation.toggle();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Form(form_msg) => {
            return catalog::update_form(app, form_msg);
        }

        AppMessage::Table(table_msg) => {
            return catalog::update_table(app, table_msg);
        }

        AppMessage::Modal(modal_msg) => {
            return modal::update(app, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
        }

        AppMessage::Refresh => {
            app.catalog.begin_load();
            return Some(Command::LoadCards);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::NavigationMessage;

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(update(&mut app, AppMessage::Quit).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn test_refresh_returns_load_command() {
        let mut app = App::new();
        let command = update(&mut app, AppMessage::Refresh);
        assert!(matches!(command, Some(Command::LoadCards)));
        assert!(app.catalog.loading);
    }

    #[test]
    fn test_focus_does_not_move_under_modal() {
        let mut app = App::new();
        let before = app.focus;
        app.modal.show_help();
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, before);
    }

    #[test]
    fn test_sidebar_link_focuses_table() {
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleSidebar);
        assert!(!app.navigation.expanded);

        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert!(app.focus.is_table());
    }
}
