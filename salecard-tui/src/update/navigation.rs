//! 侧边栏更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavItemId};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.focus = focus_from_nav_id(id);
                app.clear_status();
            }
        }
    }
}

/// 根据导航项 ID 获取对应的面板
fn focus_from_nav_id(id: NavItemId) -> FocusPanel {
    match id {
        NavItemId::Cards => FocusPanel::Table,
    }
}
