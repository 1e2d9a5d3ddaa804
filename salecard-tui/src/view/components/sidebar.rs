//! 左侧边栏组件
//!
//! 展开时显示 logo、标题和导航项文字；收起时只保留 logo 和图标。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavItemId};
use crate::view::theme::{colors, Styles};

const LOGO: &str = "📚";

/// 渲染侧边栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let expanded = app.navigation.expanded;

    // 收起时隐藏标题，只显示 logo
    let title = if expanded {
        format!(" {LOGO} {} ", texts.nav.title)
    } else {
        format!(" {LOGO} ")
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_sidebar()));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;

            let label = match nav_item.id {
                NavItemId::Cards => texts.nav.cards,
            };

            let content = if expanded {
                let prefix = if is_selected { "▶ " } else { "  " };
                format!("{prefix}{} {label}", nav_item.icon)
            } else {
                format!(" {}", nav_item.icon)
            };

            let style = if is_selected && app.focus.is_sidebar() {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
