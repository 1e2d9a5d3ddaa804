//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 请求进行中的提示优先于普通状态消息
    let status = if app.catalog.loading {
        Some(t().status.loading.to_string())
    } else if app.catalog.submitting {
        Some(t().status.saving.to_string())
    } else {
        app.status_message.clone()
    };

    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    match status {
        Some(msg) => spans.push(Span::styled(msg, Style::default().fg(Color::Yellow))),
        None => spans.push(Span::styled(
            format!("{} {}", app.catalog.cards.len(), t().status.card_count),
            Styles::hint_desc(),
        )),
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = vec![(keys.tab.to_string(), actions.switch_panel)];

    match app.focus {
        FocusPanel::Sidebar => {
            hints.push((keys.arrows_ud.to_string(), actions.navigate));
            hints.push((keys.enter.to_string(), actions.open));
        }
        FocusPanel::Form => {
            hints.push((keys.arrows_ud.to_string(), actions.navigate));
            hints.push((keys.arrows_lr.to_string(), actions.switch_option));
            hints.push((DefaultKeymap::SUBMIT.label(), actions.submit));
            if app.catalog.mode.is_editing() {
                hints.push((DefaultKeymap::CANCEL_EDIT.label(), actions.cancel_edit));
            }
        }
        FocusPanel::Table => {
            hints.push((keys.arrows_ud.to_string(), actions.navigate));
            hints.push(("e".to_string(), actions.edit));
            hints.push(("d".to_string(), actions.delete));
            hints.push(("n".to_string(), actions.new));
        }
    }

    hints.push((DefaultKeymap::HELP.label(), actions.help));
    hints.push((DefaultKeymap::QUIT.label(), actions.quit));

    hints
}
