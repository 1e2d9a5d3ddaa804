//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete {
            card_title, focus, ..
        } => render_confirm_delete(frame, card_title, *focus),
        Modal::Alert { title, message } => render_alert(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区域（去掉边框和左右留白）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn modal_block(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, card_title: &str, focus: usize) {
    let texts = &t().modal.confirm_delete;

    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(texts.title, Color::Red), area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {} ?", texts.message),
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  \"{card_title}\""),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.confirm_button), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 渲染提示弹窗
fn render_alert(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(56, 8, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(title, Color::Red), area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().modal.dismiss_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 帮助中的一行：按键 + 说明
fn help_line(key: impl Into<String>, desc: &'static str) -> Line<'static> {
    let key = key.into();
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn help_section(title: &'static str) -> Line<'static> {
    Line::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let a = &help.actions;

    let area = centered_rect(52, 26, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(help.title, Color::Cyan), area);

    let lines = vec![
        help_section(help.global_shortcuts),
        help_line("Tab/S-Tab", a.switch_panel),
        help_line(DefaultKeymap::TOGGLE_SIDEBAR.label(), a.toggle_sidebar),
        help_line(DefaultKeymap::REFRESH.label(), a.refresh),
        help_line(DefaultKeymap::HELP.label(), a.help),
        help_line(DefaultKeymap::QUIT.label(), a.quit),
        Line::from(""),
        help_section(help.form_shortcuts),
        help_line("↑↓", a.move_field),
        help_line("←→", a.switch_category),
        help_line(
            format!("{}/{}", DefaultKeymap::SUBMIT.label(), DefaultKeymap::SUBMIT_ALT.label()),
            a.submit,
        ),
        help_line(DefaultKeymap::CANCEL_EDIT.label(), a.cancel_edit),
        Line::from(""),
        help_section(help.table_shortcuts),
        help_line("↑↓/jk", a.move_up_down),
        help_line("Enter/e", a.edit),
        help_line("d/Delete", a.delete),
        help_line(format!("n/{}", DefaultKeymap::NEW_CARD.label()), a.new),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
