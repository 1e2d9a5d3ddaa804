//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, NavigationMessage, TableMessage};
use crate::model::{App, FocusPanel, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 表单中 '?' 是普通字符
    if DefaultKeymap::HELP.matches(&key)
        || (!app.focus.is_form() && key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::TOGGLE_SIDEBAR.matches(&key) {
        return AppMessage::ToggleSidebar;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }

    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    // 根据焦点位置处理按键
    match app.focus {
        FocusPanel::Sidebar => handle_sidebar_keys(key),
        FocusPanel::Form => handle_form_keys(key),
        FocusPanel::Table => handle_table_keys(key),
    }
}

/// 处理侧边栏的按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}

/// 处理表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) || DefaultKeymap::SUBMIT_ALT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    if DefaultKeymap::CANCEL_EDIT.matches(&key) {
        return AppMessage::Form(FormMessage::CancelEdit);
    }

    match key.code {
        KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Left => AppMessage::Form(FormMessage::PrevOption),
        KeyCode::Right => AppMessage::Form(FormMessage::NextOption),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEW_CARD.matches(&key) {
        return AppMessage::Table(TableMessage::New);
    }
    if DefaultKeymap::EDIT_CARD.matches(&key) {
        return AppMessage::Table(TableMessage::Edit);
    }
    if DefaultKeymap::DELETE_CARD.matches(&key) {
        return AppMessage::Table(TableMessage::Delete);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Home => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End => AppMessage::Table(TableMessage::SelectLast),
        KeyCode::Enter | KeyCode::Char('e') => AppMessage::Table(TableMessage::Edit),
        KeyCode::Delete | KeyCode::Char('d') => AppMessage::Table(TableMessage::Delete),
        KeyCode::Char('n') => AppMessage::Table(TableMessage::New),
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => match key.code {
            // Tab 或 ← →: 切换焦点
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 帮助和提示弹窗只响应关闭按键
        Some(Modal::Help | Modal::Alert { .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}
