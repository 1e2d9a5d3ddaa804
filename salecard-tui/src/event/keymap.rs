//! 快捷键绑定
//!
//! 表单获得焦点时普通字符都是输入，所以面板之外的操作一律挂在 Alt 上。
//! 状态栏和帮助弹窗通过 [`KeyBinding::label`] 显示按键，与实际绑定保持一致。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 单个按键绑定：修饰键 + 按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    const fn plain(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    const fn alt(c: char) -> Self {
        Self::new(KeyModifiers::ALT, KeyCode::Char(c))
    }

    const fn ctrl(c: char) -> Self {
        Self::new(KeyModifiers::CONTROL, KeyCode::Char(c))
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 显示用名称，如 `Alt+h`、`Enter`
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::ALT) {
            format!("Alt+{key}")
        } else if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// 默认绑定
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 应用级
    pub const QUIT: KeyBinding = KeyBinding::alt('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl('c');
    pub const HELP: KeyBinding = KeyBinding::alt('h');
    pub const REFRESH: KeyBinding = KeyBinding::alt('r');
    pub const TOGGLE_SIDEBAR: KeyBinding = KeyBinding::alt('b');
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::plain(KeyCode::Tab);

    // 卡片表单
    pub const SUBMIT: KeyBinding = KeyBinding::plain(KeyCode::Enter);
    pub const SUBMIT_ALT: KeyBinding = KeyBinding::alt('s');
    pub const CANCEL_EDIT: KeyBinding = KeyBinding::plain(KeyCode::Esc);

    // 卡片表格
    pub const NEW_CARD: KeyBinding = KeyBinding::alt('a');
    pub const EDIT_CARD: KeyBinding = KeyBinding::alt('e');
    pub const DELETE_CARD: KeyBinding = KeyBinding::alt('d');
}
