//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const SESSION: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 列表
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const CYCLE_CATEGORY: KeyBinding = KeyBinding::key(KeyCode::Char('f'));
    pub const CLEAR_FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('x'));

    // 操作
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_UPLOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));

    // 弹窗
    pub const TOGGLE_SECRETS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const CLEAR_FIELD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}

/// 文本输入只接受无修饰或 Shift 的字符
pub fn is_text_input(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT)
}
