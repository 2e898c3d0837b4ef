//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{DefaultKeymap, is_text_input};
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

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
        // 终端窗口大小改变，下一轮自动重绘
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

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 搜索模式下字符都进入查询框
    if app.searching && app.focus.is_content() {
        return handle_search_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::SESSION.matches(&key) {
        return AppMessage::ToggleSession;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 搜索输入
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::Content(ContentMessage::EndSearch),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Char(c) if is_text_input(&key) => {
            AppMessage::Content(ContentMessage::SearchInput(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Catalog | Page::Products | Page::Users | Page::Orders => {
            handle_list_keys(key, app.current_page)
        }
        Page::Profile => handle_profile_keys(key),
        Page::Settings => handle_settings_keys(key),
        Page::Home => AppMessage::Noop,
    }
}

/// 处理列表类页面的按键
fn handle_list_keys(key: KeyEvent, page: Page) -> AppMessage {
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::StartSearch);
    }
    if DefaultKeymap::CYCLE_CATEGORY.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleCategory);
    }
    if DefaultKeymap::CLEAR_FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearFilter);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Left => AppMessage::ToggleFocus,
        _ => handle_action_keys(key, page),
    }
}

/// 各列表页的动作键
fn handle_action_keys(key: KeyEvent, page: Page) -> AppMessage {
    if page == Page::Products && DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    let msg = match (page, key.code) {
        (Page::Products, KeyCode::Char('p')) => ContentMessage::Publish,
        (Page::Products, KeyCode::Char('a')) => ContentMessage::Archive,
        (Page::Products, KeyCode::Char('b')) => ContentMessage::Block,
        (Page::Users, KeyCode::Char('u')) => ContentMessage::Upgrade,
        (Page::Users, KeyCode::Char('s')) => ContentMessage::ToggleSuspend,
        (Page::Orders, KeyCode::Char('n')) => ContentMessage::Advance,
        (Page::Orders, KeyCode::Char('c')) => ContentMessage::Cancel,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理个人资料页面的按键
fn handle_profile_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) || key.code == KeyCode::Enter {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_UPLOAD.matches(&key) {
        return AppMessage::Content(ContentMessage::Upload);
    }
    match key.code {
        KeyCode::Left => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
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

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Login { focus, .. } => handle_form_keys(key, Some(*focus)),
        Modal::EditProfile { .. } | Modal::UploadPicture { .. } => handle_form_keys(key, None),
        Modal::ConfirmAction { .. } => handle_confirm_keys(key),
        // 帮助、错误和提示弹窗只响应关闭按键
        Modal::Help | Modal::Error { .. } | Modal::Notice { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 表单弹窗的按键
///
/// `login_focus` 只在登录弹窗中给出：焦点为 0 时左右键切换入口。
fn handle_form_keys(key: KeyEvent, login_focus: Option<usize>) -> AppMessage {
    if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
        return AppMessage::Modal(ModalMessage::ToggleSecrets);
    }
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Modal(ModalMessage::ClearField);
    }

    let on_portal = login_focus == Some(0);
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Left if on_portal => AppMessage::Modal(ModalMessage::PrevPortal),
        KeyCode::Right if on_portal => AppMessage::Modal(ModalMessage::NextPortal),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c) if is_text_input(&key) && !on_portal => {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理确认弹窗的按键
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleConfirmFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Char(c @ ('y' | 'Y' | 'n' | 'N')) => AppMessage::Modal(ModalMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}
