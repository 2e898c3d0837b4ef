//! 弹窗更新逻辑

use std::path::PathBuf;

use pagify_core::CoreError;
use pagify_core::form::{FormState, ReportMode};
use pagify_core::services::{ProfileService, SessionService};
use pagify_core::types::Portal;

use crate::message::{BackendCommand, ModalMessage};
use crate::model::App;
use crate::model::state::{
    LOGIN_FOCUS_COUNT, Modal, PROFILE_FOCUS_COUNT, login_field, login_schema, profile_field,
};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Login { .. } => handle_login(app, msg),
        Modal::ConfirmAction { .. } => handle_confirm_action(app, msg),
        Modal::EditProfile { .. } => handle_edit_profile(app, msg),
        Modal::UploadPicture { .. } => handle_upload(app, msg),
        Modal::Help | Modal::Error { .. } | Modal::Notice { .. } => handle_simple_modal(app, msg),
    }
}

fn push_char(form: &mut FormState, field: &str, c: char) {
    let mut value = form.value(field).to_string();
    value.push(c);
    form.set(field, value);
}

fn pop_char(form: &mut FormState, field: &str) {
    let mut value = form.value(field).to_string();
    value.pop();
    form.set(field, value);
}

fn next_focus(focus: usize, count: usize) -> usize {
    (focus + 1) % count
}

fn prev_focus(focus: usize, count: usize) -> usize {
    focus.checked_sub(1).unwrap_or(count - 1)
}

fn other_portal(portal: Portal) -> Portal {
    match portal {
        Portal::Buyer => Portal::Seller,
        Portal::Seller => Portal::Buyer,
    }
}

/// 处理登录弹窗
fn handle_login(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Login {
        ref mut portal,
        ref mut form,
        ref mut focus,
        ref mut show_password,
        ref mut submitting,
        ref mut error,
        ref mut notifications,
    }) = app.modal.active
    else {
        return;
    };

    // 请求进行中只允许关闭
    if *submitting && msg != ModalMessage::Close {
        return;
    }

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => *focus = next_focus(*focus, LOGIN_FOCUS_COUNT),
        ModalMessage::PrevField => *focus = prev_focus(*focus, LOGIN_FOCUS_COUNT),

        ModalMessage::PrevPortal | ModalMessage::NextPortal => {
            // 只有在入口字段时才切换
            if *focus == 0 {
                *portal = other_portal(*portal);
                *error = None;
                notifications.clear();
            }
        }

        ModalMessage::ToggleSecrets => *show_password = !*show_password,

        ModalMessage::Input(c) => {
            if let Some(field) = login_field(*focus) {
                push_char(form, field, c);
                *error = None;
            }
        }

        ModalMessage::Backspace => {
            if let Some(field) = login_field(*focus) {
                pop_char(form, field);
            }
        }

        ModalMessage::ClearField => {
            if let Some(field) = login_field(*focus) {
                form.set(field, "");
            }
        }

        ModalMessage::Confirm => {
            let portal = *portal;
            notifications.clear();
            *error = None;

            match SessionService::prepare_login(portal, form) {
                Ok(credentials) => {
                    *submitting = true;
                    app.session.portal = portal;
                    app.set_status(format!("Signing in via {} portal...", portal.display_name()));
                    app.dispatch(BackendCommand::Login {
                        portal,
                        credentials,
                    });
                }
                Err(CoreError::Validation(errors)) => {
                    // 卖家入口把每条错误作为独立通知，其余显示在字段旁
                    if login_schema(portal).report_mode == ReportMode::Notifications {
                        *notifications = errors.notifications();
                    }
                }
                Err(e) => *error = Some(e.user_message()),
            }
        }

        ModalMessage::ToggleConfirmFocus => {}
    }
}

/// 处理确认弹窗
fn handle_confirm_action(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmAction {
        ref action,
        ref mut confirm_focused,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.set_status("Cancelled");
        }

        ModalMessage::ToggleConfirmFocus
        | ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::PrevPortal
        | ModalMessage::NextPortal => {
            *confirm_focused = !*confirm_focused;
        }

        ModalMessage::Confirm => {
            let confirmed = *confirm_focused;
            let action = action.clone();
            app.modal.close();
            if confirmed {
                super::perform_action(app, action);
            } else {
                app.set_status("Cancelled");
            }
        }

        ModalMessage::Input('y' | 'Y') => {
            let action = action.clone();
            app.modal.close();
            super::perform_action(app, action);
        }

        ModalMessage::Input('n' | 'N') => {
            app.modal.close();
            app.set_status("Cancelled");
        }

        _ => {}
    }
}

/// 处理资料编辑弹窗
fn handle_edit_profile(app: &mut App, msg: ModalMessage) {
    let Some(Modal::EditProfile {
        ref mut form,
        ref mut focus,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    if *submitting && msg != ModalMessage::Close {
        return;
    }

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => *focus = next_focus(*focus, PROFILE_FOCUS_COUNT),
        ModalMessage::PrevField => *focus = prev_focus(*focus, PROFILE_FOCUS_COUNT),

        ModalMessage::Input(c) => {
            if let Some(field) = profile_field(*focus) {
                push_char(form, field, c);
                *error = None;
            }
        }

        ModalMessage::Backspace => {
            if let Some(field) = profile_field(*focus) {
                pop_char(form, field);
            }
        }

        ModalMessage::ClearField => {
            if let Some(field) = profile_field(*focus) {
                form.set(field, "");
            }
        }

        ModalMessage::Confirm => match ProfileService::prepare_update(form) {
            Ok(profile_update) => {
                *submitting = true;
                app.set_status("Saving profile...");
                app.dispatch(BackendCommand::UpdateProfile(profile_update));
            }
            // 字段错误已记录在表单中
            Err(CoreError::Validation(_)) => {}
            Err(e) => *error = Some(e.user_message()),
        },

        _ => {}
    }
}

/// 展开 `~/` 开头的路径
fn expand_home(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

/// 处理头像上传弹窗
fn handle_upload(app: &mut App, msg: ModalMessage) {
    let Some(Modal::UploadPicture {
        ref mut path,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    if *submitting && msg != ModalMessage::Close {
        return;
    }

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::Input(c) => {
            path.push(c);
            *error = None;
        }

        ModalMessage::Backspace => {
            path.pop();
        }

        ModalMessage::ClearField => path.clear(),

        ModalMessage::Confirm => {
            if path.trim().is_empty() {
                *error = Some("Choose an image file to upload".to_string());
                return;
            }
            let file = expand_home(path);
            *submitting = true;
            app.set_status(format!("Uploading {}...", file.display()));
            app.dispatch(BackendCommand::UploadPicture(file));
        }

        _ => {}
    }
}

/// 处理简单弹窗（帮助、错误、提示）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
