//! 弹窗状态

use pagify_core::form::{FormSchema, FormState, login_form, profile_form, seller_login_form};
use pagify_core::services::Action;
use pagify_core::types::Portal;

/// 登录弹窗的焦点：0=入口, 1=邮箱, 2=密码
pub const LOGIN_FOCUS_COUNT: usize = 3;

/// 资料弹窗的焦点：0=姓名, 1=电话
pub const PROFILE_FOCUS_COUNT: usize = 2;

/// 入口对应的登录表单
pub fn login_schema(portal: Portal) -> FormSchema {
    match portal {
        Portal::Buyer => login_form(),
        Portal::Seller => seller_login_form(),
    }
}

/// 登录弹窗中焦点对应的字段名
pub fn login_field(focus: usize) -> Option<&'static str> {
    match focus {
        1 => Some("email"),
        2 => Some("password"),
        _ => None,
    }
}

/// 资料弹窗中焦点对应的字段名
pub fn profile_field(focus: usize) -> Option<&'static str> {
    profile_form().fields.get(focus).map(|f| f.name)
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 登录
    Login {
        portal: Portal,
        form: FormState,
        focus: usize,
        /// 密码是否可见
        show_password: bool,
        /// 请求进行中
        submitting: bool,
        /// 服务端返回的错误
        error: Option<String>,
        /// 以通知形式展示的校验错误（卖家入口）
        notifications: Vec<String>,
    },
    /// 确认破坏性动作
    ConfirmAction {
        action: Action,
        prompt: String,
        /// 焦点：false=取消, true=确认
        confirm_focused: bool,
    },
    /// 编辑个人资料
    EditProfile {
        form: FormState,
        focus: usize,
        submitting: bool,
        error: Option<String>,
    },
    /// 上传头像
    UploadPicture {
        path: String,
        submitting: bool,
        error: Option<String>,
    },
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
    /// 详情 / 一般提示
    Notice { title: String, lines: Vec<String> },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// 当前是否是登录弹窗
    pub fn is_login(&self) -> bool {
        matches!(self.active, Some(Modal::Login { .. }))
    }

    pub fn show_login(&mut self, portal: Portal) {
        self.active = Some(Modal::Login {
            portal,
            form: FormState::new(),
            focus: 1,
            show_password: false,
            submitting: false,
            error: None,
            notifications: Vec::new(),
        });
    }

    pub fn show_confirm(&mut self, action: Action, prompt: String) {
        self.active = Some(Modal::ConfirmAction {
            action,
            prompt,
            confirm_focused: false,
        });
    }

    pub fn show_edit_profile(&mut self, form: FormState) {
        self.active = Some(Modal::EditProfile {
            form,
            focus: 0,
            submitting: false,
            error: None,
        });
    }

    pub fn show_upload(&mut self) {
        self.active = Some(Modal::UploadPicture {
            path: String::new(),
            submitting: false,
            error: None,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_notice(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.active = Some(Modal::Notice {
            title: title.into(),
            lines,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagify_core::form::ReportMode;

    #[test]
    fn seller_login_reports_notifications() {
        assert_eq!(
            login_schema(Portal::Seller).report_mode,
            ReportMode::Notifications
        );
        assert_eq!(login_schema(Portal::Buyer).report_mode, ReportMode::PerField);
    }

    #[test]
    fn focus_maps_to_fields() {
        assert_eq!(login_field(0), None);
        assert_eq!(login_field(2), Some("password"));
        assert_eq!(profile_field(0), Some("name"));
        assert_eq!(profile_field(1), Some("phone"));
        assert_eq!(profile_field(PROFILE_FOCUS_COUNT), None);
    }

    #[test]
    fn login_opens_on_email_field() {
        let mut modal = ModalState::new();
        modal.show_login(Portal::Seller);
        assert!(modal.is_login());
        assert!(matches!(
            modal.active,
            Some(Modal::Login { focus: 1, portal: Portal::Seller, .. })
        ));
        modal.close();
        assert!(!modal.is_open());
    }
}
