//! 页面数据状态

mod modal;
mod session;
mod settings;

pub use modal::{
    LOGIN_FOCUS_COUNT, Modal, ModalState, PROFILE_FOCUS_COUNT, login_field, login_schema,
    profile_field,
};
pub use session::{SessionState, SessionStatus};
pub use settings::{SettingItem, SettingsState};
