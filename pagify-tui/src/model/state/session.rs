//! 会话状态（UI 侧快照）
//!
//! 权威会话在 pagify-core 的 `SessionContext` 中；这里只保存渲染所需的资料。

use pagify_core::types::{Portal, Role, UserProfile};

/// 会话阶段
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    /// 正在用已存 token 恢复会话
    #[default]
    Restoring,
    /// 未登录
    Anonymous,
    /// 已登录
    SignedIn(UserProfile),
}

/// 会话状态
#[derive(Debug, Default)]
pub struct SessionState {
    /// 当前（或即将使用的）登录入口
    pub portal: Portal,
    pub status: SessionStatus,
}

impl SessionState {
    pub fn new(portal: Portal) -> Self {
        Self {
            portal,
            status: SessionStatus::Restoring,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.status {
            SessionStatus::SignedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn profile_mut(&mut self) -> Option<&mut UserProfile> {
        match &mut self.status {
            SessionStatus::SignedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().map(|p| p.role)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.status, SessionStatus::SignedIn(_))
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self.status, SessionStatus::Restoring)
    }
}
