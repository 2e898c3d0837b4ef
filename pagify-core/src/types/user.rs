//! 平台用户（管理员视角）

use serde::{Deserialize, Serialize};

use crate::list_view::Listable;

/// 账号状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Suspended,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 订阅计划
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Plan {
    #[default]
    Free,
    Premium,
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Free => "Free",
            Self::Premium => "Premium",
        })
    }
}

/// 用户管理页中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    /// 用户 ID（如 `USR-001`）
    pub id: String,
    /// 显示名
    pub name: String,
    /// 邮箱
    pub email: String,
    /// 账号状态
    pub status: UserStatus,
    /// 订阅计划
    #[serde(default)]
    pub plan: Plan,
}

impl Listable for ManagedUser {
    type Status = UserStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.id, self.name, self.email)
    }

    fn status(&self) -> UserStatus {
        self.status
    }

    fn all_statuses() -> &'static [UserStatus] {
        &[UserStatus::Active, UserStatus::Suspended]
    }
}
