//! 会话上下文
//!
//! 启动流程（由 [`crate::services::SessionService::bootstrap`] 驱动）：
//!
//! ```text
//! NoToken ──────────────────────────────────────────▶ RedirectToLogin
//! TokenPresent ─▶ Fetching ─┬─ 成功 ─▶ Populated
//!                           └─ 失败 ─▶ TokenCleared ─▶ RedirectToLogin
//! ```

use pagify_api::utils::log_sanitizer::mask_token;
use tokio::sync::RwLock;

use crate::types::{Portal, Role, UserProfile};

/// Token key of the buyer / admin portal.
pub const BUYER_TOKEN_KEY: &str = "token";
/// Token key of the seller portal.
pub const SELLER_TOKEN_KEY: &str = "sellerToken";

/// 每个入口固定使用的 token 键
pub fn token_key(portal: Portal) -> &'static str {
    match portal {
        Portal::Buyer => BUYER_TOKEN_KEY,
        Portal::Seller => SELLER_TOKEN_KEY,
    }
}

/// 启动状态机的当前阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// 未找到 token（初始状态 / 已登出）
    #[default]
    NoToken,
    /// 正在请求 `/users/me`
    Fetching,
    /// 已获取用户资料
    Populated,
    /// 资料获取失败，token 已清除
    TokenCleared,
}

/// 启动结果
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    Authenticated(UserProfile),
    RedirectToLogin,
}

/// 已登录会话：token + 用户资料快照
#[derive(Clone, PartialEq)]
pub struct Session {
    pub portal: Portal,
    pub token: String,
    pub profile: UserProfile,
}

impl Session {
    pub fn role(&self) -> Role {
        self.profile.role
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("portal", &self.portal)
            .field("token", &mask_token(&self.token))
            .field("profile", &self.profile)
            .finish()
    }
}

#[derive(Default)]
struct SessionInner {
    session: Option<Session>,
    phase: SessionPhase,
}

/// 进程级会话上下文
///
/// 只能通过 [`establish`](Self::establish) 建立、[`teardown`](Self::teardown) 销毁。
#[derive(Default)]
pub struct SessionContext {
    inner: RwLock<SessionInner>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 建立会话（登录成功 / 启动时资料获取成功）
    pub async fn establish(&self, session: Session) {
        log::info!(
            "Session established for {} ({})",
            session.profile.email,
            session.role().display_name()
        );
        let mut inner = self.inner.write().await;
        inner.session = Some(session);
        inner.phase = SessionPhase::Populated;
    }

    /// 销毁会话，返回被销毁的会话
    pub async fn teardown(&self, phase: SessionPhase) -> Option<Session> {
        let mut inner = self.inner.write().await;
        inner.phase = phase;
        inner.session.take()
    }

    pub async fn set_phase(&self, phase: SessionPhase) {
        self.inner.write().await.phase = phase;
    }

    pub async fn phase(&self) -> SessionPhase {
        self.inner.read().await.phase
    }

    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.session.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.session.is_some()
    }

    /// 替换资料快照（资料编辑成功后）
    pub async fn update_profile(&self, profile: UserProfile) {
        if let Some(session) = self.inner.write().await.session.as_mut() {
            session.profile = profile;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Ann".into(),
            email: "ann@pagify.io".into(),
            role: Role::Seller,
            phone: None,
            avatar_url: None,
        }
    }

    #[test]
    fn portal_token_keys() {
        assert_eq!(token_key(Portal::Buyer), "token");
        assert_eq!(token_key(Portal::Seller), "sellerToken");
    }

    #[tokio::test]
    async fn establish_and_teardown() {
        let ctx = SessionContext::new();
        assert_eq!(ctx.phase().await, SessionPhase::NoToken);
        assert!(!ctx.is_authenticated().await);

        ctx.establish(Session {
            portal: Portal::Seller,
            token: "tok-123".into(),
            profile: profile(),
        })
        .await;
        assert_eq!(ctx.phase().await, SessionPhase::Populated);
        assert_eq!(ctx.token().await.as_deref(), Some("tok-123"));

        let gone = ctx.teardown(SessionPhase::NoToken).await;
        assert_eq!(gone.map(|s| s.portal), Some(Portal::Seller));
        assert!(ctx.token().await.is_none());
    }

    #[test]
    fn debug_masks_token() {
        let session = Session {
            portal: Portal::Buyer,
            token: "eyJhbGciOiJIUzI1NiJ9.payload.signature".into(),
            profile: profile(),
        };
        assert!(!format!("{session:?}").contains("payload"));
    }
}
