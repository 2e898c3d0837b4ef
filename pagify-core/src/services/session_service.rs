//! 会话服务：启动引导、登录、登出

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::form::{FormState, login_form, seller_login_form};
use crate::services::ServiceContext;
use crate::session::{BootstrapOutcome, Session, SessionPhase, token_key};
use crate::types::{Credentials, Portal};

/// 会话服务
pub struct SessionService {
    ctx: Arc<ServiceContext>,
}

impl SessionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 启动引导
    ///
    /// 读取该入口的已存 token：不存在或读取失败则要求登录；存在则请求一次
    /// `GET /users/me`。请求的任何失败（网络、4xx、5xx、解析）都视为未登录：
    /// 清除 token 并要求登录。
    pub async fn bootstrap(&self, portal: Portal) -> CoreResult<BootstrapOutcome> {
        let key = token_key(portal);
        let token = match self.ctx.token_store.get(key).await {
            Ok(Some(token)) => token,
            Ok(None) => {
                log::info!("No stored token for {} portal", portal.display_name());
                self.ctx.session.set_phase(SessionPhase::NoToken).await;
                return Ok(BootstrapOutcome::RedirectToLogin);
            }
            Err(e) => {
                log::warn!("Unreadable token '{key}', treating as signed out: {e}");
                if let Err(remove_err) = self.ctx.token_store.remove(key).await {
                    log::error!("Failed to remove token '{key}': {remove_err}");
                }
                self.ctx.session.teardown(SessionPhase::TokenCleared).await;
                return Ok(BootstrapOutcome::RedirectToLogin);
            }
        };

        self.ctx.session.set_phase(SessionPhase::Fetching).await;
        match self.ctx.api.current_user(&token).await {
            Ok(profile) => {
                self.ctx
                    .session
                    .establish(Session {
                        portal,
                        token,
                        profile: profile.clone(),
                    })
                    .await;
                Ok(BootstrapOutcome::Authenticated(profile))
            }
            Err(e) => {
                if e.is_unauthorized() {
                    log::info!("Stored token for {} portal expired", portal.display_name());
                } else {
                    log::warn!("Stored session rejected, clearing token: {e}");
                }
                if let Err(remove_err) = self.ctx.token_store.remove(key).await {
                    log::error!("Failed to remove stale token '{key}': {remove_err}");
                }
                self.ctx.session.teardown(SessionPhase::TokenCleared).await;
                Ok(BootstrapOutcome::RedirectToLogin)
            }
        }
    }

    /// 校验登录表单并取出凭证（不发请求）
    ///
    /// 校验失败时返回 `CoreError::Validation`，调用方不得继续发起登录。
    pub fn prepare_login(portal: Portal, form: &mut FormState) -> CoreResult<Credentials> {
        let schema = match portal {
            Portal::Buyer => login_form(),
            Portal::Seller => seller_login_form(),
        };
        form.validate(&schema).map_err(CoreError::Validation)?;

        Ok(Credentials {
            email: form.value("email").trim().to_string(),
            password: form.value("password").to_string(),
        })
    }

    /// 登录：换取 token、持久化、获取资料并建立会话
    pub async fn login(&self, portal: Portal, credentials: &Credentials) -> CoreResult<Session> {
        log::info!("Logging in via {} portal", portal.display_name());
        let auth = self.ctx.api.login(portal, credentials).await?;

        let key = token_key(portal);
        self.ctx.token_store.set(key, &auth.token).await?;

        let profile = match self.ctx.api.current_user(&auth.token).await {
            Ok(profile) => profile,
            Err(e) => {
                if let Err(remove_err) = self.ctx.token_store.remove(key).await {
                    log::error!("Failed to remove token '{key}': {remove_err}");
                }
                return Err(e.into());
            }
        };

        let session = Session {
            portal,
            token: auth.token,
            profile,
        };
        self.ctx.session.establish(session.clone()).await;
        Ok(session)
    }

    /// 表单提交：校验 → 登录 → 成功后清空表单
    pub async fn submit_login(&self, portal: Portal, form: &mut FormState) -> CoreResult<Session> {
        let credentials = Self::prepare_login(portal, form)?;
        let session = self.login(portal, &credentials).await?;
        form.clear();
        Ok(session)
    }

    /// 登出：销毁会话并删除该入口的 token
    pub async fn logout(&self) -> CoreResult<()> {
        let portals: Vec<Portal> = match self.ctx.session.teardown(SessionPhase::NoToken).await {
            Some(session) => vec![session.portal],
            None => Portal::all().to_vec(),
        };
        for portal in portals {
            self.ctx.token_store.remove(token_key(portal)).await?;
        }
        log::info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::test_utils::{TEST_TOKEN, create_signed_in_context, create_test_context, test_profile};
    use crate::traits::TokenStore;
    use crate::types::Role;
    use pagify_api::ApiError;

    fn login_form_state(email: &str, password: &str) -> FormState {
        let mut form = FormState::new();
        form.set("email", email);
        form.set("password", password);
        form
    }

    #[tokio::test]
    async fn bootstrap_without_token_redirects() {
        let (ctx, api, _) = create_test_context();
        let svc = SessionService::new(ctx.clone());

        let outcome = svc.bootstrap(Portal::Buyer).await.unwrap();
        assert_eq!(outcome, BootstrapOutcome::RedirectToLogin);
        assert_eq!(ctx.session.phase().await, SessionPhase::NoToken);
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn bootstrap_with_unreadable_token_redirects() {
        let (ctx, api, store) = create_test_context();
        store.set_get_error(Some("bad token file".into())).await;
        let svc = SessionService::new(ctx.clone());

        let outcome = svc.bootstrap(Portal::Buyer).await.unwrap();
        assert_eq!(outcome, BootstrapOutcome::RedirectToLogin);
        assert_eq!(ctx.session.phase().await, SessionPhase::TokenCleared);
        assert_eq!(api.total_calls(), 0);

        store.set_get_error(None).await;
        api.set_profile_result(Ok(test_profile(Role::Buyer))).await;
        let mut form = login_form_state("ann@pagify.io", "secret1");
        svc.submit_login(Portal::Buyer, &mut form).await.unwrap();
        assert_eq!(store.get("token").await.unwrap().as_deref(), Some(TEST_TOKEN));
    }

    #[tokio::test]
    async fn bootstrap_with_token_populates_session() {
        let (ctx, api, store) = create_test_context();
        store.set("sellerToken", TEST_TOKEN).await.unwrap();
        api.set_profile_result(Ok(test_profile(Role::Seller))).await;
        let svc = SessionService::new(ctx.clone());

        let outcome = svc.bootstrap(Portal::Seller).await.unwrap();
        assert_eq!(
            outcome,
            BootstrapOutcome::Authenticated(test_profile(Role::Seller))
        );
        assert_eq!(ctx.session.phase().await, SessionPhase::Populated);
        assert_eq!(api.last_token.read().await.as_deref(), Some(TEST_TOKEN));
    }

    #[tokio::test]
    async fn bootstrap_failure_clears_token() {
        let (ctx, api, store) = create_test_context();
        store.set("token", "expired").await.unwrap();
        api.set_profile_result(Err(ApiError::Unauthorized { raw_message: None }))
            .await;
        let svc = SessionService::new(ctx.clone());

        let outcome = svc.bootstrap(Portal::Buyer).await.unwrap();
        assert_eq!(outcome, BootstrapOutcome::RedirectToLogin);
        assert_eq!(store.get("token").await.unwrap(), None);
        assert_eq!(ctx.session.phase().await, SessionPhase::TokenCleared);
        assert!(!ctx.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn bootstrap_network_failure_is_not_authenticated() {
        let (ctx, api, store) = create_test_context();
        store.set("token", TEST_TOKEN).await.unwrap();
        api.set_profile_result(Err(ApiError::NetworkError {
            detail: "connection refused".into(),
        }))
        .await;
        let svc = SessionService::new(ctx);

        let outcome = svc.bootstrap(Portal::Buyer).await.unwrap();
        assert_eq!(outcome, BootstrapOutcome::RedirectToLogin);
        assert_eq!(store.get("token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_email_never_calls_api() {
        let (ctx, api, _) = create_test_context();
        let svc = SessionService::new(ctx);
        let mut form = login_form_state("not-an-email", "secret1");

        let err = svc.submit_login(Portal::Buyer, &mut form).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.user_message(), "Please enter a valid email address");
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.error("email"), Some("Please enter a valid email address"));
    }

    #[tokio::test]
    async fn seller_login_stores_seller_token() {
        let (ctx, api, store) = create_test_context();
        let svc = SessionService::new(ctx.clone());
        let mut form = login_form_state("seller@pagify.io", "secret1");

        let session = svc.submit_login(Portal::Seller, &mut form).await.unwrap();
        assert_eq!(session.token, TEST_TOKEN);
        assert_eq!(*api.last_portal.read().await, Some(Portal::Seller));
        assert_eq!(
            store.get("sellerToken").await.unwrap().as_deref(),
            Some(TEST_TOKEN)
        );
        assert_eq!(store.get("token").await.unwrap(), None);
        assert_eq!(form.value("email"), "");
        assert!(ctx.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn rejected_login_surfaces_server_message() {
        let (ctx, api, store) = create_test_context();
        api.set_login_result(Err(ApiError::ServerError {
            status: 400,
            raw_message: Some("Invalid email or password".into()),
        }))
        .await;
        let svc = SessionService::new(ctx);
        let mut form = login_form_state("ann@pagify.io", "wrongpass");

        let err = svc.submit_login(Portal::Buyer, &mut form).await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(store.get("token").await.unwrap(), None);
        // 失败时保留输入
        assert_eq!(form.value("email"), "ann@pagify.io");
    }

    #[tokio::test]
    async fn token_store_failure_aborts_login() {
        let (ctx, _, store) = create_test_context();
        store.set_set_error(Some("disk full".into())).await;
        let svc = SessionService::new(ctx.clone());
        let credentials = Credentials {
            email: "ann@pagify.io".into(),
            password: "secret1".into(),
        };

        let err = svc.login(Portal::Buyer, &credentials).await.unwrap_err();
        assert!(matches!(err, CoreError::StorageError(_)));
        assert!(!ctx.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn logout_removes_token_and_session() {
        let (ctx, _, store) = create_signed_in_context(Role::Seller).await;
        let svc = SessionService::new(ctx.clone());

        svc.logout().await.unwrap();
        assert_eq!(store.get("sellerToken").await.unwrap(), None);
        assert!(!ctx.session.is_authenticated().await);
        assert_eq!(ctx.session.phase().await, SessionPhase::NoToken);
    }
}
