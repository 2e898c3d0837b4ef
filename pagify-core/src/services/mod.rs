//! 业务逻辑服务层

mod action_dispatcher;
mod catalog_service;
mod profile_service;
mod session_service;

pub use action_dispatcher::{Action, ActionDispatcher, ActionKind, DashboardLists, Notice, RemoteOutcome};
pub use catalog_service::CatalogService;
pub use profile_service::{MAX_PICTURE_BYTES, ProfileService};
pub use session_service::SessionService;

use std::sync::Arc;

use pagify_api::StorefrontApi;

use crate::error::{CoreError, CoreResult};
use crate::session::SessionContext;
use crate::traits::TokenStore;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入 API 客户端和平台特定的 token 存储实现。
pub struct ServiceContext {
    /// 后端 API
    pub api: Arc<dyn StorefrontApi>,
    /// Token 存储
    pub token_store: Arc<dyn TokenStore>,
    /// 当前会话
    pub session: SessionContext,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            token_store,
            session: SessionContext::new(),
        }
    }

    /// 当前会话的 token，未登录时返回 `NotAuthenticated`
    pub async fn require_token(&self) -> CoreResult<String> {
        self.session
            .token()
            .await
            .ok_or(CoreError::NotAuthenticated)
    }
}
