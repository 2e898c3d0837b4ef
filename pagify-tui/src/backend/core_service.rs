//! 核心服务
//!
//! 封装 pagify-core 的各种服务，
//! 把 Update 层产生的 `BackendCommand` 变成一次异步调用，结果以 `BackendEvent` 返回

use std::sync::Arc;

use anyhow::Result;
use pagify_api::{RestStorefront, StorefrontApi};
use pagify_core::services::{
    ActionDispatcher, CatalogService, ProfileService, ServiceContext, SessionService,
};
use pagify_core::session::BootstrapOutcome;
use pagify_core::{CoreError, TokenStore};
use tokio::sync::mpsc::UnboundedSender;

use super::config_service::{AppConfig, ConfigService, LocalConfigService};
use super::token_store::FileTokenStore;
use crate::message::{BackendCommand, BackendEvent, Operation};

/// TUI 核心服务
///
/// 持有服务上下文，提供给主循环调用
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
    /// 配置持久化
    config_service: Arc<dyn ConfigService>,
}

impl CoreService {
    /// 按配置创建：REST 客户端 + 文件 token 存储
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api = Arc::new(RestStorefront::new(&config.client_config())?);
        log::info!("Backend at {}", config.api_base_url);

        Ok(Self::with_parts(
            api,
            Arc::new(FileTokenStore::new()),
            Arc::new(LocalConfigService::new()),
        ))
    }

    /// 注入依赖创建
    pub fn with_parts(
        api: Arc<dyn StorefrontApi>,
        token_store: Arc<dyn TokenStore>,
        config_service: Arc<dyn ConfigService>,
    ) -> Self {
        Self {
            ctx: Arc::new(ServiceContext::new(api, token_store)),
            config_service,
        }
    }

    pub fn session(&self) -> SessionService {
        SessionService::new(self.ctx.clone())
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.ctx.clone())
    }

    pub fn profile(&self) -> ProfileService {
        ProfileService::new(self.ctx.clone())
    }

    pub fn dispatcher(&self) -> ActionDispatcher {
        ActionDispatcher::new(self.ctx.clone())
    }

    /// 在后台执行命令，完成后把结果发回主循环
    ///
    /// 不做合并或取消：同一动作触发两次就会发出两次请求。
    pub fn spawn(self: &Arc<Self>, command: BackendCommand, tx: UnboundedSender<BackendEvent>) {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let event = service.execute(command).await;
            if tx.send(event).is_err() {
                log::debug!("UI loop gone, dropping backend event");
            }
        });
    }

    /// 执行一条命令
    pub async fn execute(&self, command: BackendCommand) -> BackendEvent {
        let operation = command.operation();
        let result = match command {
            BackendCommand::Bootstrap(portal) => {
                self.session()
                    .bootstrap(portal)
                    .await
                    .map(|outcome| match outcome {
                        BootstrapOutcome::Authenticated(profile) => {
                            BackendEvent::SessionRestored(profile)
                        }
                        BootstrapOutcome::RedirectToLogin => BackendEvent::LoginRequired(portal),
                    })
            }
            BackendCommand::Login { portal, credentials } => self
                .session()
                .login(portal, &credentials)
                .await
                .map(|session| BackendEvent::LoggedIn {
                    portal: session.portal,
                    profile: session.profile,
                }),
            BackendCommand::Logout => self
                .session()
                .logout()
                .await
                .map(|()| BackendEvent::LoggedOut),
            BackendCommand::LoadProducts(scope) => self
                .catalog()
                .list_products(scope)
                .await
                .map(|products| BackendEvent::ProductsLoaded { scope, products }),
            BackendCommand::Remote(action) => self
                .dispatcher()
                .execute_remote(&action)
                .await
                .map(BackendEvent::RemoteDone),
            BackendCommand::UpdateProfile(update) => self
                .profile()
                .update_profile(&update)
                .await
                .map(BackendEvent::ProfileUpdated),
            BackendCommand::UploadPicture(path) => self
                .profile()
                .upload_picture(&path)
                .await
                .map(BackendEvent::PictureUploaded),
            BackendCommand::SaveConfig(config) => {
                return self.save_config(config).await;
            }
        };

        result.unwrap_or_else(|e| failed(operation, &e))
    }

    async fn save_config(&self, config: AppConfig) -> BackendEvent {
        let config_service = Arc::clone(&self.config_service);
        let outcome = tokio::task::spawn_blocking(move || config_service.save(&config)).await;

        match outcome {
            Ok(Ok(())) => BackendEvent::ConfigSaved,
            Ok(Err(e)) => {
                log::error!("Failed to save config: {e:#}");
                BackendEvent::Failed {
                    operation: Operation::SaveConfig,
                    message: format!("Could not save settings: {e}"),
                }
            }
            Err(e) => {
                log::error!("Config save task failed: {e}");
                BackendEvent::Failed {
                    operation: Operation::SaveConfig,
                    message: "Could not save settings".to_string(),
                }
            }
        }
    }
}

/// 记录日志并转换为面向用户的失败事件
fn failed(operation: Operation, error: &CoreError) -> BackendEvent {
    if error.is_expected() {
        log::warn!("{} failed: {error}", operation.label());
    } else {
        log::error!("{} failed: {error}", operation.label());
    }
    BackendEvent::Failed {
        operation,
        message: error.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pagify_api::ApiError;
    use pagify_core::InMemoryTokenStore;
    use pagify_core::services::{Action, RemoteOutcome};
    use pagify_core::types::{
        AuthToken, Credentials, Portal, Product, ProductScope, ProductStatus, ProfilePicture,
        ProfileUpdate, Role, UploadedPicture, UserProfile,
    };

    use super::*;

    /// 固定响应的后端
    #[derive(Default)]
    struct StubApi {
        fail_delete: bool,
        requests: AtomicUsize,
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: "sel-9".into(),
            name: "Sam Seller".into(),
            email: "sam@pagify.io".into(),
            role: Role::Seller,
            phone: None,
            avatar_url: None,
        }
    }

    #[async_trait]
    impl StorefrontApi for StubApi {
        async fn login(&self, _: Portal, _: &Credentials) -> pagify_api::Result<AuthToken> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(AuthToken {
                token: "stub-token-1234567890".into(),
            })
        }

        async fn current_user(&self, _: &str) -> pagify_api::Result<UserProfile> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(profile())
        }

        async fn update_current_user(
            &self,
            _: &str,
            _: &ProfileUpdate,
        ) -> pagify_api::Result<UserProfile> {
            Ok(profile())
        }

        async fn upload_profile_picture(
            &self,
            _: &str,
            _: ProfilePicture,
        ) -> pagify_api::Result<UploadedPicture> {
            Ok(UploadedPicture::default())
        }

        async fn list_products(
            &self,
            _: Option<&str>,
            _: ProductScope,
        ) -> pagify_api::Result<Vec<Product>> {
            Ok(vec![Product {
                id: "PRD-1".into(),
                title: "Emma".into(),
                author: Some("Jane Austen".into()),
                price: 9.5,
                stock: 3,
                status: ProductStatus::Active,
                seller: None,
                category: None,
            }])
        }

        async fn delete_product(&self, _: &str, _: &str) -> pagify_api::Result<()> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            if self.fail_delete {
                Err(ApiError::ServerError {
                    status: 503,
                    raw_message: None,
                })
            } else {
                Ok(())
            }
        }
    }

    struct NullConfig;

    impl ConfigService for NullConfig {
        fn load(&self) -> Result<AppConfig> {
            Ok(AppConfig::default())
        }

        fn save(&self, _: &AppConfig) -> Result<()> {
            anyhow::bail!("read-only file system")
        }
    }

    fn service(api: StubApi) -> (CoreService, Arc<InMemoryTokenStore>) {
        let store = Arc::new(InMemoryTokenStore::new());
        let svc = CoreService::with_parts(Arc::new(api), store.clone(), Arc::new(NullConfig));
        (svc, store)
    }

    fn seller_login() -> BackendCommand {
        BackendCommand::Login {
            portal: Portal::Seller,
            credentials: Credentials {
                email: "sam@pagify.io".into(),
                password: "secret1".into(),
            },
        }
    }

    #[tokio::test]
    async fn bootstrap_without_token_requires_login() {
        let (svc, _) = service(StubApi::default());
        let event = svc.execute(BackendCommand::Bootstrap(Portal::Seller)).await;
        assert!(matches!(event, BackendEvent::LoginRequired(Portal::Seller)));
    }

    #[tokio::test]
    async fn login_stores_token_and_reports_profile() {
        let (svc, store) = service(StubApi::default());

        let event = svc.execute(seller_login()).await;
        assert!(matches!(
            event,
            BackendEvent::LoggedIn { portal: Portal::Seller, ref profile } if profile.role == Role::Seller
        ));
        assert_eq!(
            store.get("sellerToken").await.unwrap().as_deref(),
            Some("stub-token-1234567890")
        );
    }

    #[tokio::test]
    async fn corrupt_token_file_still_allows_login() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "not json").unwrap();
        let svc = CoreService::with_parts(
            Arc::new(StubApi::default()),
            Arc::new(FileTokenStore::with_path(&path)),
            Arc::new(NullConfig),
        );

        let event = svc.execute(BackendCommand::Bootstrap(Portal::Seller)).await;
        assert!(matches!(event, BackendEvent::LoginRequired(Portal::Seller)));

        let event = svc.execute(seller_login()).await;
        assert!(matches!(event, BackendEvent::LoggedIn { portal: Portal::Seller, .. }));

        let reopened = FileTokenStore::with_path(&path);
        assert_eq!(
            reopened.get("sellerToken").await.unwrap().as_deref(),
            Some("stub-token-1234567890")
        );
    }

    #[tokio::test]
    async fn delete_failure_becomes_generic_message() {
        let (svc, _) = service(StubApi {
            fail_delete: true,
            ..StubApi::default()
        });
        svc.execute(seller_login()).await;

        let event = svc
            .execute(BackendCommand::Remote(Action::DeleteProduct {
                product_id: "PRD-1".into(),
            }))
            .await;
        match event {
            BackendEvent::Failed { operation, message } => {
                assert_eq!(operation, Operation::RemoteAction);
                assert_eq!(message, "Something went wrong. Please try again.");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_success_reports_outcome() {
        let (svc, _) = service(StubApi::default());
        svc.execute(seller_login()).await;

        let event = svc
            .execute(BackendCommand::Remote(Action::DeleteProduct {
                product_id: "PRD-1".into(),
            }))
            .await;
        assert!(matches!(
            event,
            BackendEvent::RemoteDone(RemoteOutcome::ProductDeleted { ref product_id }) if product_id == "PRD-1"
        ));
    }

    #[tokio::test]
    async fn full_catalog_without_session_is_rejected() {
        let (svc, _) = service(StubApi::default());
        let event = svc
            .execute(BackendCommand::LoadProducts(ProductScope::All))
            .await;
        assert!(matches!(
            event,
            BackendEvent::Failed { operation: Operation::LoadProducts, ref message }
                if message == "Please log in to continue."
        ));
    }

    #[tokio::test]
    async fn config_save_failure_is_reported() {
        let (svc, _) = service(StubApi::default());
        let event = svc
            .execute(BackendCommand::SaveConfig(AppConfig::default()))
            .await;
        assert!(matches!(
            event,
            BackendEvent::Failed {
                operation: Operation::SaveConfig,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn spawned_command_reports_over_channel() {
        let (svc, _) = service(StubApi::default());
        let svc = Arc::new(svc);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        svc.spawn(BackendCommand::LoadProducts(ProductScope::Public), tx);
        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            BackendEvent::ProductsLoaded { scope: ProductScope::Public, ref products } if products.len() == 1
        ));
    }
}
