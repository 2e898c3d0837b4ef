//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pagify_api::{ApiError, StorefrontApi};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::session::{Session, token_key};
use crate::traits::TokenStore;
use crate::types::{
    AuthToken, Credentials, Portal, Product, ProductScope, ProductStatus, ProfilePicture,
    ProfileUpdate, Role, UploadedPicture, UserProfile,
};

pub const TEST_TOKEN: &str = "test-token-abcdef123456";

// ===== MockStorefrontApi =====

/// 可编排响应的 API mock，并记录每个接口的调用次数
pub struct MockStorefrontApi {
    login_result: RwLock<Result<AuthToken, ApiError>>,
    profile_result: RwLock<Result<UserProfile, ApiError>>,
    products_result: RwLock<Result<Vec<Product>, ApiError>>,
    delete_result: RwLock<Result<(), ApiError>>,
    upload_result: RwLock<Result<UploadedPicture, ApiError>>,

    pub login_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,

    /// 最近一次请求携带的 token
    pub last_token: RwLock<Option<String>>,
    /// 最近一次登录请求的入口
    pub last_portal: RwLock<Option<Portal>>,
    /// 最近一次商品列表请求的范围
    pub last_scope: RwLock<Option<ProductScope>>,
}

impl MockStorefrontApi {
    pub fn new() -> Self {
        Self {
            login_result: RwLock::new(Ok(AuthToken {
                token: TEST_TOKEN.to_string(),
            })),
            profile_result: RwLock::new(Ok(test_profile(Role::Admin))),
            products_result: RwLock::new(Ok(test_products())),
            delete_result: RwLock::new(Ok(())),
            upload_result: RwLock::new(Ok(UploadedPicture {
                url: Some("https://cdn.pagify.io/avatars/u1.png".to_string()),
            })),
            login_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            last_token: RwLock::new(None),
            last_portal: RwLock::new(None),
            last_scope: RwLock::new(None),
        }
    }

    pub async fn set_login_result(&self, result: Result<AuthToken, ApiError>) {
        *self.login_result.write().await = result;
    }

    pub async fn set_profile_result(&self, result: Result<UserProfile, ApiError>) {
        *self.profile_result.write().await = result;
    }

    pub async fn set_products_result(&self, result: Result<Vec<Product>, ApiError>) {
        *self.products_result.write().await = result;
    }

    pub async fn set_delete_result(&self, result: Result<(), ApiError>) {
        *self.delete_result.write().await = result;
    }

    pub async fn set_upload_result(&self, result: Result<UploadedPicture, ApiError>) {
        *self.upload_result.write().await = result;
    }

    /// 所有接口的调用总数
    pub fn total_calls(&self) -> usize {
        [
            &self.login_calls,
            &self.profile_calls,
            &self.update_calls,
            &self.upload_calls,
            &self.list_calls,
            &self.delete_calls,
        ]
        .iter()
        .map(|c| c.load(Ordering::SeqCst))
        .sum()
    }

    async fn record_token(&self, token: &str) {
        *self.last_token.write().await = Some(token.to_string());
    }
}

#[async_trait]
impl StorefrontApi for MockStorefrontApi {
    async fn login(
        &self,
        portal: Portal,
        _credentials: &Credentials,
    ) -> pagify_api::Result<AuthToken> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_portal.write().await = Some(portal);
        self.login_result.read().await.clone()
    }

    async fn current_user(&self, token: &str) -> pagify_api::Result<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token).await;
        self.profile_result.read().await.clone()
    }

    async fn update_current_user(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> pagify_api::Result<UserProfile> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token).await;
        let mut profile = self.profile_result.read().await.clone()?;
        if let Some(name) = &update.name {
            profile.name.clone_from(name);
        }
        if update.phone.is_some() {
            profile.phone.clone_from(&update.phone);
        }
        Ok(profile)
    }

    async fn upload_profile_picture(
        &self,
        token: &str,
        _picture: ProfilePicture,
    ) -> pagify_api::Result<UploadedPicture> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token).await;
        self.upload_result.read().await.clone()
    }

    async fn list_products(
        &self,
        token: Option<&str>,
        scope: ProductScope,
    ) -> pagify_api::Result<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = token {
            self.record_token(token).await;
        }
        *self.last_scope.write().await = Some(scope);
        self.products_result.read().await.clone()
    }

    async fn delete_product(&self, token: &str, _product_id: &str) -> pagify_api::Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token).await;
        self.delete_result.read().await.clone()
    }
}

// ===== MockTokenStore =====

pub struct MockTokenStore {
    tokens: RwLock<HashMap<String, String>>,
    /// 如果 Some，get 时返回此错误
    get_error: RwLock<Option<String>>,
    /// 如果 Some，set 时返回此错误
    set_error: RwLock<Option<String>>,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            get_error: RwLock::new(None),
            set_error: RwLock::new(None),
        }
    }

    pub async fn set_get_error(&self, err: Option<String>) {
        *self.get_error.write().await = err;
    }

    pub async fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().await = err;
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.read().await {
            return Err(CoreError::SerializationError(msg.clone()));
        }
        Ok(self.tokens.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, token: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.tokens
            .write()
            .await
            .insert(key.to_string(), token.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.tokens.write().await.remove(key);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockStorefrontApi>,
    Arc<MockTokenStore>,
) {
    let api = Arc::new(MockStorefrontApi::new());
    let token_store = Arc::new(MockTokenStore::new());
    let ctx = Arc::new(ServiceContext::new(api.clone(), token_store.clone()));
    (ctx, api, token_store)
}

/// 创建已登录的测试上下文（token 已写入存储，会话已建立）
pub async fn create_signed_in_context(
    role: Role,
) -> (
    Arc<ServiceContext>,
    Arc<MockStorefrontApi>,
    Arc<MockTokenStore>,
) {
    let (ctx, api, store) = create_test_context();
    let portal = if role == Role::Seller {
        Portal::Seller
    } else {
        Portal::Buyer
    };
    let _ = store.set(token_key(portal), TEST_TOKEN).await;
    ctx.session
        .establish(Session {
            portal,
            token: TEST_TOKEN.to_string(),
            profile: test_profile(role),
        })
        .await;
    (ctx, api, store)
}

pub fn test_profile(role: Role) -> UserProfile {
    UserProfile {
        id: "u1".to_string(),
        name: "Ann Reader".to_string(),
        email: "ann@pagify.io".to_string(),
        role,
        phone: None,
        avatar_url: None,
    }
}

pub fn test_product(id: &str, title: &str, status: ProductStatus) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        author: Some("Jane Austen".to_string()),
        price: 9.99,
        stock: 4,
        status,
        seller: Some("Chapter House".to_string()),
        category: Some("Classics".to_string()),
    }
}

pub fn test_products() -> Vec<Product> {
    vec![
        test_product("PRD-1", "Emma", ProductStatus::Active),
        test_product("PRD-2", "Persuasion", ProductStatus::Draft),
        test_product("PRD-3", "Sanditon", ProductStatus::OutOfStock),
    ]
}
