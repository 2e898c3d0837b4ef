//! Token store abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Token Store Trait
///
/// Key-value storage for bearer tokens. Keys are fixed per portal
/// (`token`, `sellerToken`, see [`crate::session::token_key`]).
///
/// 平台实现:
/// - TUI: `FileTokenStore` (JSON 文件，位于用户配置目录)
/// - 测试 / 无持久化: [`InMemoryTokenStore`]
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read a token
    ///
    /// # Returns
    /// * `Ok(Some(token))` - token present
    /// * `Ok(None)` - no token stored under `key`
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store a token, replacing any previous value
    async fn set(&self, key: &str, token: &str) -> CoreResult<()>;

    /// Remove a token (no-op when absent)
    async fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory token store
///
/// Tokens are lost when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    tokens: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.tokens.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, token: &str) -> CoreResult<()> {
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
