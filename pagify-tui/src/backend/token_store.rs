//! Token 存储
//!
//! 使用 JSON 文件保存各入口的 token（`token` / `sellerToken`）
//! 实现 pagify-core 的 TokenStore trait

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use pagify_core::{CoreError, CoreResult, TokenStore};
use tokio::fs;
use tokio::sync::Mutex;

use super::config_service::config_dir;

const TOKENS_FILE: &str = "tokens.json";

/// 基于 JSON 文件的 token 存储
pub struct FileTokenStore {
    path: PathBuf,
    /// 内存缓存，首次访问时从文件加载
    cache: Mutex<Option<BTreeMap<String, String>>>,
}

impl FileTokenStore {
    pub fn new() -> Self {
        Self::with_path(config_dir().join(TOKENS_FILE))
    }

    /// 使用指定文件路径（测试用）
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// 从文件加载
    ///
    /// 文件内容无法解析时视为空存储，下一次写入会覆盖它。
    async fn load_from_file(&self) -> CoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        match serde_json::from_str(&content) {
            Ok(tokens) => Ok(tokens),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable token file {}: {e}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// 写回文件
    async fn save_to_file(&self, tokens: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(tokens)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }

    /// 在锁内读改写
    ///
    /// 只有写盘成功后才更新缓存，失败时缓存保持与文件一致。
    async fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        let current = match cache.take() {
            Some(tokens) => tokens,
            None => self.load_from_file().await?,
        };

        let mut updated = current.clone();
        if !f(&mut updated) {
            *cache = Some(current);
            return Ok(());
        }

        match self.save_to_file(&updated).await {
            Ok(()) => {
                *cache = Some(updated);
                Ok(())
            }
            Err(e) => {
                *cache = Some(current);
                Err(e)
            }
        }
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        Ok(cache.as_ref().and_then(|tokens| tokens.get(key).cloned()))
    }

    async fn set(&self, key: &str, token: &str) -> CoreResult<()> {
        self.modify(|tokens| {
            tokens.insert(key.to_string(), token.to_string());
            true
        })
        .await
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.modify(|tokens| tokens.remove(key).is_some()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        block_on(async {
            let store = FileTokenStore::with_path(&path);
            store.set("sellerToken", "abc123").await.unwrap();

            let reopened = FileTokenStore::with_path(&path);
            assert_eq!(
                reopened.get("sellerToken").await.unwrap().as_deref(),
                Some("abc123")
            );
            assert_eq!(reopened.get("token").await.unwrap(), None);
        });
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        block_on(async {
            let store = FileTokenStore::with_path(&path);
            store.set("token", "buyer").await.unwrap();
            store.set("sellerToken", "seller").await.unwrap();
            store.remove("token").await.unwrap();

            let reopened = FileTokenStore::with_path(&path);
            assert_eq!(reopened.get("token").await.unwrap(), None);
            assert_eq!(
                reopened.get("sellerToken").await.unwrap().as_deref(),
                Some("seller")
            );
        });
    }

    #[test]
    fn remove_missing_key_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        block_on(async {
            let store = FileTokenStore::with_path(&path);
            store.remove("token").await.unwrap();
        });
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_treated_as_empty_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "not json").unwrap();

        block_on(async {
            let store = FileTokenStore::with_path(&path);
            assert_eq!(store.get("token").await.unwrap(), None);
            store.remove("token").await.unwrap();
            store.set("token", "fresh").await.unwrap();

            let reopened = FileTokenStore::with_path(&path);
            assert_eq!(reopened.get("token").await.unwrap().as_deref(), Some("fresh"));
        });
    }

    #[test]
    fn failed_set_leaves_cache_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "regular file").unwrap();
        let path = blocker.join("tokens.json");

        block_on(async {
            let store = FileTokenStore::with_path(&path);
            let err = store.set("token", "abc").await.unwrap_err();
            assert!(matches!(err, CoreError::StorageError(_)));
            assert_eq!(store.get("token").await.unwrap(), None);
        });
    }

    #[test]
    fn failed_remove_keeps_token_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        block_on(async {
            let store = FileTokenStore::with_path(&path);
            store.set("token", "abc").await.unwrap();

            // 把目标路径换成目录，使写盘失败
            std::fs::remove_file(&path).unwrap();
            std::fs::create_dir(&path).unwrap();

            let err = store.remove("token").await.unwrap_err();
            assert!(matches!(err, CoreError::StorageError(_)));
            assert_eq!(store.get("token").await.unwrap().as_deref(), Some("abc"));
        });
    }
}
