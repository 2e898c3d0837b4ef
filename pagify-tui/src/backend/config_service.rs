//! 配置服务
//!
//! 配置以 JSON 存放在 `<config_dir>/pagify-tui/config.json`。
//! 文件不存在时使用默认值；`PAGIFY_API_BASE` 环境变量覆盖后端地址。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use pagify_api::{ClientConfig, DEFAULT_BASE_URL, Portal};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖 `api_base_url` 的环境变量
pub const API_BASE_ENV: &str = "PAGIFY_API_BASE";

const CONFIG_FILE: &str = "config.json";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagify-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 后端地址（不含 `/api/v1`）
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    pub theme: Theme,
    /// 启动时恢复哪个入口的会话
    pub portal: Portal,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            theme: Theme::Dark,
            portal: Portal::Buyer,
        }
    }
}

impl AppConfig {
    /// HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }

    fn apply_env(&mut self, api_base: Option<String>) {
        if let Some(url) = api_base.filter(|u| !u.trim().is_empty()) {
            log::info!("Using API base from {API_BASE_ENV}: {url}");
            self.api_base_url = url.trim().to_string();
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join(CONFIG_FILE))
    }

    /// 使用指定文件路径（测试用）
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;
        config.apply_env(std::env::var(API_BASE_ENV).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}
