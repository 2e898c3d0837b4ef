//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的业务逻辑。
//! 通过 pagify-core 库实现登录、商品目录、资料编辑等功能。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 核心服务入口，执行 BackendCommand
//!         mod config_service;     // 配置（JSON 文件）
//!         mod token_store;        // token 持久化（JSON 文件）
//!         pub mod logging;        // 日志初始化
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 按 AppConfig 创建 RestStorefront（HTTP 客户端）
//!         2. 创建 FileTokenStore
//!         3. 组装 ServiceContext
//!         4. 按需基于 ServiceContext 创建 SessionService / CatalogService / ...
//!
//!     执行流程：
//!         update 层把 BackendCommand 放进 App 的待执行队列
//!             ↓
//!         app.rs 主循环取出命令，调用 CoreService::spawn
//!             ↓
//!         tokio 任务执行对应服务，结果封装为 BackendEvent 发回通道
//!             ↓
//!         主循环收到事件 → update::update(app, AppMessage::Backend(event))
//!

mod config_service;
mod core_service;
pub mod logging;
mod token_store;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, config_dir};
pub use core_service::CoreService;
