//! Pagify TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Pagify TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     logging::init()             // 日志写入文件（终端被 TUI 占用）
//!     LocalConfigService::load()  // 读取配置，失败时使用默认值
//!     tokio Runtime               // 后台请求运行在多线程运行时上
//!     CoreService::new()          // 组装 HTTP 客户端与 token 存储
//!     init_terminal()             // 初始化终端
//!     model::App::new()           // 创建 APP 实例（同时排队会话恢复命令）
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use backend::{ConfigService, CoreService, LocalConfigService, config_dir};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志与配置
    let _log_guard = backend::logging::init(&config_dir().join("logs"))?;

    let config_service = LocalConfigService::new();
    log::info!("Loading config from {}", config_service.path().display());
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });
    view::theme::set_theme(config.theme);

    // 2. 后台运行时与核心服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _enter = runtime.enter();
    let core = Arc::new(CoreService::new(&config)?);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(config);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &core);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Pagify TUI exited");
    result
}
