//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入配置目录下按天滚动的文件。
//! 库 crate 通过 `log` 门面输出，由 tracing-subscriber 的 `tracing-log` 桥接收集。

use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 覆盖日志过滤规则的环境变量（语法同 `RUST_LOG`）
pub const LOG_ENV: &str = "PAGIFY_LOG";

const LOG_FILE_PREFIX: &str = "pagify-tui.log";

/// 过滤规则：`PAGIFY_LOG` 优先，否则 `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装全局 subscriber
///
/// 返回的 guard 必须存活到进程退出，否则缓冲中的日志会丢失。
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(env_filter())
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}
