//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入文件：`<data_local_dir>/salecard-admin/logs/salecard-admin.log`。
//! `log` 宏产生的记录经 tracing-subscriber 的 log 桥接一并输出。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::config_service::AppConfig;

/// 获取日志目录
fn get_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("salecard-admin")
        .join("logs")
}

/// 构造过滤器：`RUST_LOG` 优先，否则使用配置中的级别
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志，返回日志文件路径
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let dir = get_log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let path = dir.join("salecard-admin.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(true)
                .with_ansi(false),
        )
        .with(build_filter(&config.log_level))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // 无法解析的级别不会导致初始化失败
        let filter = build_filter("not a [valid directive");
        assert!(!filter.to_string().is_empty());
    }
}
