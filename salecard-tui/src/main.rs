//! Sale Card Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 目录服务、配置、日志 (`backend/`)
//!
//!
//! main.rs 的执行顺序：
//!
//!     LocalConfigService::load_or_init()    // 读取配置，首次运行写入默认值
//!     init_logging()                        // 日志写入文件，终端留给 UI
//!     AppConfig::apply_env()                // SALECARD_API_URL 覆盖服务地址
//!     set_language() / set_theme()          // 按配置选择翻译表和主题
//!     HttpCatalogClient::new()              // 校验服务地址
//!     init_terminal()                       // 原始模式 + 备用屏幕
//!     app::run()                            // 主循环
//!     restore_terminal()                    // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use salecard_client::HttpCatalogClient;

use backend::{CatalogService, LocalConfigService};
use i18n::Language;
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let config = config_service
        .load_or_init()
        .context("failed to load configuration")?;

    // 2. 初始化日志，之后再应用环境变量覆盖
    let log_path = backend::init_logging(&config)?;
    log::info!(
        "Starting {} v{}, logging to {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );
    log::info!("Config: {}", config_service.path().display());
    let config = config.apply_env();

    // 3. 语言和主题
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unsupported language '{}', using default", config.language);
        Language::default()
    });
    i18n::set_language(language);
    view::theme::set_theme(config.theme);
    log::info!(
        "Language: {}, API: {}",
        i18n::current_language().code(),
        config.api_base_url
    );

    // 4. 创建目录服务
    let client = HttpCatalogClient::new(config.client_config())?;
    let service = Arc::new(CatalogService::new(Arc::new(client)));

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, service).await;

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    } else {
        log::info!("Exited");
    }
    result
}
