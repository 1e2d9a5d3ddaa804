//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责所有访问网络和文件系统的工作。
//! 通过 salecard-client 库访问远端目录服务。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod catalog_service;    // 目录服务：执行 Command，产出 BackendMessage
//!         mod config_service;     // 配置文件（JSON）
//!         mod logging;            // 日志文件初始化
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、目录服务（CatalogService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有 Arc<dyn CatalogApi>：
//!         - 运行时为 HttpCatalogClient
//!         - 测试中为 MemoryCatalog（salecard-client 的 test-utils 特性）
//!
//!     数据流：
//!         update() 返回 Some(Command)
//!             ↓
//!         app.rs 调用 service.spawn(command, &tx)
//!             ↓
//!         tokio 任务执行请求；提交/删除成功后再执行一次列表加载
//!             ↓
//!         每个结果包装为 AppMessage::Backend(..) 发送到 channel
//!             ↓
//!         主循环每个 tick 取出消息交给 update()
//!
//!     没有取消、去重或重试：连续两次提交会产生两次请求。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     <config_dir>/salecard-admin/config.json
//!
//!         {
//!           "api_base_url": "https://mrbookupdated.onrender.com",
//!           "request_timeout_secs": 30,
//!           "theme": "dark",
//!           "language": "en-US",
//!           "log_level": "info"
//!         }
//!
//!     文件不存在时写入默认值；环境变量 SALECARD_API_URL 覆盖服务地址。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、日志（init_logging）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端由 TUI 占用，日志写入 <data_local_dir>/salecard-admin/logs/。
//!     RUST_LOG 优先于配置中的 log_level。
//!

mod catalog_service;
mod config_service;
mod logging;

pub use catalog_service::{CatalogService, Command};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use logging::init_logging;
