//! 配置服务
//!
//! 配置保存在 `<config_dir>/salecard-admin/config.json`，
//! 文件不存在时使用默认值并在首次运行时写回。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use salecard_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 覆盖服务地址的环境变量
pub const API_URL_ENV: &str = "SALECARD_API_URL";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 目录服务地址
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    pub theme: Theme,
    /// 界面语言（"en-US" / "zh-CN"）
    pub language: String,
    /// 日志级别，`RUST_LOG` 优先
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            theme: Theme::Dark,
            language: "en-US".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                log::info!("Using API base URL from {API_URL_ENV}");
                self.api_base_url = url;
            }
        }
        self
    }

    /// 转换为客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("salecard-admin")
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置；文件不存在时写入默认配置
    pub fn load_or_init(&self) -> Result<AppConfig, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = AppConfig::default();
        self.save(&config)?;
        Ok(config)
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|source| {
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));

        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested/config.json"));

        let config = service.load_or_init().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert!(service.path().exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));

        let config = AppConfig {
            api_base_url: "http://localhost:4000".into(),
            request_timeout_secs: 5,
            theme: Theme::Light,
            language: "zh-CN".into(),
            log_level: "debug".into(),
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_client_config_timeout() {
        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.client_config().timeout, Duration::from_secs(1));
    }
}
