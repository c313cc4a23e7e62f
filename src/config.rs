//! 客户端配置
//!
//! 配置在应用启动时显式构造并传入各组件，
//! 不使用全局可变状态；所有默认值集中在这里声明

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 获取地址/公钥时默认是否上设备屏幕确认；
    /// 调用方未显式传参时生效。默认 true
    pub show_on_device: bool,
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            show_on_device: true,
            logging: LoggingConfig::default(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别，默认 "info"
    pub level: String,
    /// "json" 或 "text"，默认 "text"
    pub format: String,
    /// 是否写日志文件（按天轮转），默认 false
    pub enable_file_logging: bool,
    /// 日志文件路径；未设置时使用 ./logs
    pub log_file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            enable_file_logging: false,
            log_file_path: None,
        }
    }
}

impl ClientConfig {
    /// 从 TOML 文件加载
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;
        toml::from_str(&raw).context("Failed to parse config file")
    }
}
