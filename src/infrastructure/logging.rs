//! 日志系统初始化
//!
//! 配置通过显式传入的 [`LoggingConfig`] 决定，生命周期随应用启动；
//! 文件日志按天轮转，返回的 guard 需由调用方持有到进程结束

use std::path::Path;

use anyhow::Result;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 返回文件日志的 writer guard（未启用文件日志时为 None）
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.format == "json" {
        init_json_logging(filter, config)
    } else {
        init_text_logging(filter, config)
    }
}

fn log_dir(config: &LoggingConfig) -> &Path {
    config
        .log_file_path
        .as_ref()
        .and_then(|p| Path::new(p).parent())
        .unwrap_or_else(|| Path::new("./logs"))
}

fn init_json_logging(filter: EnvFilter, config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if config.enable_file_logging {
        let dir = log_dir(config);
        std::fs::create_dir_all(dir)?;

        let file_appender = rolling::daily(dir, "ironkey.log");
        let (writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(ChronoUtc::rfc_3339());
        let stdout_layer = fmt::layer().json().with_timer(ChronoUtc::rfc_3339());

        Registry::default()
            .with(filter)
            .with(file_layer)
            .with(stdout_layer)
            .init();
        Ok(Some(guard))
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_timer(ChronoUtc::rfc_3339()))
            .init();
        Ok(None)
    }
}

fn init_text_logging(filter: EnvFilter, config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if config.enable_file_logging {
        let dir = log_dir(config);
        std::fs::create_dir_all(dir)?;

        let file_appender = rolling::daily(dir, "ironkey.log");
        let (writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false);
        let stdout_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true);

        Registry::default()
            .with(filter)
            .with(file_layer)
            .with(stdout_layer)
            .init();
        Ok(Some(guard))
    } else {
        Registry::default()
            .with(filter)
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(true),
            )
            .init();
        Ok(None)
    }
}
