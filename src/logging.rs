// src/logging.rs - Native tracing initialization

//! Structured logging for the desktop build.
//!
//! Console output is always on, filtered through `RUST_LOG` (default
//! `info`). Passing a log directory adds a JSON file layer with a daily
//! rolling appender; the returned guard must stay alive for the duration
//! of the process or buffered lines are lost.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub default_directive: String,
    pub log_dir: Option<std::path::PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            log_dir: None,
        }
    }
}

pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive.clone()));

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .boxed();

    match &config.log_dir {
        Some(dir) => {
            let (writer, guard) = non_blocking_file_writer(dir);
            let file = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .boxed();
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}

fn non_blocking_file_writer(dir: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::daily(dir, "veluna.log");
    tracing_appender::non_blocking(appender)
}
