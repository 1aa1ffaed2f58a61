// src/main.rs - Desktop launcher

use std::path::PathBuf;

use clap::Parser;

use veluna::config::{AppConfig, API_URL_ENV};
use veluna::logging::{init as init_logging, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "veluna",
    version = veluna::VERSION,
    about = "Veluna Eyewear storefront and admin console",
    long_about = None
)]
struct Cli {
    /// API root, e.g. https://shop.veluna.example/api
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Directory for JSON log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        default_directive: if cli.verbose { "debug" } else { "info" }.to_string(),
        log_dir: cli.log_dir.clone(),
    };
    let _log_guard = init_logging(&logging);

    // The UI reads the API root from the environment at startup; the CLI
    // flag is a convenience override.
    if let Some(api_url) = &cli.api_url {
        std::env::set_var(API_URL_ENV, api_url);
    }

    let config = AppConfig::from_env();
    if !config.has_backend() {
        tracing::warn!(
            "No API root configured ({} is unset); the storefront will show fallback content only",
            API_URL_ENV
        );
    }
    tracing::info!("Starting Veluna v{}", veluna::VERSION);

    dioxus::launch(veluna::ui::App);
}
