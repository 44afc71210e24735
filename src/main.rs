//! Clinic UI - Main Entry Point
//!
//! Doctor and patient dashboards for the medical appointment client.

use clinic_ui::app::application::run_app;
use clinic_ui::config::AppConfig;
use clinic_ui::helpers::get_or_create_config_dir;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default()?;

    // Keep the guard alive for the whole run so buffered log lines are flushed
    let _log_guard = init_tracing(&config)?;

    tracing::info!(role = ?config.role, "Starting Clinic UI...");

    run_app(config);
    Ok(())
}

fn init_tracing(
    config: &AppConfig,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    if config.log_to_file {
        let log_dir = get_or_create_config_dir()?.join("logs");
        let appender = tracing_appender::rolling::daily(log_dir, "clinic-ui.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        registry
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .init();
        Ok(Some(guard))
    } else {
        registry.init();
        Ok(None)
    }
}
