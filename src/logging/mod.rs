pub mod config;
mod filters;
mod formatter;
pub mod handle;
pub mod sinks;

use anyhow::Context;
pub use config::{ConsoleConfig, FileConfig, LogFormat, LoggingConfig};
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация логирования с конфигурацией.
///
/// Устанавливает глобальный subscriber, поэтому вызывается один раз при
/// старте процесса.
pub fn init_logging(mut config: LoggingConfig) -> anyhow::Result<LoggingHandle> {
    config.apply_env_overrides();
    config.validate()?;
    config
        .ensure_log_dir()
        .with_context(|| format!("creating log directory {}", config.log_dir.display()))?;

    let env_filter = filters::build_filter_from_config(&config);
    let mut layers = Vec::new();

    if config.console_active() {
        layers.push(sinks::console::layer_with_config(&config));
    }

    let file_guard = if config.file_active() {
        let (file_layer, guard) = sinks::file::layer_with_config(&config);
        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .context("installing global tracing subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_dir = %config.log_dir.display(),
        console_enabled = config.console_active(),
        file_enabled = config.file_active(),
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
