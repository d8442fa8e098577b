use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{
    config::LoggingConfig,
    formatter::{self, LayerOptions},
};

/// Файловый layer с ежедневной ротацией. Guard должен жить до завершения
/// процесса, иначе буфер не будет сброшен.
pub fn layer_with_config<S>(config: &LoggingConfig) -> (Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard)
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let file_appender = daily(&config.log_dir, &config.file.filename);
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let layer = formatter::build_layer(
        config.file.format,
        LayerOptions::file(config),
        non_blocking_writer,
    );

    (layer, guard)
}
