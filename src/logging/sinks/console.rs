use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{config::LoggingConfig, formatter};

/// Консольный layer с конфигурацией.
pub fn layer_with_config<S>(config: &LoggingConfig) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    formatter::build_formatter_from_config(config, config.console_format())
}

#[cfg(test)]
mod tests {
    use tracing::info;
    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;
    use crate::logging::config::{ConsoleConfig, LogFormat};

    /// Тест проверяет, что layer строится для всех форматов и логирование
    /// не паникует.
    #[test]
    fn test_layer_with_config_all_formats() {
        for format in [LogFormat::Compact, LogFormat::Pretty, LogFormat::Json] {
            let cfg = LoggingConfig {
                console: ConsoleConfig {
                    format,
                    with_ansi: false,
                    ..Default::default()
                },
                ..Default::default()
            };

            let subscriber = Registry::default().with(layer_with_config::<Registry>(&cfg));
            tracing::subscriber::with_default(subscriber, || {
                info!(format = %format, "console sink smoke test");
            });
        }
    }
}
