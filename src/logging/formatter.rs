use std::io::{self, Stdout};

use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::Layer as LayerTrait,
    registry::LookupSpan,
};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Флаги оформления, общие для всех форматов.
#[derive(Debug, Clone, Copy)]
pub struct LayerOptions {
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_thread_ids: bool,
    pub with_line_numbers: bool,
}

impl LayerOptions {
    pub fn console(config: &LoggingConfig) -> Self {
        Self {
            with_ansi: config.console.with_ansi,
            with_target: config.console.with_target,
            with_thread_ids: config.console.with_thread_ids,
            with_line_numbers: config.console.with_line_numbers,
        }
    }

    /// Файл пишется без ANSI-последовательностей.
    pub fn file(config: &LoggingConfig) -> Self {
        Self {
            with_ansi: false,
            ..Self::console(config)
        }
    }
}

/// Консольный layer в stdout согласно конфигурации.
pub fn build_formatter_from_config<S>(
    config: &LoggingConfig,
    format: LogFormat,
) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let writer: fn() -> Stdout = io::stdout;
    build_layer(format, LayerOptions::console(config), writer)
}

/// Layer заданного формата поверх произвольного writer.
/// Возвращается boxed trait-объект, чтобы стереть тип формата.
pub fn build_layer<S, W>(
    format: LogFormat,
    opts: LayerOptions,
    writer: W,
) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => {
            let json_fmt = fmt::format().json().with_current_span(true);
            let layer = fmt::layer()
                .event_format(json_fmt)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(opts.with_target)
                .with_thread_ids(opts.with_thread_ids)
                .with_line_number(opts.with_line_numbers);
            Box::new(layer)
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .event_format(fmt::format().pretty())
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(writer)
                .with_ansi(opts.with_ansi)
                .with_target(opts.with_target)
                .with_thread_ids(opts.with_thread_ids)
                .with_line_number(opts.with_line_numbers);
            Box::new(layer)
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .event_format(fmt::format().compact())
                .with_writer(writer)
                .with_ansi(opts.with_ansi)
                .with_target(opts.with_target)
                .with_thread_ids(opts.with_thread_ids)
                .with_line_number(opts.with_line_numbers);
            Box::new(layer)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;

    #[derive(Clone)]
    struct BufWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for BufWriter {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(format: LogFormat) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = BufWriter(buffer.clone());
        let opts = LayerOptions::file(&LoggingConfig::default());
        let layer = build_layer::<Registry, _>(format, opts, move || writer.clone());
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(station_id = 7, "station updated");
        });

        let out = buffer.lock().unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    /// JSON-формат выдаёт разбираемую строку с полями события.
    #[test]
    fn test_json_format_is_parseable() {
        let out = capture(LogFormat::Json);
        let line = out.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["fields"]["message"], "station updated");
        assert_eq!(value["fields"]["station_id"], 7);
    }

    #[test]
    fn test_compact_and_pretty_contain_message() {
        for format in [LogFormat::Compact, LogFormat::Pretty] {
            let out = capture(format);
            assert!(out.contains("station updated"), "format {format}: {out}");
        }
    }
}
