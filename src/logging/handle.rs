use std::time::{Duration, Instant};

use tracing_appender::non_blocking::WorkerGuard;

/// Время, за которое файловый writer обычно успевает сбросить буфер.
const SLOW_FLUSH: Duration = Duration::from_secs(5);

/// Возвращается из [`init_logging`](crate::init_logging) и живёт до конца
/// `main`. Пока handle жив, фоновый поток пишет лог-файл; drop сбрасывает
/// остаток буфера.
#[must_use = "dropping the handle stops the file log writer"]
pub struct LoggingHandle {
    file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    pub fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self { file_guard }
    }

    pub fn has_file_sink(&self) -> bool {
        self.file_guard.is_some()
    }

    /// Явное завершение после остановки сервера. Возвращает время сброса.
    pub fn shutdown(mut self) -> Duration {
        let Some(guard) = self.file_guard.take() else {
            return Duration::ZERO;
        };
        tracing::debug!("Flushing file log");

        let started = Instant::now();
        drop(guard);
        let flushed_in = started.elapsed();
        if flushed_in > SLOW_FLUSH {
            // подписчик уже может писать в закрытый writer
            eprintln!("Log flush took {} ms", flushed_in.as_millis());
        }
        flushed_in
    }
}
