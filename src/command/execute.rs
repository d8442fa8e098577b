//! Абстракция и выполнение команд API.
//!
//! Каждая операция HTTP API представлена структурой команды, реализующей
//! [`CommandExecute`]. Обработчик только извлекает входные данные и вызывает
//! [`run_command`].

use std::time::Instant;

use stationhub_error::{HubResult, LogLevel};
use tracing::{debug, error, info, trace, warn};

use crate::engine::StorageEngine;

pub trait CommandExecute: std::fmt::Debug {
    /// Результат успешного выполнения.
    type Output;

    /// Выполняет команду над хранилищем.
    ///
    /// # Возвращает
    /// - `Ok(Output)` - результат команды;
    /// - `Err(StackError)` - ошибка валидации, отсутствующая сущность или
    ///   сбой хранилища.
    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Self::Output>;

    /// Возвращает имя команды для logging
    fn command_name(&self) -> &'static str;
}

/// Выполняет команду с замером времени и логированием результата.
///
/// Ошибки логируются на уровне, соответствующем их `StatusCode`.
pub fn run_command<C: CommandExecute>(
    command: &C,
    store: &StorageEngine,
) -> HubResult<C::Output> {
    let start = Instant::now();
    let result = command.execute(store);
    let elapsed_us = start.elapsed().as_micros() as u64;
    let name = command.command_name();

    match &result {
        Ok(_) => debug!(command = name, elapsed_us, "Command completed"),
        Err(err) => {
            let code = err.status_code().code();
            match err.log_level() {
                LogLevel::Trace => trace!(command = name, code, error = %err, "Command failed"),
                LogLevel::Debug => debug!(command = name, code, error = %err, "Command failed"),
                LogLevel::Info => info!(command = name, code, error = %err, "Command failed"),
                LogLevel::Warn => warn!(command = name, code, error = %err, "Command failed"),
                LogLevel::Error => error!(command = name, code, error = ?err, "Command failed"),
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use stationhub_error::{StatusCode, StoreError};

    use super::*;

    #[derive(Debug)]
    struct CountCompanies;

    impl CommandExecute for CountCompanies {
        type Output = usize;

        fn execute(
            &self,
            store: &StorageEngine,
        ) -> HubResult<usize> {
            use crate::engine::Storage;
            Ok(store.company_count()?)
        }

        fn command_name(&self) -> &'static str {
            "COUNT_COMPANIES"
        }
    }

    #[derive(Debug)]
    struct AlwaysMissing;

    impl CommandExecute for AlwaysMissing {
        type Output = ();

        fn execute(
            &self,
            _store: &StorageEngine,
        ) -> HubResult<()> {
            Err(StoreError::CompanyNotFound { id: 1 }.into())
        }

        fn command_name(&self) -> &'static str {
            "ALWAYS_MISSING"
        }
    }

    #[test]
    fn test_run_command_passes_result_through() {
        let store = StorageEngine::default();
        assert_eq!(run_command(&CountCompanies, &store).unwrap(), 0);

        let err = run_command(&AlwaysMissing, &store).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NotFound);
    }
}
