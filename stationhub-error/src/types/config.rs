use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки загрузки и проверки конфигурации.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Источник конфигурации не прочитан или не десериализован
    #[error("Failed to load configuration: {reason}")]
    Load { reason: String },
    /// Значение поля не прошло проверку
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ErrorExt for ConfigError {
    fn status_code(&self) -> StatusCode {
        StatusCode::ConfigInvalid
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
