use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки валидации входных данных (тела запроса, параметры пути и query).
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Обязательное поле отсутствует
    #[error("The {field} field is required")]
    Missing { field: &'static str },
    /// Строка короче допустимого
    #[error("The {field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    /// Значение не является конечным числом
    #[error("The {field} must be a number")]
    NotNumeric { field: &'static str },
    /// Строковое поле пришло другим JSON-типом
    #[error("The {field} must be a string")]
    NotString { field: &'static str },
    /// Ссылка на несуществующую компанию
    #[error("The selected {field} is invalid")]
    UnknownCompany { field: &'static str, id: u64 },
    /// Тело запроса не разобрано
    #[error("Malformed request body: {reason}")]
    MalformedBody { reason: String },
}

impl ErrorExt for ValidationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Missing { .. } | Self::UnknownCompany { .. } => StatusCode::InvalidArgs,
            Self::TooShort { .. } | Self::NotNumeric { .. } | Self::NotString { .. } => {
                StatusCode::InvalidValue
            }
            Self::MalformedBody { .. } => StatusCode::InvalidData,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
