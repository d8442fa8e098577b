use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки Store Adapter.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Компания не найдена
    #[error("Company not found: {id}")]
    CompanyNotFound { id: u64 },
    /// Станция не найдена
    #[error("Station not found: {id}")]
    StationNotFound { id: u64 },
    /// Сегмент пути не является идентификатором записи
    #[error("{entity} not found: {raw:?}")]
    UnresolvedKey { entity: &'static str, raw: String },
    /// Сбой операции хранилища
    #[error("Failed to {operation}: {reason}")]
    Backend {
        operation: &'static str,
        reason: String,
    },
    /// Не удалось записать snapshot
    #[error("Failed to write snapshot {path}: {reason}")]
    Snapshot { path: String, reason: String },
    /// Snapshot на диске повреждён
    #[error("Corrupted snapshot {path}: {reason}")]
    CorruptedSnapshot { path: String, reason: String },
}

impl StoreError {
    pub fn backend(
        operation: &'static str,
        reason: impl ToString,
    ) -> Self {
        Self::Backend {
            operation,
            reason: reason.to_string(),
        }
    }
}

impl ErrorExt for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CompanyNotFound { .. }
            | Self::StationNotFound { .. }
            | Self::UnresolvedKey { .. } => StatusCode::NotFound,
            Self::Backend { .. } | Self::Snapshot { .. } => StatusCode::OperationFailed,
            Self::CorruptedSnapshot { .. } => StatusCode::CorruptedData,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::CompanyNotFound { .. } => "Company not found".to_string(),
            Self::StationNotFound { .. } => "Station not found".to_string(),
            Self::UnresolvedKey { entity, .. } => format!("{entity} not found"),
            Self::Backend { operation, .. } => format!("Failed to {operation}"),
            Self::Snapshot { .. } => "Failed to persist data".to_string(),
            Self::CorruptedSnapshot { .. } => "Internal server error".to_string(),
        }
    }
}
