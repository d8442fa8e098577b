use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс ошибок сервиса.
///
/// Трейт object-safe: [`StackError`](crate::StackError) хранит ошибку как
/// `Arc<dyn ErrorExt>` и получает через него код, текст для клиента и
/// текст для логов.
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Нужен для `StackError::downcast_ref`.
    fn as_any(&self) -> &dyn Any;

    /// Текст для тела ответа. Ошибки, отдаваемые как 5xx, не раскрывают
    /// подробностей.
    fn client_message(&self) -> String {
        if self.status_code().http_status() >= 500 {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    fn log_message(&self) -> String {
        format!("{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, GenericError, StoreError, ValidationError};

    #[test]
    fn test_default_status_is_internal() {
        #[derive(Debug, thiserror::Error)]
        #[error("socket closed")]
        struct Plain;

        impl ErrorExt for Plain {
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        assert_eq!(Plain.status_code(), StatusCode::Internal);
        assert_eq!(Plain.client_message(), "Internal server error");
        assert_eq!(Plain.log_message(), "Plain");
    }

    /// Клиентские ошибки без своего `client_message` отдают `Display`.
    #[test]
    fn test_client_message_for_bad_requests() {
        let short = ValidationError::TooShort {
            field: "name",
            min: 5,
        };
        assert_eq!(short.client_message(), short.to_string());

        let missing = ValidationError::Missing { field: "address" };
        assert_eq!(missing.client_message(), "The address field is required");
    }

    #[test]
    fn test_server_side_details_hidden() {
        let config = ConfigError::Load {
            reason: "/etc/stationhub.toml: permission denied".into(),
        };
        assert_eq!(config.client_message(), "Internal server error");

        let generic = GenericError::new(StatusCode::Io, "disk full");
        assert_eq!(generic.client_message(), "Internal server error");
        assert!(generic.log_message().contains("disk full"));
    }

    #[test]
    fn test_as_any_downcast() {
        let err = StoreError::StationNotFound { id: 8 };
        let any = err.as_any();
        assert!(any.downcast_ref::<StoreError>().is_some());
        assert!(any.downcast_ref::<ValidationError>().is_none());
    }
}
