use std::fmt;

use actix_web::{http::StatusCode as HttpStatus, HttpResponse, ResponseError};
use stationhub_error::{GenericError, StackError, StatusCode, ValidationError};

/// Ошибка HTTP-слоя: обёртка над [`StackError`].
///
/// HTTP-статус берётся из `StatusCode::http_status()`, тело ответа из
/// `StackError::to_response()`.
#[derive(Debug)]
pub struct ApiError(pub StackError);

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self(StackError::new(GenericError::new(StatusCode::Internal, message)))
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self(StackError::new(ValidationError::MalformedBody {
            reason: reason.to_string(),
        }))
    }

    pub fn inner(&self) -> &StackError {
        &self.0
    }
}

impl fmt::Display for ApiError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<StackError> for ApiError {
    fn from(err: StackError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> HttpStatus {
        HttpStatus::from_u16(self.0.status_code().http_status())
            .unwrap_or(HttpStatus::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self)).json(self.0.to_response())
    }
}
