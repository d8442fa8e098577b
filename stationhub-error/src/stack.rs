use std::{fmt, panic::Location, sync::Arc};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{ErrorExt, LogLevel, StatusCode};

/// Ошибка, поднимающаяся от хранилища до HTTP-ответа.
///
/// Хранит исходную ошибку и цепочку контекстов, добавленных по пути
/// (`ResultExt::context`). Клонирование дешёвое: корень лежит в `Arc`.
#[derive(Clone)]
pub struct StackError {
    root: Arc<dyn ErrorExt>,
    cause: Arc<dyn std::error::Error + Send + Sync>,
    contexts: Vec<ErrorContext>,
}

/// Один кадр контекста и место, где он добавлен.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub message: String,
    pub location: &'static Location<'static>,
}

/// Тело ответа с ошибкой: `{"code": .., "message": ..}`.
///
/// В debug-сборках добавляется `contexts` с местами добавления.
#[cfg(feature = "serde")]
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<String>>,
}

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        let root = Arc::new(err);
        Self {
            cause: root.clone(),
            root,
            contexts: Vec::new(),
        }
    }

    #[track_caller]
    pub fn context(
        mut self,
        msg: impl Into<String>,
    ) -> Self {
        self.contexts.push(ErrorContext {
            message: msg.into(),
            location: Location::caller(),
        });
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.root.status_code()
    }

    pub fn http_status(&self) -> u16 {
        self.status_code().http_status()
    }

    pub fn log_level(&self) -> LogLevel {
        self.status_code().log_level()
    }

    pub fn client_message(&self) -> String {
        self.root.client_message()
    }

    /// Контексты в порядке добавления: от места ошибки наружу.
    pub fn contexts(&self) -> &[ErrorContext] {
        &self.contexts
    }

    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.root.as_any().downcast_ref::<T>()
    }

    #[cfg(feature = "serde")]
    pub fn to_response(&self) -> ErrorResponse {
        let contexts = if cfg!(debug_assertions) && !self.contexts.is_empty() {
            Some(self.located_contexts())
        } else {
            None
        };
        ErrorResponse {
            code: self.status_code().code(),
            message: self.client_message(),
            contexts,
        }
    }

    fn located_contexts(&self) -> Vec<String> {
        self.contexts
            .iter()
            .map(|ctx| format!("{} at {}:{}", ctx.message, ctx.location.file(), ctx.location.line()))
            .collect()
    }
}

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("StackError")
            .field("status", &self.status_code())
            .field("root", &self.root.log_message())
            .field("contexts", &self.located_contexts())
            .finish()
    }
}

/// Внешний контекст первым: `Handling request: Loading company 3: Company not found: 3`.
impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for ctx in self.contexts.iter().rev() {
            write!(f, "{}: ", ctx.message)?;
        }
        write!(f, "{}", self.root)
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(e: E) -> Self {
        StackError::new(e)
    }
}
