use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Код ошибки, который уходит клиенту в поле `code`.
///
/// Диапазоны:
/// - `1xxx`: запрос отклонён до обращения к данным (валидация);
/// - `2xxx`: обращение к данным (нет записи, цикл в иерархии);
/// - `3xxx`: хранилище и snapshot;
/// - `4xxx`: окружение процесса (IO, конфигурация);
/// - `9xxx`: внутренние ошибки.
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    Success = 0,

    InvalidArgs = 1001,
    InvalidValue = 1002,
    InvalidData = 1003,

    NotFound = 2001,
    CyclicReference = 2002,

    OperationFailed = 3001,
    CorruptedData = 3002,

    Io = 4001,
    ConfigInvalid = 4002,

    Internal = 9000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl StatusCode {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Ошибка вызвана запросом клиента.
    pub fn is_client_error(&self) -> bool {
        (1000..3000).contains(&self.code())
    }

    /// Ошибки, после которых данные на диске могут быть не в порядке.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::CorruptedData | Self::Internal)
    }

    /// Уровень, на котором `run_command` пишет неуспешный результат.
    /// `NotFound` и ошибки валидации пишутся ниже WARN.
    pub fn log_level(&self) -> LogLevel {
        match self {
            Self::Success => LogLevel::Trace,
            Self::NotFound => LogLevel::Debug,
            Self::InvalidArgs | Self::InvalidValue | Self::InvalidData => LogLevel::Info,
            Self::CyclicReference | Self::OperationFailed | Self::ConfigInvalid => LogLevel::Warn,
            Self::CorruptedData | Self::Io | Self::Internal => LogLevel::Error,
        }
    }

    /// HTTP-статус ответа.
    ///
    /// Сбой операции хранилища отдаётся как 400 вместе с ошибками валидации,
    /// отсутствующая запись как 404.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::InvalidArgs
            | Self::InvalidValue
            | Self::InvalidData
            | Self::CyclicReference
            | Self::OperationFailed => 400,
            Self::NotFound => 404,
            Self::CorruptedData | Self::Io | Self::ConfigInvalid | Self::Internal => 500,
        }
    }
}

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
