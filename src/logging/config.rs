use std::{env, fmt, fs, io, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use stationhub_error::ConfigError;

/// Переменная окружения для уровня логирования.
pub const ENV_LOG_LEVEL: &str = "STATIONHUB_LOG_LEVEL";
/// Переменная окружения для каталога логов.
pub const ENV_LOG_DIR: &str = "STATIONHUB_LOG_DIR";

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Формат вывода событий.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Настройки консольного вывода.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_thread_ids: bool,
    pub with_line_numbers: bool,
}

/// Настройки файлового вывода (ежедневная ротация).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    pub filename: String,
    pub format: LogFormat,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Базовый уровень: trace, debug, info, warn, error
    pub level: String,
    pub log_dir: PathBuf,
    pub console_enabled: bool,
    pub file_enabled: bool,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl LoggingConfig {
    /// Применяет переопределения из `STATIONHUB_LOG_LEVEL` и `STATIONHUB_LOG_DIR`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.level = level.trim().to_lowercase();
            }
        }
        if let Ok(dir) = env::var(ENV_LOG_DIR) {
            if !dir.trim().is_empty() {
                self.log_dir = PathBuf::from(dir);
            }
        }
    }

    /// Проверяет уровень и имя файла.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("unknown level '{}', expected one of {LEVELS:?}", self.level),
            });
        }
        if self.file_active() && self.file.filename.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "logging.file.filename",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Создаёт каталог логов, если файловый вывод включён.
    pub fn ensure_log_dir(&self) -> io::Result<()> {
        if self.file_active() {
            fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }

    /// Директива для `EnvFilter`: уровень крейта плюс приглушённый actix.
    pub fn build_filter_directive(&self) -> String {
        format!(
            "{level},stationhub={level},actix_server=warn,actix_web=warn",
            level = self.level
        )
    }

    pub fn console_format(&self) -> LogFormat {
        self.console.format
    }

    pub fn console_active(&self) -> bool {
        self.console_enabled && self.console.enabled
    }

    pub fn file_active(&self) -> bool {
        self.file_enabled && self.file.enabled
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: LogFormat::Compact,
            with_ansi: true,
            with_target: true,
            with_thread_ids: false,
            with_line_numbers: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filename: "stationhub.log".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            console_enabled: true,
            file_enabled: false,
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid {
                field: "logging.format",
                reason: format!("unknown format '{other}'"),
            }),
        }
    }
}
