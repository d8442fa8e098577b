use std::path::PathBuf;

use clap::Parser;

/// Аргументы командной строки сервера.
///
/// Флаги применяются поверх файла конфигурации и переменных окружения.
#[derive(Debug, Parser)]
#[command(name = "stationhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "StationHub - companies and charging stations over HTTP", long_about = None)]
pub struct Cli {
    /// Файл конфигурации (TOML, YAML или JSON)
    #[arg(short, long, env = "STATIONHUB_CONFIG")]
    pub config: Option<PathBuf>,
    /// Адрес для прослушивания, например 0.0.0.0:8080
    #[arg(short, long)]
    pub listen: Option<String>,
    /// Заполнить пустое хранилище демонстрационными данными
    #[arg(long)]
    pub seed: bool,
    /// Уровень логирования
    #[arg(long, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
}
