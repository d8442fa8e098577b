pub mod cli;
pub mod settings;

pub use cli::*;
pub use settings::*;
