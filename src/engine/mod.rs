pub mod engine;
pub mod memory;
pub mod persistent;
pub mod seed;
pub mod storage;

pub use engine::*;
pub use memory::*;
pub use persistent::*;
pub use seed::*;
pub use storage::*;
