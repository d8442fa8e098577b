//! Command definitions and execution logic.
//!
//! Each HTTP operation maps to one command struct:
//!
//! - `company`: company CRUD and the child-stations aggregation.
//! - `station`: station CRUD.
//! - `geo`: radius search.
//! - `execute`: the [`CommandExecute`] trait and the logged runner.
//! - `validate`: request forms and their validation.

pub mod company;
pub mod execute;
pub mod geo;
pub mod station;
pub mod validate;

pub use company::*;
pub use execute::*;
pub use geo::*;
pub use station::*;
pub use validate::*;
