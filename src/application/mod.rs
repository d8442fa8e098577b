//! Read-side logic over the store.
//!
//! - `hierarchy`: transitive descendants of a company.
//! - `stations`: stations owned by a company sub-tree.
//! - `radius`: distance search grouped by coordinate.

pub mod hierarchy;
pub mod radius;
pub mod stations;

pub use hierarchy::*;
pub use radius::*;
pub use stations::*;
