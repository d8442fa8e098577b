//! Records managed by the service.
//!
//! - `company`: companies and their parent links.
//! - `station`: stations owned by companies.
//! - `geo`: coordinates and great-circle distance.

pub mod company;
pub mod geo;
pub mod station;

pub use company::*;
pub use geo::*;
pub use station::*;

/// Record identifier taken from a URL path segment.
pub trait RecordId: std::str::FromStr {
    /// Entity name used in the not-found message.
    const ENTITY: &'static str;
}
