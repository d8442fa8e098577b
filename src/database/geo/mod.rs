pub mod geo_base;
pub mod geo_distance;

pub use geo_base::*;
pub use geo_distance::*;
