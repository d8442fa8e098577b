/// Read-side logic: company hierarchy, station aggregation, radius search.
pub mod application;
/// One command per API operation, with input validation.
pub mod command;
/// Settings loading and command line arguments.
pub mod config;
/// Records: companies, stations, coordinates.
pub mod database;
/// Storage engine abstraction and implementations (InMemory, Persistent).
pub mod engine;
/// Flexible logging (formatting, filters, sinks).
pub mod logging;
/// HTTP surface: actix-web routes, middleware, server.
pub mod network;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Hierarchy traversal and geo search.
pub use application::{
    find_within_radius, resolve_descendants, stations_for_company_tree, RadiusGroups, RadiusQuery,
    StationWithDistance,
};
/// API commands.
pub use command::{run_command, CommandExecute, Validate};
/// Settings and command line.
pub use crate::config::{Cli, Settings, StorageConfig, StorageKind};
/// Companies, stations and coordinates.
pub use database::{
    great_circle_distance, Company, CompanyId, GeoPoint, NewCompany, NewStation, Station,
    StationId, EARTH_RADIUS_KM,
};
/// Storage engines: InMemoryStore, InPersistentStore.
pub use engine::{
    seed_demo_data, InMemoryStore, InPersistentStore, Storage, StorageEngine, StoreResult,
};
/// Logging setup.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Error types and result alias.
pub use stationhub_error::{HubResult, StackError, StatusCode};
