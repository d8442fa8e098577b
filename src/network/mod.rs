//! HTTP surface.
//!
//! - `routes`: actix handlers, one per command.
//! - `server`: extractor config and the `HttpServer` loop.
//! - `response`: mapping of `StackError` to HTTP responses.
//! - `access_log`: per-request logging middleware.
//! - `banner`: startup banner.

pub mod access_log;
pub mod banner;
pub mod response;
pub mod routes;
pub mod server;

pub use access_log::*;
pub use response::*;
pub use routes::routes;
pub use server::*;
