use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    middleware::from_fn,
    web, App, HttpRequest, HttpServer,
};
use tracing::info;

use super::{access_log, routes, AccessLogConfig, ApiError};
use crate::{config::Settings, engine::StorageEngine};

/// Максимальный размер JSON-тела запроса.
const JSON_LIMIT: usize = 64 * 1024;

/// Extractor configuration and routes. Malformed bodies and query strings
/// are answered with the API error body instead of actix's plain text.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(json_error),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error))
    .configure(routes);
}

fn json_error(
    err: JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::malformed(err).into()
}

fn query_error(
    err: QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::malformed(err).into()
}

/// Starts the HTTP server and runs until a shutdown signal.
pub async fn run_server(
    settings: &Settings,
    store: web::Data<StorageEngine>,
) -> std::io::Result<()> {
    let addr = settings
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let access = web::Data::new(AccessLogConfig::from_millis(settings.slow_request_ms));

    info!(%addr, workers = settings.workers, "Starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(access.clone())
            .wrap(from_fn(access_log))
            .configure(configure)
    })
    .workers(settings.workers)
    .bind(addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
