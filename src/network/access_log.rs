use std::time::{Duration, Instant};

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error,
};
use tracing::{info, warn};

/// Порог, после которого запрос считается медленным.
#[derive(Debug, Clone, Copy)]
pub struct AccessLogConfig {
    pub slow_request: Duration,
}

impl AccessLogConfig {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            slow_request: Duration::from_millis(ms),
        }
    }
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self::from_millis(500)
    }
}

/// Middleware access-лога: метод, путь, статус и длительность каждого
/// запроса. Запросы дольше порога логируются на уровне WARN.
pub async fn access_log(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let threshold = req
        .app_data::<web::Data<AccessLogConfig>>()
        .map(|cfg| cfg.slow_request)
        .unwrap_or_else(|| AccessLogConfig::default().slow_request);
    let method = req.method().to_string();
    let path = req.path().to_string();
    let start = Instant::now();

    let res = next.call(req).await?;

    let elapsed = start.elapsed();
    let status = res.status().as_u16();
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

    if elapsed > threshold {
        warn!(
            %method,
            %path,
            status,
            elapsed_ms,
            threshold_ms = threshold.as_millis() as u64,
            "Slow request"
        );
    } else {
        info!(%method, %path, status, elapsed_ms, "Request handled");
    }

    Ok(res)
}
