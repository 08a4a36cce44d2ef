use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

/// Logs every API request and its outcome at a fixed level.
///
/// Only the method and URL are logged; request headers (and with them the
/// authorization token) never are.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        log!(self.level, "sending {} {}", method, url);

        let started = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = started.elapsed();
        match result.as_ref() {
            Ok(response) => {
                log!(
                    self.level,
                    "{} {} -> {} in {} ms",
                    method,
                    url,
                    response.status(),
                    elapsed.as_millis()
                );
            }
            Err(e) => {
                log!(
                    self.level,
                    "{} {} failed after {} ms: {:?}",
                    method,
                    url,
                    elapsed.as_millis(),
                    e
                );
            }
        }
        result
    }
}
