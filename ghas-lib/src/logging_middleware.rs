use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use task_local_extensions::Extensions;

pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
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
        log!(self.level, "{} {}", method, url.path());
        let result = next.run(request, extensions).await;
        match result.as_ref() {
            Ok(response) => {
                log!(
                    self.level,
                    "{} {} -> {}",
                    method,
                    url.path(),
                    response.status()
                );
            }
            Err(e) => {
                log!(self.level, "{} {} failed: {:?}", method, url.path(), e);
            }
        }
        result
    }
}
