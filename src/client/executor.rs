//! HTTP request executor with retry and backoff.
//!
//! One logical call may make several HTTP attempts. 2xx responses return at
//! once, 4xx responses fail at once, and 5xx responses or connection-level
//! failures are retried according to the [`RetryPolicy`].

use super::retry::RetryPolicy;
use crate::config::Config;
use crate::domain::ValidationError;
use crate::error::{DexPaprikaError, DexPaprikaResult};
use crate::metrics::{HttpTimer, Metrics};
use serde_json::Value;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Issues requests against a fixed base URL.
///
/// Holds no per-call state; the same executor serves every request of a client.
#[derive(Clone)]
pub struct RequestExecutor {
    /// Base URL for the API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Retry behavior for transient failures
    retry: RetryPolicy,

    /// User-Agent header value
    user_agent: String,

    /// Metrics collector
    metrics: Metrics,
}

impl RequestExecutor {
    /// Create an executor from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_url.clone(),
            agent: Arc::new(agent),
            retry: config.retry_policy(),
            user_agent: config.user_agent.clone(),
            metrics,
        }
    }

    /// The retry policy in effect.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request.
    pub fn get(&self, path: &str, query: &[(&str, String)]) -> DexPaprikaResult<Value> {
        self.execute(HttpMethod::Get, path, query, None)
    }

    /// Execute a POST request with a JSON body.
    pub fn post(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &Value,
    ) -> DexPaprikaResult<Value> {
        self.execute(HttpMethod::Post, path, query, Some(body))
    }

    /// Perform one logical call, retrying transient failures.
    ///
    /// Returns the parsed JSON body on success. Once retries run out the last
    /// error is returned inside [`DexPaprikaError::RetriesExhausted`].
    pub fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> DexPaprikaResult<Value> {
        if path.trim().is_empty() {
            return Err(ValidationError::Blank { param: "path" }.into());
        }

        let url = self.build_url(path.trim());
        let mut attempt: u32 = 0;

        loop {
            match self.attempt(method, &url, query, body) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.retry.max_retries() => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(
                        method = method.as_str(),
                        url = %url,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Transient failure, retrying"
                    );
                    self.metrics.record_retry();
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) if err.is_retryable() => {
                    tracing::error!(
                        "{} {} - giving up after {} attempts: {}",
                        method.as_str(),
                        url,
                        attempt + 1,
                        err
                    );
                    return Err(DexPaprikaError::RetriesExhausted {
                        attempts: attempt + 1,
                        source: Box::new(err),
                    });
                }
                Err(err) => {
                    tracing::debug!("{} {} - Error: {}", method.as_str(), url, err);
                    return Err(err);
                }
            }
        }
    }

    /// Make a single HTTP attempt.
    fn attempt(
        &self,
        method: HttpMethod,
        url: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> DexPaprikaResult<Value> {
        tracing::debug!("{} {}", method.as_str(), url);
        let timer = HttpTimer::new(self.metrics.clone());

        let mut request = match method {
            HttpMethod::Get => self.agent.get(url),
            HttpMethod::Post => self.agent.post(url),
        }
        .set("Accept", "application/json")
        .set("User-Agent", &self.user_agent);

        for (name, value) in query {
            request = request.query(name, value);
        }

        let result = match body {
            Some(body) => request
                .set("Content-Type", "application/json")
                .send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                timer.complete();
                tracing::debug!(
                    "{} {} - Success (status: {})",
                    method.as_str(),
                    url,
                    response.status()
                );
                Self::parse_body(response)
            }
            Err(e) => {
                timer.complete_with_error();
                Err(Self::map_error(e))
            }
        }
    }

    fn parse_body(response: ureq::Response) -> DexPaprikaResult<Value> {
        let body = response
            .into_string()
            .map_err(|e| DexPaprikaError::Transport(e.to_string()))?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(DexPaprikaError::JsonError)
    }

    /// Map a ureq error to a DexPaprikaError.
    fn map_error(error: ureq::Error) -> DexPaprikaError {
        match error {
            ureq::Error::Status(code, response) => {
                let retry_after = response
                    .header("Retry-After")
                    .and_then(|v| v.trim().parse::<u64>().ok());
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => DexPaprikaError::NotFound(message),
                    429 => DexPaprikaError::RateLimited { retry_after },
                    500..=599 => DexPaprikaError::ServerError {
                        status: code,
                        message,
                    },
                    _ => DexPaprikaError::ClientError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::InvalidUrl
                | ureq::ErrorKind::UnknownScheme
                | ureq::ErrorKind::InvalidProxyUrl
                | ureq::ErrorKind::BadHeader
                | ureq::ErrorKind::InsecureRequestHttpsOnly => {
                    DexPaprikaError::InvalidRequest(transport.to_string())
                }
                _ if is_timeout(&transport) => DexPaprikaError::Timeout,
                _ => DexPaprikaError::Transport(transport.to_string()),
            },
        }
    }
}

/// A socket read or connect that ran past the agent deadline.
fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = transport.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            ) {
                return true;
            }
        }
        source = err.source();
    }
    false
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor(base_url: &str) -> RequestExecutor {
        let config = Config::default().with_api_url(base_url);
        RequestExecutor::new(&config, Metrics::new())
    }

    #[test]
    fn test_build_url() {
        let exec = executor("https://api.example.com");
        assert_eq!(exec.build_url("/networks"), "https://api.example.com/networks");
        assert_eq!(exec.build_url("networks"), "https://api.example.com/networks");

        let exec = executor("https://api.example.com/");
        assert_eq!(exec.build_url("/networks"), "https://api.example.com/networks");
    }

    #[test]
    fn test_empty_path_is_rejected_without_a_request() {
        let metrics = Metrics::new();
        let config = Config::default().with_api_url("http://127.0.0.1:9");
        let exec = RequestExecutor::new(&config, metrics.clone());

        let err = exec.get("  ", &[]).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(metrics.http_requests_total(), 0);
    }

    #[test]
    fn test_executor_uses_configured_policy() {
        let config = Config::default().with_max_retries(2).with_backoff_ms(vec![5]);
        let exec = RequestExecutor::new(&config, Metrics::new());
        assert_eq!(exec.retry_policy().max_retries(), 2);
        assert_eq!(
            exec.retry_policy().base_delay(3),
            Duration::from_millis(5)
        );
    }
}
