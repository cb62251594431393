//! Blocking execution of `HttpRequest` values.
//!
//! # Design
//! `HttpTransport` is the seam between the deterministic build/parse core
//! and real I/O, so tests and embedders can substitute their own HTTP stack.
//! `UreqTransport` is the default implementation: a `ureq::Agent` with
//! status-as-error disabled, so 4xx/5xx responses come back as data and the
//! client owns status interpretation. Timeouts are mandatory on the agent;
//! without them a call could block indefinitely.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single request/response exchange.
///
/// Implementations must be safe to share across threads; the client issues
/// no concurrent-use discipline of its own.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Timeouts applied to the underlying agent.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Limit on establishing a connection.
    pub connect_timeout: Duration,
    /// Limit on the whole exchange, including reading the body.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking transport over a shared `ureq::Agent`.
///
/// Cloning is cheap and clones share the agent's connection pool, so one
/// value can serve many threads.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(config.connect_timeout))
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = ?request.method, url = %request.path, "sending request");

        let result = match (&request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                with_headers(self.agent.get(&request.path), &request.headers).call()
            }
            (HttpMethod::Delete, _) => {
                with_headers(self.agent.delete(&request.path), &request.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&request.path), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&request.path), &request.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&request.path), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(self.agent.put(&request.path), &request.headers).send_empty()
            }
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&request.path), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => {
                with_headers(self.agent.patch(&request.path), &request.headers).send_empty()
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn with_headers<B>(
    builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    headers
        .iter()
        .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()))
}
