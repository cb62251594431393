//! HTTP requests and responses described as plain data.
//!
//! # Design
//! `ZooClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network; a [`crate::transport::HttpTransport`]
//! implementation executes the round-trip in between. Keeping the two sides
//! as plain data makes request construction and response handling
//! deterministic and testable without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! any transport without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ZooClient::build_*` methods. `path` holds the full URL,
/// including the query string on list requests.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`, then passed to
/// `ZooClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
