//! Error types for the zoo API client.
//!
//! # Design
//! Failures fall into two families the caller can distinguish: the exchange
//! itself failed (`Transport`, `UnexpectedStatus`) or a payload did not
//! match the expected shape (`Serialization`, `Deserialization`). A non-2xx
//! response keeps the raw status code and body so callers can diagnose
//! server-side failures without the client interpreting them. Nothing is
//! retried or recovered locally.

use std::fmt;

/// Errors returned by `ZooClient` and `ZooApi` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    Transport(String),

    /// The server answered with a status outside the 2xx range.
    UnexpectedStatus { status: u16, body: String },

    /// The request payload could not be encoded.
    Serialization(String),

    /// The response body could not be decoded into the expected shape.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
