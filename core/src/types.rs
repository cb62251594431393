//! Domain DTOs for the zoo API.
//!
//! # Design
//! These types mirror the remote API's JSON schema but are defined
//! independently from the mock-server crate; integration tests catch any
//! schema drift between the two. All records are immutable value objects
//! with no lifecycle beyond deserialization.

use serde::{Deserialize, Serialize};

/// A single zoo record returned by the API.
///
/// Also serves as the request payload for create (POST) and replace (PUT),
/// where it is form-encoded in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Zoo {
    pub id: u64,
    pub name: String,
    pub address: String,
}

/// Partial-update payload for PATCH. Only the fields present in the encoded
/// body are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZooPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A single animal record. The owning zoo is implied by the request path,
/// never carried as a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: u64,
}
