//! Blocking, typed client for the zoos/animals REST API.
//!
//! # Overview
//! Translates eight REST operations over a fixed resource hierarchy
//! (`/zoos`, `/zoos/{id}`, `/zoos/{id}/animals`,
//! `/zoos/{zooId}/animals/{animalId}`) into HTTP requests and decodes the
//! JSON bodies of successful responses into typed records.
//!
//! # Design
//! - `ZooClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`, and neither touches the network,
//!   so the contract is testable without a server.
//! - `ZooApi` pairs a `ZooClient` with an injected `HttpTransport` (ureq by
//!   default, with configurable timeouts) for the actual round-trip.
//! - Query parameters on list operations pass through verbatim; the server
//!   owns their interpretation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::ZooApi;
pub use client::{ZooClient, VENDOR_MEDIA_TYPE};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, TransportConfig, UreqTransport};
pub use types::{Animal, Zoo, ZooPatch};
