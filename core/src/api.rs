//! Executing client: build, send, parse.
//!
//! # Design
//! `ZooApi` is the one value callers construct: a `ZooClient` plus an
//! injected transport, owned explicitly rather than living in ambient
//! global state. Every method is a single blocking request/response
//! exchange with no retries, no caching, and no state between calls.

use crate::client::ZooClient;
use crate::error::ApiError;
use crate::transport::{HttpTransport, TransportConfig, UreqTransport};
use crate::types::{Animal, Zoo, ZooPatch};

/// Typed client for the `/zoos` resource hierarchy.
///
/// Safe to share across threads whenever the transport is.
#[derive(Debug, Clone)]
pub struct ZooApi<T = UreqTransport> {
    client: ZooClient,
    transport: T,
}

impl ZooApi<UreqTransport> {
    /// Client over the default blocking transport with default timeouts.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::default())
    }

    pub fn with_config(base_url: &str, config: &TransportConfig) -> Self {
        Self::with_transport(base_url, UreqTransport::new(config))
    }
}

impl<T: HttpTransport> ZooApi<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: ZooClient::new(base_url),
            transport,
        }
    }

    /// GET /zoos: list all zoos. `params` are appended to the query string
    /// verbatim, in the given order.
    pub fn list_zoos(&self, params: &[(&str, &str)]) -> Result<Vec<Zoo>, ApiError> {
        let request = self.client.build_list_zoos(params)?;
        self.client.parse_list_zoos(self.transport.execute(&request)?)
    }

    /// POST /zoos: create a zoo from form fields `{id, name, address}`.
    pub fn create_zoo(&self, zoo: &Zoo) -> Result<Zoo, ApiError> {
        let request = self.client.build_create_zoo(zoo)?;
        self.client.parse_create_zoo(self.transport.execute(&request)?)
    }

    /// GET /zoos/{id}: fetch a single zoo.
    pub fn get_zoo(&self, id: u64) -> Result<Zoo, ApiError> {
        let request = self.client.build_get_zoo(id);
        self.client.parse_get_zoo(self.transport.execute(&request)?)
    }

    /// PUT /zoos/{id}: replace a zoo with a full field set.
    pub fn replace_zoo(&self, id: u64, zoo: &Zoo) -> Result<Zoo, ApiError> {
        let request = self.client.build_replace_zoo(id, zoo)?;
        self.client.parse_replace_zoo(self.transport.execute(&request)?)
    }

    /// PATCH /zoos/{id}: update the fields present in `patch`.
    pub fn patch_zoo(&self, id: u64, patch: &ZooPatch) -> Result<Zoo, ApiError> {
        let request = self.client.build_patch_zoo(id, patch)?;
        self.client.parse_patch_zoo(self.transport.execute(&request)?)
    }

    /// DELETE /zoos/{id}: delete a zoo, returning its final representation.
    pub fn delete_zoo(&self, id: u64) -> Result<Zoo, ApiError> {
        let request = self.client.build_delete_zoo(id);
        self.client.parse_delete_zoo(self.transport.execute(&request)?)
    }

    /// GET /zoos/{id}/animals: list a zoo's animals.
    pub fn list_animals(
        &self,
        zoo_id: u64,
        params: &[(&str, &str)],
    ) -> Result<Vec<Animal>, ApiError> {
        let request = self.client.build_list_animals(zoo_id, params)?;
        self.client.parse_list_animals(self.transport.execute(&request)?)
    }

    /// DELETE /zoos/{zooId}/animals/{animalId}: delete one animal,
    /// returning its final representation.
    pub fn delete_animal(&self, zoo_id: u64, animal_id: u64) -> Result<Animal, ApiError> {
        let request = self.client.build_delete_animal(zoo_id, animal_id);
        self.client.parse_delete_animal(self.transport.execute(&request)?)
    }
}
