//! Stateless HTTP request builder and response parser for the zoo API.
//!
//! # Design
//! `ZooClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! [`crate::api::ZooApi`] pairs them with a transport for the full
//! round-trip. Query parameters on the list operations are opaque key/value
//! pairs appended in caller order; validation and interpretation belong to
//! the server.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Animal, Zoo, ZooPatch};

/// Vendor media type the remote API uses to select its response schema
/// version. Sent as the `accept` header on every request.
pub const VENDOR_MEDIA_TYPE: &str = "vnd.example-com.foo+json; version=1.0";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Stateless request builder / response parser for the zoo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Each operation is an independent exchange with no
/// dependency on prior calls.
#[derive(Debug, Clone)]
pub struct ZooClient {
    base_url: String,
}

impl ZooClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_zoos(&self, params: &[(&str, &str)]) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: with_query(format!("{}/zoos", self.base_url), params)?,
            headers: accept_headers(),
            body: None,
        })
    }

    pub fn build_create_zoo(&self, zoo: &Zoo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/zoos", self.base_url),
            headers: form_headers(),
            body: Some(encode_form(zoo)?),
        })
    }

    pub fn build_get_zoo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/zoos/{id}", self.base_url),
            headers: accept_headers(),
            body: None,
        }
    }

    pub fn build_replace_zoo(&self, id: u64, zoo: &Zoo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/zoos/{id}", self.base_url),
            headers: form_headers(),
            body: Some(encode_form(zoo)?),
        })
    }

    pub fn build_patch_zoo(&self, id: u64, patch: &ZooPatch) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/zoos/{id}", self.base_url),
            headers: form_headers(),
            body: Some(encode_form(patch)?),
        })
    }

    pub fn build_delete_zoo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/zoos/{id}", self.base_url),
            headers: accept_headers(),
            body: None,
        }
    }

    pub fn build_list_animals(
        &self,
        zoo_id: u64,
        params: &[(&str, &str)],
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: with_query(format!("{}/zoos/{zoo_id}/animals", self.base_url), params)?,
            headers: accept_headers(),
            body: None,
        })
    }

    pub fn build_delete_animal(&self, zoo_id: u64, animal_id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/zoos/{zoo_id}/animals/{animal_id}", self.base_url),
            headers: accept_headers(),
            body: None,
        }
    }

    pub fn parse_list_zoos(&self, response: HttpResponse) -> Result<Vec<Zoo>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_zoo(&self, response: HttpResponse) -> Result<Zoo, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_zoo(&self, response: HttpResponse) -> Result<Zoo, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_replace_zoo(&self, response: HttpResponse) -> Result<Zoo, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_patch_zoo(&self, response: HttpResponse) -> Result<Zoo, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The API returns the deleted zoo's full representation, not an empty
    /// document.
    pub fn parse_delete_zoo(&self, response: HttpResponse) -> Result<Zoo, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_list_animals(&self, response: HttpResponse) -> Result<Vec<Animal>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Like zoo deletion, animal deletion returns the removed record.
    pub fn parse_delete_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn accept_headers() -> Vec<(String, String)> {
    vec![("accept".to_string(), VENDOR_MEDIA_TYPE.to_string())]
}

fn form_headers() -> Vec<(String, String)> {
    vec![
        ("accept".to_string(), VENDOR_MEDIA_TYPE.to_string()),
        ("content-type".to_string(), FORM_CONTENT_TYPE.to_string()),
    ]
}

fn encode_form<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_urlencoded::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Append caller-supplied query pairs to `path`, preserving their order.
fn with_query(path: String, params: &[(&str, &str)]) -> Result<String, ApiError> {
    if params.is_empty() {
        return Ok(path);
    }
    let query =
        serde_urlencoded::to_string(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(format!("{path}?{query}"))
}

/// Reject any response outside the 2xx range without looking at the body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
