//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `RecordClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. No retries and no timeouts live here:
//! a failed response is reported to the caller as-is.

use serde::de::DeserializeOwned;

use crate::error::{error_message, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Record, RecordFields, RecordId};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Synchronous, stateless client for the employee collection.
#[derive(Debug, Clone)]
pub struct RecordClient {
    base_url: String,
}

impl Default for RecordClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RecordClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_records(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/employees", self.base_url))
    }

    pub fn build_get_record(&self, id: RecordId) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/employees/{id}", self.base_url))
    }

    pub fn build_create_record(&self, input: &RecordFields) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, format!("{}/employees", self.base_url), input)
    }

    pub fn build_update_record(
        &self,
        id: RecordId,
        input: &RecordFields,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(
            HttpMethod::Put,
            format!("{}/employees/{id}", self.base_url),
            input,
        )
    }

    pub fn build_delete_record(&self, id: RecordId) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("{}/employees/{id}", self.base_url))
    }

    /// Rows come back in backend order; nothing is sorted here.
    pub fn parse_list_records(&self, response: HttpResponse) -> Result<Vec<Record>, ApiError> {
        decode(response)
    }

    pub fn parse_get_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        decode(response)
    }

    pub fn parse_create_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        decode(response)
    }

    pub fn parse_update_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        decode(response)
    }

    /// The delete acknowledgement carries no meaningful body.
    pub fn parse_delete_record(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        path: String,
        input: &RecordFields,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = error_message(&response.body);
    if response.status == 404 {
        return Err(ApiError::NotFound { message });
    }
    Err(ApiError::Backend {
        status: response.status,
        message,
        body: response.body.clone(),
    })
}
