//! Stateless HTTP request builder and response parser for the car catalog API.
//!
//! # Design
//! `CarClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`, so a page can run the round-trip with whatever
//! HTTP stack it has.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    Car, CarList, CarResponse, CarWithMessage, CreateCar, ErrorResponse, MessageResponse,
    SetVisibility,
};

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Synchronous, stateless client for the car catalog API.
#[derive(Debug, Clone)]
pub struct CarClient {
    base_url: String,
}

impl CarClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_ping(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/api/ping".to_string())
    }

    pub fn build_demo(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/api/demo".to_string())
    }

    pub fn build_list_cars(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/api/cars".to_string())
    }

    pub fn build_get_car(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Get, car_path(id))
    }

    pub fn build_create_car(&self, input: &CreateCar) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.with_json(HttpMethod::Post, "/api/cars".to_string(), body))
    }

    pub fn build_delete_car(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Delete, car_path(id))
    }

    pub fn build_set_visibility(&self, id: &str, visible: bool) -> Result<HttpRequest, ApiError> {
        let input = SetVisibility {
            show_in_catalog: visible,
        };
        let body = serde_json::to_string(&input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.with_json(HttpMethod::Patch, format!("{}/visibility", car_path(id)), body))
    }

    pub fn parse_ping(&self, response: HttpResponse) -> Result<String, ApiError> {
        let parsed: MessageResponse = parse_body(&response, 200)?;
        Ok(parsed.message)
    }

    pub fn parse_demo(&self, response: HttpResponse) -> Result<String, ApiError> {
        let parsed: MessageResponse = parse_body(&response, 200)?;
        Ok(parsed.message)
    }

    pub fn parse_list_cars(&self, response: HttpResponse) -> Result<Vec<Car>, ApiError> {
        let parsed: CarList = parse_body(&response, 200)?;
        Ok(parsed.cars)
    }

    pub fn parse_get_car(&self, response: HttpResponse) -> Result<Car, ApiError> {
        let parsed: CarResponse = parse_body(&response, 200)?;
        Ok(parsed.car)
    }

    pub fn parse_create_car(&self, response: HttpResponse) -> Result<CarWithMessage, ApiError> {
        parse_body(&response, 201)
    }

    /// Returns the confirmation message naming the deleted car.
    pub fn parse_delete_car(&self, response: HttpResponse) -> Result<String, ApiError> {
        let parsed: MessageResponse = parse_body(&response, 200)?;
        Ok(parsed.message)
    }

    pub fn parse_set_visibility(&self, response: HttpResponse) -> Result<CarWithMessage, ApiError> {
        parse_body(&response, 200)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(&self, method: HttpMethod, path: String, body: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

fn car_path(id: &str) -> String {
    format!("/api/cars/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        400 => {
            // Fall back to the raw body if the server did not send `{error}`.
            let message = serde_json::from_str::<ErrorResponse>(&response.body)
                .map(|e| e.error)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::BadRequest(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
