//! Shared types and synchronous API client for the car catalog service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `CarClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response).
//! - The wire types in [`types`] are also what the server serializes, so the
//!   two never disagree on field names.
//! - [`catalog::CatalogView`] turns a listing into the public catalog and the
//!   hidden-cars tab of the management page.

pub mod catalog;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use catalog::CatalogView;
pub use client::CarClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    BodyType, Car, CarList, CarResponse, CarWithMessage, CreateCar, ErrorResponse, FuelType,
    MessageResponse, SetVisibility, Transmission, UnknownVariant,
};
