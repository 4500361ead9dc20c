//! Wire types for the car catalog API.
//!
//! # Design
//! These types are shared by the server and the client so both sides agree on
//! one JSON schema: camelCase keys, enum values as their display strings and
//! `createdAt` as an RFC 3339 UTC timestamp. The integration tests in this
//! crate exercise them against a live server.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single vehicle listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: f64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub color: String,
    pub description: String,
    pub image_url: String,
    pub show_in_catalog: bool,
    pub created_at: DateTime<Utc>,
}

/// Returned by `FromStr` when a string names no variant of a catalog enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub value: String,
    pub allowed: &'static [&'static str],
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value {:?}, expected one of {}", self.value, self.allowed.join(", "))
    }
}

impl std::error::Error for UnknownVariant {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const NAMES: &'static [&'static str] = &["Gasoline", "Diesel", "Electric", "Hybrid"];
}

impl FromStr for FuelType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gasoline" => Ok(FuelType::Gasoline),
            "Diesel" => Ok(FuelType::Diesel),
            "Electric" => Ok(FuelType::Electric),
            "Hybrid" => Ok(FuelType::Hybrid),
            other => Err(UnknownVariant {
                value: other.to_string(),
                allowed: Self::NAMES,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const NAMES: &'static [&'static str] = &["Manual", "Automatic"];
}

impl FromStr for Transmission {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual" => Ok(Transmission::Manual),
            "Automatic" => Ok(Transmission::Automatic),
            other => Err(UnknownVariant {
                value: other.to_string(),
                allowed: Self::NAMES,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BodyType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Coupe,
    Truck,
    Convertible,
}

impl BodyType {
    pub const NAMES: &'static [&'static str] =
        &["Sedan", "SUV", "Hatchback", "Coupe", "Truck", "Convertible"];
}

impl FromStr for BodyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sedan" => Ok(BodyType::Sedan),
            "SUV" => Ok(BodyType::Suv),
            "Hatchback" => Ok(BodyType::Hatchback),
            "Coupe" => Ok(BodyType::Coupe),
            "Truck" => Ok(BodyType::Truck),
            "Convertible" => Ok(BodyType::Convertible),
            other => Err(UnknownVariant {
                value: other.to_string(),
                allowed: Self::NAMES,
            }),
        }
    }
}

/// Request payload for creating a car. The server assigns `id` and
/// `createdAt`; `showInCatalog` defaults to true when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCar {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: f64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub color: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_catalog: Option<bool>,
}

/// Body of `PATCH /api/cars/{id}/visibility`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetVisibility {
    pub show_in_catalog: bool,
}

/// `{"cars": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarList {
    pub cars: Vec<Car>,
}

/// `{"car": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarResponse {
    pub car: Car,
}

/// `{"car": {...}, "message": "..."}`, returned by create and visibility
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarWithMessage {
    pub car: Car,
    pub message: String,
}

/// `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"error": "..."}`, the body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
