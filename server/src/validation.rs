//! Create-request validation.
//!
//! Rules run in a fixed order and stop at the first failure: every required
//! field is checked for presence and type in declaration order, then the year
//! range, then price, then mileage. Nothing is written to the store unless
//! all of them pass.

use std::str::FromStr;

use catalog_core::{BodyType, FuelType, Transmission};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::store::NewCar;

pub const MIN_YEAR: i32 = 1900;

/// Required fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "title",
    "brand",
    "model",
    "year",
    "price",
    "mileage",
    "fuelType",
    "transmission",
    "bodyType",
    "color",
    "description",
    "imageUrl",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} must be one of: {}", .allowed.join(", "))]
    UnknownChoice {
        field: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("Year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },

    #[error("Price must be greater than 0")]
    PriceNotPositive,

    #[error("Mileage cannot be negative")]
    NegativeMileage,
}

impl ValidationError {
    /// The request field this error is attributed to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::Missing(field)
            | ValidationError::WrongType { field, .. }
            | ValidationError::UnknownChoice { field, .. } => Some(*field),
            ValidationError::YearOutOfRange { .. } => Some("year"),
            ValidationError::PriceNotPositive => Some("price"),
            ValidationError::NegativeMileage => Some("mileage"),
        }
    }
}

/// Validate a create payload against the rules for `current_year`.
pub fn validate_new_car(body: &Value, current_year: i32) -> Result<NewCar, ValidationError> {
    let fields = body.as_object().ok_or(ValidationError::NotAnObject)?;

    let title = text(fields, "title")?;
    let brand = text(fields, "brand")?;
    let model = text(fields, "model")?;
    let year = integer(fields, "year")?;
    let price = number(fields, "price")?;
    let mileage = number(fields, "mileage")?;
    let fuel_type: FuelType = choice(fields, "fuelType", FuelType::NAMES)?;
    let transmission: Transmission = choice(fields, "transmission", Transmission::NAMES)?;
    let body_type: BodyType = choice(fields, "bodyType", BodyType::NAMES)?;
    let color = text(fields, "color")?;
    let description = text(fields, "description")?;
    let image_url = text(fields, "imageUrl")?;

    let show_in_catalog = match fields.get("showInCatalog") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(visible)) => *visible,
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "showInCatalog",
                expected: "a boolean",
            })
        }
    };

    let max_year = current_year + 1;
    let year = i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=max_year).contains(y))
        .ok_or(ValidationError::YearOutOfRange {
            min: MIN_YEAR,
            max: max_year,
        })?;

    if price <= 0.0 {
        return Err(ValidationError::PriceNotPositive);
    }
    if mileage < 0.0 {
        return Err(ValidationError::NegativeMileage);
    }

    Ok(NewCar {
        title,
        brand,
        model,
        year,
        price,
        mileage,
        fuel_type,
        transmission,
        body_type,
        color,
        description,
        image_url,
        show_in_catalog,
    })
}

fn present<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing(field)),
        Some(value) => Ok(value),
    }
}

fn text(fields: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match present(fields, field)? {
        Value::String(s) if s.trim().is_empty() => Err(ValidationError::Missing(field)),
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn integer(fields: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
    present(fields, field)?
        .as_i64()
        .ok_or(ValidationError::WrongType {
            field,
            expected: "an integer",
        })
}

fn number(fields: &Map<String, Value>, field: &'static str) -> Result<f64, ValidationError> {
    present(fields, field)?
        .as_f64()
        .ok_or(ValidationError::WrongType {
            field,
            expected: "a number",
        })
}

fn choice<T: FromStr>(
    fields: &Map<String, Value>,
    field: &'static str,
    allowed: &'static [&'static str],
) -> Result<T, ValidationError> {
    match present(fields, field)? {
        Value::String(s) if s.is_empty() => Err(ValidationError::Missing(field)),
        Value::String(s) => s
            .parse()
            .map_err(|_| ValidationError::UnknownChoice { field, allowed }),
        _ => Err(ValidationError::UnknownChoice { field, allowed }),
    }
}
