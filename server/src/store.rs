//! In-memory inventory of car listings.
//!
//! The store is the only owner of the collection. Handles are cheap `Clone`s
//! over one `Arc<RwLock<Vec<Car>>>`, and no method holds the lock across an
//! await point other than acquiring it.

use std::sync::Arc;

use catalog_core::{BodyType, Car, FuelType, Transmission};
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("car {0} not found")]
    NotFound(String),
}

/// A validated listing that has not been assigned an id or timestamp yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
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
}

impl NewCar {
    fn into_car(self, id: String) -> Car {
        Car {
            id,
            title: self.title,
            brand: self.brand,
            model: self.model,
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            body_type: self.body_type,
            color: self.color,
            description: self.description,
            image_url: self.image_url,
            show_in_catalog: self.show_in_catalog,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    cars: Arc<RwLock<Vec<Car>>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `cars` as already-created records, in insertion order.
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: Arc::new(RwLock::new(cars)),
        }
    }

    /// All cars, newest first. Cars with equal timestamps are returned
    /// most-recently-inserted first.
    pub async fn list(&self) -> Vec<Car> {
        let cars = self.cars.read().await;
        let mut listed: Vec<Car> = cars.iter().rev().cloned().collect();
        // stable: keeps reverse insertion order among ties
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listed
    }

    pub async fn get(&self, id: &str) -> Result<Car, StoreError> {
        let cars = self.cars.read().await;
        cars.iter()
            .find(|car| car.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn insert(&self, new_car: NewCar) -> Car {
        let mut cars = self.cars.write().await;
        let mut id = Uuid::new_v4().to_string();
        while cars.iter().any(|car| car.id == id) {
            id = Uuid::new_v4().to_string();
        }
        let car = new_car.into_car(id);
        cars.push(car.clone());
        car
    }

    pub async fn set_visibility(&self, id: &str, visible: bool) -> Result<Car, StoreError> {
        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        car.show_in_catalog = visible;
        Ok(car.clone())
    }

    /// Remove a car for good, returning it so callers can name it.
    pub async fn delete(&self, id: &str) -> Result<Car, StoreError> {
        let mut cars = self.cars.write().await;
        let index = cars
            .iter()
            .position(|car| car.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(cars.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.cars.read().await.len()
    }
}
