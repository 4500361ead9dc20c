//! Catalog and management views over a car listing.
//!
//! The public catalog shows only cars flagged `show_in_catalog`; the
//! management view shows everything, split into the visible and hidden tabs.

use crate::types::Car;

/// A listing with its visibility split. Both halves are filtered from one
/// list that keeps the order it was built from (newest first when built from
/// `GET /api/cars`), so a visibility change never moves a car.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    cars: Vec<Car>,
}

impl CatalogView {
    pub fn from_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        Self {
            cars: cars.into_iter().collect(),
        }
    }

    /// Cars shown on the public catalog page.
    pub fn catalog_cars(&self) -> Vec<&Car> {
        self.cars.iter().filter(|car| car.show_in_catalog).collect()
    }

    pub fn hidden_cars(&self) -> Vec<&Car> {
        self.cars.iter().filter(|car| !car.show_in_catalog).collect()
    }

    pub fn total(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Replace a car in place with the version returned by the server.
    /// Returns false if the car is not part of this view.
    pub fn apply_update(&mut self, updated: Car) -> bool {
        match self.cars.iter_mut().find(|car| car.id == updated.id) {
            Some(car) => {
                *car = updated;
                true
            }
            None => false,
        }
    }

    /// Drop a deleted car.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.cars.len();
        self.cars.retain(|car| car.id != id);
        self.cars.len() != before
    }
}
