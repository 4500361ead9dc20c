//! Demo listings loaded at startup when `SEED_DEMO_INVENTORY` is on.

use catalog_core::{BodyType, FuelType, Transmission};

use crate::store::{InventoryStore, NewCar};

pub fn demo_cars() -> Vec<NewCar> {
    vec![
        NewCar {
            title: "2024 BMW X5 M50i Sport".to_string(),
            brand: "BMW".to_string(),
            model: "X5".to_string(),
            year: 2024,
            price: 75000.0,
            mileage: 1200.0,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            body_type: BodyType::Suv,
            color: "Black".to_string(),
            description: "Luxury SUV with premium features and excellent performance. Nearly new with low mileage.".to_string(),
            image_url: "https://images.example.com/cars/bmw-x5.jpg".to_string(),
            show_in_catalog: true,
        },
        NewCar {
            title: "2023 Tesla Model S Plaid".to_string(),
            brand: "Tesla".to_string(),
            model: "Model S".to_string(),
            year: 2023,
            price: 89000.0,
            mileage: 5000.0,
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            body_type: BodyType::Sedan,
            color: "White".to_string(),
            description: "High-performance electric sedan with ludicrous acceleration and cutting-edge technology.".to_string(),
            image_url: "https://images.example.com/cars/tesla-model-s.jpg".to_string(),
            show_in_catalog: true,
        },
        NewCar {
            title: "2024 Audi A4 Hybrid".to_string(),
            brand: "Audi".to_string(),
            model: "A4".to_string(),
            year: 2024,
            price: 42000.0,
            mileage: 800.0,
            fuel_type: FuelType::Hybrid,
            transmission: Transmission::Automatic,
            body_type: BodyType::Sedan,
            color: "Silver".to_string(),
            description: "Fuel-efficient hybrid sedan with premium interior and advanced safety features.".to_string(),
            image_url: "https://images.example.com/cars/audi-a4.jpg".to_string(),
            show_in_catalog: false,
        },
    ]
}

/// Insert the demo listings into `store`.
pub async fn seed_demo_inventory(store: &InventoryStore) {
    for car in demo_cars() {
        store.insert(car).await;
    }
    let count = store.len().await;
    tracing::info!(count, "seeded demo inventory");
}
