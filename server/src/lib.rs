//! HTTP server for the car catalog.
//!
//! Routes live under `/api`; see [`routes::router`]. State is an
//! [`InventoryStore`] plus the configured ping message, shared by every
//! handler through [`AppState`].

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod store;
pub mod validation;

use std::any::Any;
use std::sync::Arc;

use axum::{response::IntoResponse, response::Response, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use error::ApiError;
pub use store::{InventoryStore, NewCar, StoreError};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: InventoryStore,
    pub ping_message: Arc<str>,
}

impl AppState {
    pub fn new(store: InventoryStore, ping_message: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            ping_message: ping_message.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InventoryStore::new(), "ping")
    }
}

/// Router over an empty inventory.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

pub fn app_with_state(state: AppState) -> Router {
    with_middleware(Router::new().nest("/api", routes::router()).with_state(state))
}

/// Request tracing, permissive CORS, and panic-to-500 conversion.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}
