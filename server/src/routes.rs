use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use catalog_core::{CarList, CarResponse, CarWithMessage, MessageResponse};
use chrono::{Datelike, Utc};
use serde_json::Value;

use crate::error::ApiError;
use crate::validation::{validate_new_car, ValidationError};
use crate::AppState;

pub const DEMO_MESSAGE: &str = "Hello from the car catalog API";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/demo", get(demo))
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/{id}", get(get_car).delete(delete_car))
        .route("/cars/{id}/visibility", patch(set_visibility))
}

async fn ping(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.ping_message.to_string(),
    })
}

async fn demo() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: DEMO_MESSAGE.to_string(),
    })
}

async fn list_cars(State(state): State<AppState>) -> Json<CarList> {
    Json(CarList {
        cars: state.store.list().await,
    })
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarResponse>, ApiError> {
    let id = required_id(&id)?;
    let car = state.store.get(id).await?;
    Ok(Json(CarResponse { car }))
}

async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CarWithMessage>), ApiError> {
    let Json(body) = payload.map_err(invalid_body)?;
    let new_car = validate_new_car(&body, Utc::now().year())?;
    let car = state.store.insert(new_car).await;
    tracing::info!(id = %car.id, title = %car.title, "car created");

    Ok((
        StatusCode::CREATED,
        Json(CarWithMessage {
            car,
            message: "Car added successfully".to_string(),
        }),
    ))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = required_id(&id)?;
    let car = state.store.delete(id).await?;
    tracing::info!(id = %car.id, title = %car.title, "car deleted");

    Ok(Json(MessageResponse {
        message: format!("Car \"{}\" deleted successfully", car.title),
    }))
}

async fn set_visibility(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CarWithMessage>, ApiError> {
    let id = required_id(&id)?;
    // unknown ids are reported before the body is looked at
    state.store.get(id).await?;

    let Json(body) = payload.map_err(invalid_body)?;
    let visible = body
        .get("showInCatalog")
        .and_then(Value::as_bool)
        .ok_or(ValidationError::WrongType {
            field: "showInCatalog",
            expected: "a boolean",
        })?;

    let car = state.store.set_visibility(id, visible).await?;
    let shown = if car.show_in_catalog { "shown" } else { "hidden" };
    tracing::info!(id = %car.id, visible, "car visibility updated");

    Ok(Json(CarWithMessage {
        car,
        message: format!("Car visibility updated: {shown} in catalog"),
    }))
}

/// Ids are matched exactly as sent; whitespace only counts when the whole id
/// is blank.
fn required_id(id: &str) -> Result<&str, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::MissingId);
    }
    Ok(id)
}

fn invalid_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
}
