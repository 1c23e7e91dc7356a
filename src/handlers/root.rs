use axum::{
    http::{Method, Uri},
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;

use crate::constants::API_KEY_HEADER;
use crate::error::AppError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome).fallback(route_not_found))
}

pub async fn welcome() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Classic Cars API",
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": format!("Send the {} header with every /api/cars request", API_KEY_HEADER),
        "endpoints": {
            "listCars": "GET /api/cars",
            "getCar": "GET /api/cars/:id",
            "createCar": "POST /api/cars",
            "updateCar": "PUT /api/cars/:id",
            "deleteCar": "DELETE /api/cars/:id"
        }
    }))
}

pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::route_not_found(method.as_str(), uri.path())
}
