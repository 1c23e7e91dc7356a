use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use validator::Validate;

use crate::auth::require_api_key;
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::handlers::root::route_not_found;
use crate::models::{ApiResponse, Car, CarPayload, CarView, DeletedCar, REQUIRED_FIELDS_MESSAGE};
use crate::AppState;

/// Car routes, each guarded by the API key. Unsupported methods skip the
/// gate and get the 404 envelope.
pub fn router(state: &AppState) -> Router<AppState> {
    let gate = || middleware::from_fn_with_state(state.clone(), require_api_key);

    Router::new()
        .route(
            "/api/cars",
            get(list_cars)
                .post(create_car)
                .route_layer(gate())
                .fallback(route_not_found),
        )
        .route(
            "/api/cars/:id",
            get(get_car)
                .put(update_car)
                .delete(delete_car)
                .route_layer(gate())
                .fallback(route_not_found),
        )
}

// Ids that do not parse can never match a row.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::car_not_found(raw))
}

async fn find_existing(state: &AppState, raw_id: &str) -> Result<Car, AppError> {
    let id = parse_id(raw_id)?;
    state
        .cars
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::car_not_found(raw_id))
}

pub async fn list_cars(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Car>>>, AppError> {
    let cars = state.cars.find_all().await?;
    let count = cars.len();

    tracing::info!("{} Listed {} cars", API_NAME, count);

    Ok(Json(
        ApiResponse::ok("Cars retrieved successfully", cars).with_count(count),
    ))
}

pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let car = find_existing(&state, &id).await?;

    tracing::info!("{} Retrieved car: {}", API_NAME, car.id);

    Ok(Json(ApiResponse::ok("Car retrieved successfully", car)))
}

pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CarView>>), AppError> {
    let Json(car) = payload?;

    if let Err(e) = car.validate() {
        tracing::debug!("{} Rejected car payload: {}", API_NAME, e);
        return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let id = state.cars.create(&car).await?;

    tracing::info!("{} Created car: {}", API_NAME, id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Car created successfully", CarView::new(id, car))),
    ))
}

pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<CarView>>, AppError> {
    let existing = find_existing(&state, &id).await?;
    let Json(car) = payload?;

    state.cars.update(existing.id, &car).await?;

    tracing::info!("{} Updated car: {}", API_NAME, existing.id);

    Ok(Json(ApiResponse::ok(
        "Car updated successfully",
        CarView::new(existing.id, car),
    )))
}

pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedCar>>, AppError> {
    let existing = find_existing(&state, &id).await?;

    state.cars.delete(existing.id).await?;

    tracing::info!("{} Deleted car: {}", API_NAME, existing.id);

    Ok(Json(ApiResponse::ok(
        "Car deleted successfully",
        DeletedCar { id: existing.id },
    )))
}
