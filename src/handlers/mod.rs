pub mod car;
pub mod root;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::constants::STATIC_MOUNT;
use crate::AppState;

/// Assembles the API. Only `/api/cars` routes sit behind the API key;
/// unmatched paths and methods fall through to a 404 envelope.
pub fn app(state: AppState) -> Router {
    api_router(&state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The API plus the browser client served from `static_dir` under `/app`.
pub fn app_with_static(state: AppState, static_dir: &str) -> Router {
    api_router(&state)
        .nest_service(STATIC_MOUNT, ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(car::router(state))
        .fallback(root::route_not_found)
}
