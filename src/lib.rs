pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

use std::sync::Arc;

use repository::CarRepository;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub cars: CarRepository,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(cars: CarRepository, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            cars,
            api_key: api_key.into(),
        }
    }
}
