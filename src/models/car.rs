use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const REQUIRED_FIELDS_MESSAGE: &str = "brand, model, and year are required";

/// A persisted row of the `cars` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// The editable fields of a car as sent by clients on create and update.
///
/// Every field is optional at the wire level: create enforces the required
/// ones through [`Validate`], update writes whatever it receives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CarPayload {
    #[validate(required, length(min = 1))]
    pub brand: Option<String>,
    #[validate(required, length(min = 1))]
    pub model: Option<String>,
    #[validate(required, range(min = 1))]
    pub year: Option<i64>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub mileage: Option<i64>,
    pub description: Option<String>,
}

/// Car echoed back after a write, built from the request rather than re-read.
#[derive(Debug, Clone, Serialize)]
pub struct CarView {
    pub id: i64,
    #[serde(flatten)]
    pub fields: CarPayload,
}

impl CarView {
    pub fn new(id: i64, fields: CarPayload) -> Self {
        Self { id, fields }
    }
}
