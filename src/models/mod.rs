pub mod car;
pub mod response;

pub use car::{Car, CarPayload, CarView, REQUIRED_FIELDS_MESSAGE};
pub use response::{ApiResponse, DeletedCar};
