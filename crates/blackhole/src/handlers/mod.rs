pub mod capture;
pub mod error;
pub mod health;
pub mod requests;

pub use error::AppError;
