pub mod error;
pub mod health;
pub mod localities;

pub use error::AppError;
