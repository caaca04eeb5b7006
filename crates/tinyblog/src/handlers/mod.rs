pub mod error;
pub mod health;
pub mod pages;
pub mod posts;

pub use error::AppError;
