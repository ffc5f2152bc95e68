pub mod articles;
mod body;
pub mod collections;
pub mod error;
pub mod fallback;
pub mod health;
pub mod subscribe;
pub mod upload;

pub use body::parse_json;
pub use error::AppError;
