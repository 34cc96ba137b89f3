pub mod error;
pub mod models;
pub mod playlist_service;

pub use error::*;
pub use models::*;
pub use playlist_service::*;
