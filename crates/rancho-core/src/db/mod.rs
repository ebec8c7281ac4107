//! Storage layer for Rancho

mod connection;
mod history_repository;
mod repository;

pub use connection::Database;
pub use history_repository::{HistoryRepository, JsonHistoryRepository};
pub use repository::{ItemRepository, JsonItemRepository};
