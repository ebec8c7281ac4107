//! Error types for rancho-core

use thiserror::Error;

use crate::models::{HistoryId, ItemId};

/// Result type alias using rancho-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rancho-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading or writing the document file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be parsed or serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No item with the given id
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// No history entry with the given id
    #[error("History entry not found: {0}")]
    HistoryEntryNotFound(HistoryId),

    /// A listing matched no items
    #[error("No items matched the query")]
    NoItemsFound,

    /// The history log has no entries
    #[error("History is empty")]
    EmptyHistory,
}
