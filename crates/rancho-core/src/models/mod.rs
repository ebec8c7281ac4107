//! Data models for Rancho

mod document;
mod history;
mod item;

pub use document::Document;
pub use history::{HistoryEntry, HistoryId};
pub use item::{Item, ItemId, NewItem};
