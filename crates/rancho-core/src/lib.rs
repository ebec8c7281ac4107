//! rancho-core - Core library for Rancho
//!
//! This crate contains the item and history models, the JSON document store,
//! and the repositories used by the Rancho HTTP API.

pub mod db;
pub mod error;
pub mod models;
pub mod search;
pub mod util;

pub use error::{Error, Result};
pub use models::{Document, HistoryEntry, HistoryId, Item, ItemId, NewItem};
