//! Item model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::util::today_stamp;

/// Message returned when an add request lacks `name` or `descricao`
pub const MISSING_REQUIRED_FIELDS: &str = "Name and description are required";

/// Identifier of an item.
///
/// New ids are UUID v7 strings, but any string found in a loaded document is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new unique item ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Borrow the textual form of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A meal item tracked by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub descricao: String,
    /// Creation date as `DD/MM/YYYY`
    #[serde(default)]
    pub data: String,
    /// Usage counter, never below zero
    #[serde(default)]
    pub users: u64,
    /// Caller-supplied fields kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Stamp a validated request with a fresh id and today's date
    #[must_use]
    pub fn from_new(new_item: NewItem) -> Self {
        Self {
            id: ItemId::new(),
            name: new_item.name,
            descricao: new_item.descricao,
            data: today_stamp(),
            users: new_item.users,
            extra: new_item.extra,
        }
    }

    /// Case-insensitive substring match on the item name.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    pub fn increment_users(&mut self) {
        self.users = self.users.saturating_add(1);
    }

    /// Decrement the counter, flooring at zero
    pub fn decrement_users(&mut self) {
        self.users = self.users.saturating_sub(1);
    }
}

/// A validated add request
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub descricao: String,
    pub users: u64,
    pub extra: Map<String, Value>,
}

impl NewItem {
    /// Validate the raw JSON object sent by a client.
    ///
    /// `name` and `descricao` must be non-empty strings. `users` is optional
    /// and defaults to zero. Client-supplied `id` and `data` are discarded
    /// since both are assigned on creation.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self> {
        let name = take_text(&mut fields, "name");
        let descricao = take_text(&mut fields, "descricao");
        let (Some(name), Some(descricao)) = (name, descricao) else {
            return Err(Error::InvalidInput(MISSING_REQUIRED_FIELDS.to_string()));
        };

        let users = match fields.remove("users") {
            None | Some(Value::Null) => 0,
            Some(value) => value.as_u64().ok_or_else(|| {
                Error::InvalidInput("users must be a non-negative integer".to_string())
            })?,
        };

        fields.remove("id");
        fields.remove("data");

        Ok(Self {
            name,
            descricao,
            users,
            extra: fields,
        })
    }
}

fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}
