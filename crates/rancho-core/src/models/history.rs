//! History entry model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use super::{Item, ItemId};

/// Identifier of a history entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(String);

impl HistoryId {
    /// Create a new unique history ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HistoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HistoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for HistoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Latest known state of an item, kept after the item itself is deleted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: HistoryId,
    /// Item this entry tracks; not checked against `items`
    pub item_id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub users: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HistoryEntry {
    /// Snapshot an item into a fresh entry
    #[must_use]
    pub fn snapshot(item: &Item) -> Self {
        Self {
            id: HistoryId::new(),
            item_id: item.id.clone(),
            name: item.name.clone(),
            descricao: item.descricao.clone(),
            data: item.data.clone(),
            users: item.users,
            extra: Map::new(),
        }
    }

    /// Refresh the counter and date from the item.
    ///
    /// Name and description keep the values captured when the entry was
    /// created.
    pub fn refresh_from(&mut self, item: &Item) {
        self.users = item.users;
        self.data.clone_from(&item.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn item(users: u64) -> Item {
        serde_json::from_value(json!({
            "id": "item-1",
            "name": "Arroz",
            "descricao": "Branco",
            "data": "10/02/2024",
            "users": users,
        }))
        .unwrap()
    }

    #[test]
    fn test_snapshot_copies_item_fields() {
        let entry = HistoryEntry::snapshot(&item(4));
        assert_eq!(entry.item_id, ItemId::from("item-1"));
        assert_eq!(entry.name, "Arroz");
        assert_eq!(entry.users, 4);
    }

    #[test]
    fn test_refresh_keeps_original_name() {
        let mut entry = HistoryEntry::snapshot(&item(1));
        let mut renamed = item(7);
        renamed.name = "Arroz integral".to_string();

        entry.refresh_from(&renamed);
        assert_eq!(entry.users, 7);
        assert_eq!(entry.name, "Arroz");
    }

    #[test]
    fn test_serializes_item_id_in_camel_case() {
        let value = serde_json::to_value(HistoryEntry::snapshot(&item(0))).unwrap();
        assert_eq!(value["itemId"], json!("item-1"));
        assert!(value.get("item_id").is_none());
    }
}
