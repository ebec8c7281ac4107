//! Root document persisted to disk

use serde::{Deserialize, Serialize};

use super::{HistoryEntry, HistoryId, Item, ItemId};

/// Everything the service stores: items plus their history log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, rename = "historico")]
    pub history: Vec<HistoryEntry>,
}

impl Document {
    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn find_item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn item_position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn history_position(&self, id: &HistoryId) -> Option<usize> {
        self.history.iter().position(|entry| &entry.id == id)
    }

    /// History entry tracking the given item, if one was recorded
    pub fn history_for_item_mut(&mut self, item_id: &ItemId) -> Option<&mut HistoryEntry> {
        self.history
            .iter_mut()
            .find(|entry| &entry.item_id == item_id)
    }
}
