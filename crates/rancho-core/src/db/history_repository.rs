//! History repository implementation

use crate::error::{Error, Result};
use crate::models::{HistoryEntry, HistoryId, ItemId};

use super::Database;

/// Trait for history log operations
pub trait HistoryRepository {
    /// Upsert the history entry of an item from its current state, then save.
    ///
    /// The item must exist; an entry already tracking it only has `users`
    /// and `data` refreshed.
    fn record(&mut self, item_id: &ItemId) -> Result<()>;

    /// All entries in log order; errors when the log is empty
    fn list(&self) -> Result<&[HistoryEntry]>;

    /// Remove one entry by its own id
    fn delete(&mut self, id: &HistoryId) -> Result<()>;

    /// Remove every entry
    fn clear(&mut self) -> Result<()>;
}

/// `HistoryRepository` over the JSON document
pub struct JsonHistoryRepository<'a> {
    db: &'a mut Database,
}

impl<'a> JsonHistoryRepository<'a> {
    /// Create a new repository over the given database
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db }
    }
}

impl HistoryRepository for JsonHistoryRepository<'_> {
    fn record(&mut self, item_id: &ItemId) -> Result<()> {
        let document = self.db.document_mut();
        let item = document
            .find_item(item_id)
            .cloned()
            .ok_or_else(|| Error::ItemNotFound(item_id.clone()))?;

        if let Some(entry) = document.history_for_item_mut(item_id) {
            entry.refresh_from(&item);
        } else {
            document.history.push(HistoryEntry::snapshot(&item));
        }

        self.db.save()
    }

    fn list(&self) -> Result<&[HistoryEntry]> {
        let history = &self.db.document().history;
        if history.is_empty() {
            return Err(Error::EmptyHistory);
        }
        Ok(history)
    }

    fn delete(&mut self, id: &HistoryId) -> Result<()> {
        let index = self
            .db
            .document()
            .history_position(id)
            .ok_or_else(|| Error::HistoryEntryNotFound(id.clone()))?;
        self.db.document_mut().history.remove(index);
        self.db.save()
    }

    fn clear(&mut self) -> Result<()> {
        self.db.document_mut().history.clear();
        self.db.save()
    }
}
