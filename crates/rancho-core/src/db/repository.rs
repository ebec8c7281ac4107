//! Item repository implementation

use crate::error::{Error, Result};
use crate::models::{Item, ItemId, NewItem};
use crate::search::{filter_by_name, paginate, ItemPage, PageRequest};

use super::{Database, HistoryRepository, JsonHistoryRepository};

/// Trait for item storage operations
pub trait ItemRepository {
    /// List one page of items whose name matches the search text.
    ///
    /// Errors with `NoItemsFound` when nothing matches, regardless of page.
    fn list(&self, request: &PageRequest) -> Result<ItemPage>;

    /// Append a new item, save, and record its history entry
    fn create(&mut self, new_item: NewItem) -> Result<Item>;

    /// Remove an item. Its history entry is kept.
    fn delete(&mut self, id: &ItemId) -> Result<()>;

    /// Add one to `users`, save, and record history
    fn increment(&mut self, id: &ItemId) -> Result<Item>;

    /// Subtract one from `users` (never below zero), save, and record history
    fn decrement(&mut self, id: &ItemId) -> Result<Item>;
}

/// `ItemRepository` over the JSON document
pub struct JsonItemRepository<'a> {
    db: &'a mut Database,
}

impl<'a> JsonItemRepository<'a> {
    /// Create a new repository over the given database
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db }
    }

    /// Apply `change` to an item, persist, then refresh its history entry
    fn adjust_users(&mut self, id: &ItemId, change: impl FnOnce(&mut Item)) -> Result<Item> {
        let item = self
            .db
            .document_mut()
            .find_item_mut(id)
            .ok_or_else(|| Error::ItemNotFound(id.clone()))?;
        change(item);
        let updated = item.clone();

        self.db.save()?;
        JsonHistoryRepository::new(self.db).record(id)?;
        Ok(updated)
    }
}

impl ItemRepository for JsonItemRepository<'_> {
    fn list(&self, request: &PageRequest) -> Result<ItemPage> {
        let filtered = filter_by_name(&self.db.document().items, request);
        if filtered.is_empty() {
            return Err(Error::NoItemsFound);
        }
        Ok(paginate(&filtered, request))
    }

    fn create(&mut self, new_item: NewItem) -> Result<Item> {
        let item = Item::from_new(new_item);
        self.db.document_mut().items.push(item.clone());
        self.db.save()?;

        JsonHistoryRepository::new(self.db).record(&item.id)?;
        Ok(item)
    }

    fn delete(&mut self, id: &ItemId) -> Result<()> {
        let index = self
            .db
            .document()
            .item_position(id)
            .ok_or_else(|| Error::ItemNotFound(id.clone()))?;
        self.db.document_mut().items.remove(index);
        self.db.save()
    }

    fn increment(&mut self, id: &ItemId) -> Result<Item> {
        self.adjust_users(id, Item::increment_users)
    }

    fn decrement(&mut self, id: &ItemId) -> Result<Item> {
        self.adjust_users(id, Item::decrement_users)
    }
}
