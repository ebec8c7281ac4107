//! JSON document store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Document;

/// In-memory document mirrored to a single JSON file.
///
/// The file is read once on open and rewritten in full by every `save`.
/// Writes are not atomic: a crash mid-write can leave a truncated file.
#[derive(Debug)]
pub struct Database {
    path: Option<PathBuf>,
    document: Document,
}

impl Database {
    /// Open the document stored at `path`.
    ///
    /// A missing file starts an empty document which is created on the first
    /// save. Unparseable content is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Data file {} does not exist, starting empty",
                    path.display()
                );
                Document::default()
            }
            Err(error) => return Err(error.into()),
        };

        tracing::debug!(
            items = document.items.len(),
            historico = document.history.len(),
            "Loaded document from {}",
            path.display()
        );

        Ok(Self {
            path: Some(path),
            document,
        })
    }

    /// Open a document that is never written anywhere (useful for testing)
    pub fn open_in_memory() -> Self {
        Self::with_document(Document::default())
    }

    /// Wrap an existing document without a backing file
    pub const fn with_document(document: Document) -> Self {
        Self {
            path: None,
            document,
        }
    }

    /// Overwrite the backing file with the current document
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let serialized = serde_json::to_string_pretty(&self.document)?;
        fs::write(path, serialized)?;
        Ok(())
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let tmp = tempdir().unwrap();
        let db = Database::open(tmp.path().join("data.json")).unwrap();
        assert_eq!(db.document(), &Document::default());
    }

    #[test]
    fn test_open_malformed_file_fails() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Database::open(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }

    #[test]
    fn test_save_then_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(
            &path,
            json!({
                "items": [{ "id": "a", "name": "Arroz", "descricao": "Branco", "data": "01/02/2024", "users": 1 }],
                "historico": []
            })
            .to_string(),
        )
        .unwrap();

        let mut db = Database::open(&path).unwrap();
        db.document_mut().items[0].users = 9;
        db.save().unwrap();

        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.document().items[0].users, 9);
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.json");
        let db = Database::open(&path).unwrap();
        db.save().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"items\": [],\n  \"historico\": []\n}");
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let db = Database::open_in_memory();
        assert!(db.path().is_none());
        db.save().unwrap();
    }
}
