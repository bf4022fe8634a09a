//! # Directory Store
//!
//! Read-only email → department/manager mapping backing the lookup
//! service. Keys are matched exactly; no case folding.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};

use super::error::{StoreError, StoreResult};
use crate::models::DirectoryEntry;

const KIND: &str = "Directory entry";

/// Shared handle to the directory mapping
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    entries: Arc<RwLock<HashMap<String, DirectoryEntry>>>,
}

impl DirectoryStore {
    /// Build a store from entries, keyed by each entry's email
    pub fn new(entries: impl IntoIterator<Item = DirectoryEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.email.clone(), entry))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// The built-in demo directory
    pub fn seeded() -> Self {
        Self::new(default_entries())
    }

    /// Load entries from a JSON array of `{email, department, manager}`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read directory seed: {:?}", path))?;
        let entries: Vec<DirectoryEntry> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid directory seed: {:?}", path))?;

        tracing::info!(count = entries.len(), "Loaded directory seed from {:?}", path);
        Ok(Self::new(entries))
    }

    /// Exact-match lookup by email
    pub fn get(&self, email: &str) -> StoreResult<DirectoryEntry> {
        self.entries
            .read()
            .map_err(|_| StoreError::Poisoned(KIND))?
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::not_found(KIND, email))
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn default_entries() -> Vec<DirectoryEntry> {
    vec![DirectoryEntry::new(
        "alice@example.com",
        "HR",
        "bob@example.com",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seeded_lookup() {
        let store = DirectoryStore::seeded();
        let entry = store.get("alice@example.com").unwrap();

        assert_eq!(entry.department, "HR");
        assert_eq!(entry.manager, "bob@example.com");
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = DirectoryStore::seeded();

        assert!(store.get("unknown@example.com").unwrap_err().is_not_found());
        assert!(store.get("Alice@Example.com").unwrap_err().is_not_found());
        assert!(store.get("alice").unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"email":"carol@example.com","department":"Finance","manager":"dave@example.com"}}]"#
        )
        .unwrap();

        let store = DirectoryStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("carol@example.com").unwrap().department,
            "Finance"
        );
        assert!(store.get("alice@example.com").is_err());
    }

    #[test]
    fn test_from_json_file_rejects_bad_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(DirectoryStore::from_json_file(file.path()).is_err());
    }
}
