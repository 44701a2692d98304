//! Wishlist of product SKUs persisted as a small JSON file.

use crate::error::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub sku: String,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

pub struct Cart {
    path: PathBuf,
}

impl Cart {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved entries; an unreadable or corrupt file counts as empty.
    pub fn entries(&self) -> Vec<CartEntry> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("cannot read cart {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!("ignoring corrupt cart {}: {}", self.path.display(), e);
            Vec::new()
        })
    }

    /// Append `sku` and return the new number of entries.
    pub fn add(&self, sku: &str) -> Result<usize> {
        let mut entries = self.entries();
        entries.push(CartEntry {
            sku: sku.to_string(),
            ts: chrono::Utc::now().timestamp_millis(),
        });

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(&entries)?)
            .wrap_err_with(|| format!("Cannot write cart {}", self.path.display()))?;
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cart = Cart::new(dir.path().join("nested").join("cart.json"));

        assert!(cart.entries().is_empty());
        assert_eq!(cart.add("BG-01").unwrap(), 1);
        assert_eq!(cart.add("BG-02").unwrap(), 2);

        let skus: Vec<_> = cart.entries().into_iter().map(|e| e.sku).collect();
        assert_eq!(skus, ["BG-01", "BG-02"]);
    }

    #[test]
    fn test_corrupt_file_starts_over() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let cart = Cart::new(&path);
        assert!(cart.entries().is_empty());
        assert_eq!(cart.add("BG-03").unwrap(), 1);
    }
}
