// src/infrastructure/local_storage.rs
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// File-backed string key/value store.
///
/// The whole map lives in one JSON object. Every write re-reads the file,
/// applies the change and atomically replaces the file, so independent
/// handles on the same path never drop each other's keys.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    #[instrument(level = "debug", skip(self, value), fields(path = %self.path.display()))]
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "Storage file missing, starting empty");
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage file {}", self.path.display()))
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;

        let json = serde_json::to_string_pretty(items).context("Failed to serialize storage")?;

        let mut file =
            NamedTempFile::new_in(&dir).context("Failed to create temporary storage file")?;
        file.write_all(json.as_bytes())
            .context("Failed to write temporary storage file")?;
        file.persist(&self.path)
            .with_context(|| format!("Failed to replace storage file {}", self.path.display()))?;

        Ok(())
    }
}
