// Layout stores - JSON file and in-memory

use crate::grid::layout::Layout;
use crate::grid::traits::{LayoutStore, StoreError, StoreResult};
use dashmap::DashMap;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Layouts kept as a pretty-printed JSON array in a single file.
///
/// Every call re-reads the file, so edits from other processes are visible
/// immediately.
#[derive(Debug, Clone)]
pub struct JsonLayoutStore {
    path: PathBuf,
}

impl JsonLayoutStore {
    /// Opens the store, creating the directory and an empty file if needed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self { path: path.into() };
        if let Some(parent) = store.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| store.io_error(e))?;
        }
        if !store.path.exists() {
            store.write_all(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read_all(&self) -> StoreResult<Vec<Layout>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write_all(&self, layouts: &[Layout]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(layouts).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

impl LayoutStore for JsonLayoutStore {
    fn list_layouts(&self) -> StoreResult<Vec<Layout>> {
        self.read_all()
    }

    fn get_layout(&self, name: &str) -> StoreResult<Option<Layout>> {
        Ok(self.read_all()?.into_iter().find(|l| l.name == name))
    }

    fn upsert_layout(&self, layout: Layout) -> StoreResult<()> {
        if layout.name.trim().is_empty() {
            return Err(StoreError::InvalidName);
        }
        let mut layouts = self.read_all()?;
        match layouts.iter_mut().find(|l| l.name == layout.name) {
            Some(existing) => {
                debug!("Replacing layout '{}'", layout.name);
                *existing = layout;
            }
            None => {
                info!("💾 Saved new layout '{}'", layout.name);
                layouts.push(layout);
            }
        }
        self.write_all(&layouts)
    }

    fn delete_layout(&self, name: &str) -> StoreResult<bool> {
        let mut layouts = self.read_all()?;
        let before = layouts.len();
        layouts.retain(|l| l.name != name);
        if layouts.len() == before {
            return Ok(false);
        }
        self.write_all(&layouts)?;
        info!("🗑️  Deleted layout '{}'", name);
        Ok(true)
    }
}

/// Layouts held in memory only.
#[derive(Debug, Default)]
pub struct MemoryLayoutStore {
    layouts: DashMap<String, Layout>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layouts(layouts: impl IntoIterator<Item = Layout>) -> Self {
        let store = Self::new();
        for layout in layouts {
            store.layouts.insert(layout.name.clone(), layout);
        }
        store
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn list_layouts(&self) -> StoreResult<Vec<Layout>> {
        Ok(self
            .layouts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn get_layout(&self, name: &str) -> StoreResult<Option<Layout>> {
        Ok(self.layouts.get(name).map(|entry| entry.value().clone()))
    }

    fn upsert_layout(&self, layout: Layout) -> StoreResult<()> {
        if layout.name.trim().is_empty() {
            return Err(StoreError::InvalidName);
        }
        self.layouts.insert(layout.name.clone(), layout);
        Ok(())
    }

    fn delete_layout(&self, name: &str) -> StoreResult<bool> {
        Ok(self.layouts.remove(name).is_some())
    }
}
