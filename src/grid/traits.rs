// Common traits and types for layout persistence

use crate::grid::layout::Layout;
use thiserror::Error;

/// Result type for layout store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing layouts
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed layout file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Layout name must not be empty")]
    InvalidName,
}

/// Keyed storage of named layouts.
///
/// Names are case-sensitive keys. Reads always reflect the latest write.
pub trait LayoutStore {
    /// All layouts. Order is not part of the contract.
    fn list_layouts(&self) -> StoreResult<Vec<Layout>>;

    fn get_layout(&self, name: &str) -> StoreResult<Option<Layout>>;

    /// Inserts, or replaces the layout with the same name.
    fn upsert_layout(&self, layout: Layout) -> StoreResult<()>;

    /// Returns true when a layout was removed.
    fn delete_layout(&self, name: &str) -> StoreResult<bool>;

    fn layout_names(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .list_layouts()?
            .into_iter()
            .map(|layout| layout.name)
            .collect())
    }
}

impl<T: LayoutStore + ?Sized> LayoutStore for &T {
    fn list_layouts(&self) -> StoreResult<Vec<Layout>> {
        (**self).list_layouts()
    }

    fn get_layout(&self, name: &str) -> StoreResult<Option<Layout>> {
        (**self).get_layout(name)
    }

    fn upsert_layout(&self, layout: Layout) -> StoreResult<()> {
        (**self).upsert_layout(layout)
    }

    fn delete_layout(&self, name: &str) -> StoreResult<bool> {
        (**self).delete_layout(name)
    }
}
