// Layout - a named, ordered list of target rectangles

use crate::window::info::{ManagedWindow, Rect};
use serde::{Deserialize, Serialize};

/// Position *i* is meant for the *i*-th window in discovery order.
///
/// Serialized with PascalCase keys so `layouts.json` stays readable by the
/// desktop client that shares the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Layout {
    pub name: String,
    pub positions: Vec<Rect>,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positions: Vec::new(),
        }
    }

    pub fn with_positions(name: impl Into<String>, positions: Vec<Rect>) -> Self {
        Self {
            name: name.into(),
            positions,
        }
    }

    /// Snapshot of the rectangles windows had at discovery time.
    pub fn from_windows(name: impl Into<String>, windows: &[ManagedWindow]) -> Self {
        Self::with_positions(name, windows.iter().map(|w| w.rect).collect())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn last_position(&self) -> Option<&Rect> {
        self.positions.last()
    }
}
