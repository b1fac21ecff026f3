// Grid module - layouts, the position calculator and layout persistence

pub mod calculator;
pub mod layout;
pub mod store;
pub mod traits;

pub use calculator::PositionCalculator;
pub use layout::Layout;
pub use store::{JsonLayoutStore, MemoryLayoutStore};
pub use traits::{LayoutStore, StoreError, StoreResult};

pub use crate::config::ArrangementConfig;
pub use crate::window::info::Rect;
