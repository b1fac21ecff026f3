//! Finds poker table windows on the desktop and arranges them from saved
//! layouts or a computed default grid.
//!
//! The OS is reached only through [`window::system::WindowSystem`]; the Win32
//! implementation lives in [`window::win32`] and is compiled on Windows only.

pub mod config;
pub mod diagnostics;
pub mod display;
pub mod grid;
pub mod organizer;
pub mod organizer_errors;
pub mod window;

pub use config::{ArrangementConfig, MoverConfig, OrganizerConfig, UserSettings};
pub use diagnostics::{DiagnosticEvent, DiagnosticKind, DiagnosticSink, LogSink, NullSink, Tee, TrailSink};
pub use grid::{JsonLayoutStore, Layout, LayoutStore, MemoryLayoutStore, PositionCalculator};
pub use organizer::{ApplyReport, ApplyStatus, TableOrganizer, WindowResult};
pub use organizer_errors::{OrganizerError, OrganizerResult, RetryConfig};
pub use window::{
    ManagedWindow, MoveOutcome, MoveReport, PositionFlags, RawWindow, Rect, Room, ScreenSize,
    WindowDiscovery, WindowHandle, WindowMover, WindowSystem, ZOrder,
};

/// Maximum per-field deviation, in pixels, still treated as "in position".
pub const POSITION_TOLERANCE: i32 = 20;

/// Default size of a table window in the computed arrangement.
pub const DEFAULT_WINDOW_WIDTH: i32 = 560;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 436;

/// Diagonal step used when a layout has fewer positions than windows.
pub const CASCADE_OFFSET: i32 = 25;

/// Screen size assumed when the primary display cannot be queried.
pub const FALLBACK_SCREEN: ScreenSize = ScreenSize {
    width: 1920,
    height: 1080,
};
