// Window management module
pub mod discovery;
pub mod info;
pub mod mover;
pub mod room;
pub mod system;
#[cfg(windows)]
pub mod win32;

// Re-export main types
pub use discovery::WindowDiscovery;
pub use info::{ManagedWindow, Rect, ScreenSize, WindowHandle};
pub use mover::{MoveOutcome, MoveReport, WindowMover};
pub use room::Room;
pub use system::{PositionFlags, RawWindow, WindowSystem, ZOrder};
#[cfg(windows)]
pub use win32::Win32WindowSystem;
