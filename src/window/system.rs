// Capability surface the organizer needs from the host window system

use crate::window::info::{Rect, ScreenSize, WindowHandle};
use bitflags::bitflags;

/// One visible top-level window as reported by enumeration.
#[derive(Clone, Debug, PartialEq)]
pub struct RawWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub process_name: String,
    /// `None` when the rectangle could not be read, usually because the
    /// window closed during enumeration.
    pub rect: Option<Rect>,
}

impl RawWindow {
    pub fn new(
        handle: WindowHandle,
        title: impl Into<String>,
        process_name: impl Into<String>,
        rect: Option<Rect>,
    ) -> Self {
        Self {
            handle,
            title: title.into(),
            process_name: process_name.into(),
            rect,
        }
    }
}

/// Z-order placement requested together with a position change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZOrder {
    Top,
    TopMost,
    NoTopMost,
}

bitflags! {
    /// Position-change flags. Values match the Win32 `SWP_*` constants so the
    /// Win32 adapter can pass them through unchanged.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PositionFlags: u32 {
        const NO_SIZE = 0x0001;
        const NO_MOVE = 0x0002;
        const NO_ZORDER = 0x0004;
        const NO_ACTIVATE = 0x0010;
        const FRAME_CHANGED = 0x0020;
        const SHOW_WINDOW = 0x0040;
        const NO_OWNER_ZORDER = 0x0200;
        const ASYNC_WINDOW_POS = 0x4000;
    }
}

impl PositionFlags {
    /// Show, refresh the frame, keep focus where it is.
    pub fn show_no_activate() -> Self {
        Self::SHOW_WINDOW | Self::FRAME_CHANGED | Self::NO_ACTIVATE
    }

    /// Z-order only; geometry is left untouched.
    pub fn keep_geometry() -> Self {
        Self::NO_MOVE | Self::NO_SIZE | Self::NO_ACTIVATE | Self::NO_OWNER_ZORDER
    }
}

/// Window system operations used by discovery and the mover.
///
/// Every call reports failure through its return value. Implementations must
/// not panic on a handle that has gone stale.
pub trait WindowSystem {
    /// Snapshot of all visible top-level windows.
    fn enumerate_windows(&self) -> Vec<RawWindow>;

    fn is_valid(&self, handle: WindowHandle) -> bool;

    fn window_rect(&self, handle: WindowHandle) -> Option<Rect>;

    fn set_position(
        &self,
        handle: WindowHandle,
        rect: Rect,
        z_order: ZOrder,
        flags: PositionFlags,
    ) -> bool;

    /// Direct move/resize primitive, bypassing z-order handling.
    fn move_resize(&self, handle: WindowHandle, rect: Rect) -> bool;

    fn is_minimized(&self, handle: WindowHandle) -> bool;

    fn restore(&self, handle: WindowHandle) -> bool;

    fn bring_to_foreground(&self, handle: WindowHandle) -> bool;

    fn bring_to_top(&self, handle: WindowHandle) -> bool;

    /// Primary display size, `None` if it cannot be queried.
    fn primary_screen_size(&self) -> Option<ScreenSize>;
}

impl<T: WindowSystem + ?Sized> WindowSystem for &T {
    fn enumerate_windows(&self) -> Vec<RawWindow> {
        (**self).enumerate_windows()
    }

    fn is_valid(&self, handle: WindowHandle) -> bool {
        (**self).is_valid(handle)
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<Rect> {
        (**self).window_rect(handle)
    }

    fn set_position(
        &self,
        handle: WindowHandle,
        rect: Rect,
        z_order: ZOrder,
        flags: PositionFlags,
    ) -> bool {
        (**self).set_position(handle, rect, z_order, flags)
    }

    fn move_resize(&self, handle: WindowHandle, rect: Rect) -> bool {
        (**self).move_resize(handle, rect)
    }

    fn is_minimized(&self, handle: WindowHandle) -> bool {
        (**self).is_minimized(handle)
    }

    fn restore(&self, handle: WindowHandle) -> bool {
        (**self).restore(handle)
    }

    fn bring_to_foreground(&self, handle: WindowHandle) -> bool {
        (**self).bring_to_foreground(handle)
    }

    fn bring_to_top(&self, handle: WindowHandle) -> bool {
        (**self).bring_to_top(handle)
    }

    fn primary_screen_size(&self) -> Option<ScreenSize> {
        (**self).primary_screen_size()
    }
}
