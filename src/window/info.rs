// Window information and related structures

use crate::window::room::Room;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque OS window handle. Stable for the lifetime of the window.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Window rectangle in device pixels, top-left origin.
///
/// Origins may be negative on multi-monitor desktops. Sizes are never negative.
/// Deserializing goes through [`Rect::new`], so sizes read from disk are
/// clamped like any other.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", from = "StoredRect")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

// On-disk shape of a rectangle; missing fields read as zero.
#[derive(Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct StoredRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl From<StoredRect> for Rect {
    fn from(stored: StoredRect) -> Self {
        Rect::new(stored.x, stored.y, stored.width, stored.height)
    }
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Builds a rectangle from edge coordinates, as Win32 reports them.
    pub fn from_bounds(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Same size, origin shifted by (dx, dy). Saturates at the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Absolute per-field deltas against `other`: (dx, dy, dwidth, dheight).
    /// Saturates at `i32::MAX` for rectangles at opposite ends of the range.
    pub fn deltas(&self, other: &Rect) -> (i32, i32, i32, i32) {
        let delta = |a: i32, b: i32| a.saturating_sub(b).saturating_abs();
        (
            delta(self.x, other.x),
            delta(self.y, other.y),
            delta(self.width, other.width),
            delta(self.height, other.height),
        )
    }

    /// All four fields within `tolerance` of `other`.
    pub fn matches(&self, other: &Rect, tolerance: i32) -> bool {
        let (dx, dy, dw, dh) = self.deltas(other);
        dx <= tolerance && dy <= tolerance && dw <= tolerance && dh <= tolerance
    }

    /// Origin within `tolerance` of `other`; size is ignored.
    pub fn origin_matches(&self, other: &Rect, tolerance: i32) -> bool {
        let (dx, dy, _, _) = self.deltas(other);
        dx <= tolerance && dy <= tolerance
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(x={}, y={}, w={}, h={})",
            self.x, self.y, self.width, self.height
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X={}, Y={}, W={}, H={}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Primary screen dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A display that reports a zero or negative dimension is unusable.
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A poker table window found by discovery.
///
/// This is a snapshot: the title and rectangle are what the OS reported at
/// enumeration time. Refreshing produces new values.
#[derive(Clone, Debug, PartialEq)]
pub struct ManagedWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub process_name: String,
    pub rect: Rect,
    pub room: Room,
}

impl ManagedWindow {
    pub fn new(
        handle: WindowHandle,
        title: impl Into<String>,
        process_name: impl Into<String>,
        rect: Rect,
        room: Room,
    ) -> Self {
        Self {
            handle,
            title: title.into(),
            process_name: process_name.into(),
            rect,
            room,
        }
    }

    pub fn width(&self) -> i32 {
        self.rect.width
    }

    pub fn height(&self) -> i32 {
        self.rect.height
    }
}
