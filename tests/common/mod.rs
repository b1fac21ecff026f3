//! In-memory window system used by the integration tests
#![allow(dead_code)]

use poker_grid::{PositionFlags, RawWindow, Rect, ScreenSize, WindowHandle, WindowSystem, ZOrder};
use std::sync::{Arc, Mutex, MutexGuard};

pub const STARS_TITLE: &str = "Table 'Halley' - $0.01/$0.02 USD - No Limit Hold'em";
pub const POKER888_TITLE: &str = "NLH $0.05/$0.10 - Snap";
pub const GG_TITLE: &str = "Mesa 12 - $0.02/$0.05 Hold'em";

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetPosition {
        handle: WindowHandle,
        rect: Rect,
        z_order: ZOrder,
        flags: PositionFlags,
    },
    MoveResize {
        handle: WindowHandle,
        rect: Rect,
    },
    Restore(WindowHandle),
    Foreground(WindowHandle),
    Top(WindowHandle),
}

impl Call {
    pub fn handle(&self) -> WindowHandle {
        match self {
            Call::SetPosition { handle, .. } | Call::MoveResize { handle, .. } => *handle,
            Call::Restore(handle) | Call::Foreground(handle) | Call::Top(handle) => *handle,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FakeWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub process_name: String,
    pub rect: Rect,
    pub valid: bool,
    pub minimized: bool,
    /// Enumeration reports no rectangle and `window_rect` returns `None`.
    pub rect_unreadable: bool,
    pub fail_set_position: bool,
    /// Only `set_position` calls asking for `ZOrder::TopMost` fail.
    pub fail_topmost_position: bool,
    pub fail_move_resize: bool,
    /// Position calls succeed but the window stays where it is.
    pub ignore_moves: bool,
    /// Like `ignore_moves`, for this many geometry calls only.
    pub ignore_next_moves: u32,
}

impl FakeWindow {
    pub fn new(handle: u64, title: &str, process_name: &str, rect: Rect) -> Self {
        Self {
            handle: WindowHandle(handle),
            title: title.to_string(),
            process_name: process_name.to_string(),
            rect,
            valid: true,
            minimized: false,
            rect_unreadable: false,
            fail_set_position: false,
            fail_topmost_position: false,
            fail_move_resize: false,
            ignore_moves: false,
            ignore_next_moves: 0,
        }
    }

    pub fn stars(handle: u64, rect: Rect) -> Self {
        Self::new(handle, STARS_TITLE, "PokerStars", rect)
    }

    pub fn poker888(handle: u64, rect: Rect) -> Self {
        Self::new(handle, POKER888_TITLE, "poker", rect)
    }

    pub fn gg(handle: u64, rect: Rect) -> Self {
        Self::new(handle, GG_TITLE, "GGnet", rect)
    }

    fn apply(&mut self, rect: Rect) {
        if self.ignore_moves {
            return;
        }
        if self.ignore_next_moves > 0 {
            self.ignore_next_moves -= 1;
            return;
        }
        self.rect = rect;
    }
}

#[derive(Debug, Default)]
struct State {
    windows: Vec<FakeWindow>,
    calls: Vec<Call>,
    screen: Option<ScreenSize>,
}

/// Cloning shares the same windows and call log.
#[derive(Clone, Debug, Default)]
pub struct FakeWindowSystem {
    state: Arc<Mutex<State>>,
}

impl FakeWindowSystem {
    pub fn new(windows: Vec<FakeWindow>) -> Self {
        let system = Self::default();
        system.lock().windows = windows;
        system.lock().screen = Some(ScreenSize::new(1920, 1080));
        system
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn set_screen(&self, screen: Option<ScreenSize>) {
        self.lock().screen = screen;
    }

    pub fn push(&self, window: FakeWindow) {
        self.lock().windows.push(window);
    }

    pub fn update(&self, handle: u64, change: impl FnOnce(&mut FakeWindow)) {
        let mut state = self.lock();
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.handle == WindowHandle(handle))
            .expect("unknown fake window");
        change(window);
    }

    pub fn rect_of(&self, handle: u64) -> Rect {
        self.lock()
            .windows
            .iter()
            .find(|w| w.handle == WindowHandle(handle))
            .map(|w| w.rect)
            .expect("unknown fake window")
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn calls_for(&self, handle: u64) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.handle() == WindowHandle(handle))
            .collect()
    }

    /// Every recorded call changes geometry, z-order or show state.
    pub fn mutation_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn with_window<R>(
        &self,
        handle: WindowHandle,
        call: Option<Call>,
        f: impl FnOnce(&mut FakeWindow) -> R,
    ) -> Option<R> {
        let mut state = self.lock();
        if let Some(call) = call {
            state.calls.push(call);
        }
        state
            .windows
            .iter_mut()
            .find(|w| w.handle == handle && w.valid)
            .map(f)
    }
}

impl WindowSystem for FakeWindowSystem {
    fn enumerate_windows(&self) -> Vec<RawWindow> {
        self.lock()
            .windows
            .iter()
            .filter(|w| w.valid)
            .map(|w| {
                RawWindow::new(
                    w.handle,
                    w.title.clone(),
                    w.process_name.clone(),
                    (!w.rect_unreadable).then_some(w.rect),
                )
            })
            .collect()
    }

    fn is_valid(&self, handle: WindowHandle) -> bool {
        self.with_window(handle, None, |_| true).unwrap_or(false)
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<Rect> {
        self.with_window(handle, None, |w| (!w.rect_unreadable).then_some(w.rect))
            .flatten()
    }

    fn set_position(
        &self,
        handle: WindowHandle,
        rect: Rect,
        z_order: ZOrder,
        flags: PositionFlags,
    ) -> bool {
        let call = Call::SetPosition {
            handle,
            rect,
            z_order,
            flags,
        };
        self.with_window(handle, Some(call), |w| {
            if w.fail_set_position || (w.fail_topmost_position && z_order == ZOrder::TopMost) {
                return false;
            }
            if !flags.contains(PositionFlags::NO_MOVE) {
                w.apply(rect);
            }
            true
        })
        .unwrap_or(false)
    }

    fn move_resize(&self, handle: WindowHandle, rect: Rect) -> bool {
        self.with_window(handle, Some(Call::MoveResize { handle, rect }), |w| {
            if w.fail_move_resize {
                return false;
            }
            w.apply(rect);
            true
        })
        .unwrap_or(false)
    }

    fn is_minimized(&self, handle: WindowHandle) -> bool {
        self.with_window(handle, None, |w| w.minimized)
            .unwrap_or(false)
    }

    fn restore(&self, handle: WindowHandle) -> bool {
        self.with_window(handle, Some(Call::Restore(handle)), |w| {
            w.minimized = false;
            true
        })
        .unwrap_or(false)
    }

    fn bring_to_foreground(&self, handle: WindowHandle) -> bool {
        self.with_window(handle, Some(Call::Foreground(handle)), |_| true)
            .unwrap_or(false)
    }

    fn bring_to_top(&self, handle: WindowHandle) -> bool {
        self.with_window(handle, Some(Call::Top(handle)), |_| true)
            .unwrap_or(false)
    }

    fn primary_screen_size(&self) -> Option<ScreenSize> {
        self.lock().screen
    }
}
