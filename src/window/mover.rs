// Window repositioning with strategy fallback and read-back verification
//
// The window manager applies position changes asynchronously and some clients
// render through overlay paths that ignore ordinary resize calls, so a call
// reporting success proves nothing. Every move ends by reading the rectangle
// back.

use crate::config::MoverConfig;
use crate::diagnostics::{DiagnosticEvent, DiagnosticKind, DiagnosticSink};
use crate::window::info::{ManagedWindow, Rect, WindowHandle};
use crate::window::system::{PositionFlags, WindowSystem, ZOrder};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Window was already within tolerance; nothing was changed.
    AlreadyPositioned,
    /// Moved and verified.
    Moved { strategy: &'static str },
    /// Handle invalid, or the rectangle could not be read.
    WindowClosed,
    /// Every positioning call reported failure.
    StrategiesFailed,
    /// A call reported success but the window is not where it should be.
    VerificationFailed {
        strategy: &'static str,
        actual: Rect,
        dx: i32,
        dy: i32,
    },
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MoveOutcome::AlreadyPositioned | MoveOutcome::Moved { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MoveReport {
    pub handle: WindowHandle,
    pub target: Rect,
    pub outcome: MoveOutcome,
    /// Strategy names in the order they were tried.
    pub strategies_tried: Vec<&'static str>,
}

impl MoveReport {
    pub fn success(&self) -> bool {
        self.outcome.is_success()
    }
}

pub struct WindowMover<S, D> {
    system: S,
    sink: D,
    config: MoverConfig,
}

impl<S: WindowSystem, D: DiagnosticSink> WindowMover<S, D> {
    pub fn new(system: S, sink: D, config: MoverConfig) -> Self {
        Self {
            system,
            sink,
            config,
        }
    }

    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Moves `window` to `target`. True only when the result was verified.
    pub fn move_window(&self, window: &ManagedWindow, target: Rect) -> bool {
        self.move_window_report(window, target).success()
    }

    pub fn move_window_report(&self, window: &ManagedWindow, target: Rect) -> MoveReport {
        let mut attempt = Attempt {
            mover: self,
            handle: window.handle,
            target,
            tried: Vec::new(),
        };
        let outcome = attempt.run(window);
        MoveReport {
            handle: window.handle,
            target,
            outcome,
            strategies_tried: attempt.tried,
        }
    }

    fn record(&self, handle: WindowHandle, kind: DiagnosticKind) {
        self.sink.record(DiagnosticEvent::new(handle, kind));
    }
}

fn settle(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

/// State of a single `move_window` call.
struct Attempt<'a, S, D> {
    mover: &'a WindowMover<S, D>,
    handle: WindowHandle,
    target: Rect,
    tried: Vec<&'static str>,
}

impl<S: WindowSystem, D: DiagnosticSink> Attempt<'_, S, D> {
    fn system(&self) -> &S {
        &self.mover.system
    }

    fn record(&self, kind: DiagnosticKind) {
        self.mover.record(self.handle, kind);
    }

    fn run(&mut self, window: &ManagedWindow) -> MoveOutcome {
        let tolerance = self.mover.config.tolerance;
        self.record(DiagnosticKind::MoveStarted {
            title: window.title.clone(),
            target: self.target,
        });

        if !self.system().is_valid(self.handle) {
            self.record(DiagnosticKind::HandleInvalid);
            return MoveOutcome::WindowClosed;
        }

        if let Some(current) = self.system().window_rect(self.handle) {
            self.record(DiagnosticKind::CurrentRect(current));
            if current.matches(&self.target, tolerance) {
                self.record(DiagnosticKind::AlreadyPositioned);
                return MoveOutcome::AlreadyPositioned;
            }
        }

        if self.system().is_minimized(self.handle) {
            let ok = self.system().restore(self.handle);
            self.record(DiagnosticKind::Restored { ok });
            settle(self.mover.config.restore_settle());
        }

        let strategy = if window.room.needs_forced_positioning() {
            self.forced_cascade()
        } else {
            self.standard_cascade()
        };
        let Some(strategy) = strategy else {
            return MoveOutcome::StrategiesFailed;
        };

        settle(self.mover.config.verify_settle());
        let Some(actual) = self.system().window_rect(self.handle) else {
            self.record(DiagnosticKind::RectUnreadable);
            return MoveOutcome::WindowClosed;
        };

        let (dx, dy, _, _) = actual.deltas(&self.target);
        let ok = actual.origin_matches(&self.target, tolerance);
        self.record(DiagnosticKind::Verified { actual, dx, dy, ok });
        if ok {
            MoveOutcome::Moved { strategy }
        } else {
            MoveOutcome::VerificationFailed {
                strategy,
                actual,
                dx,
                dy,
            }
        }
    }

    fn attempt(&mut self, name: &'static str, ok: bool) -> bool {
        self.tried.push(name);
        self.record(DiagnosticKind::Strategy { name, ok });
        ok
    }

    /// Plain position-and-resize, then the direct move primitive.
    fn standard_cascade(&mut self) -> Option<&'static str> {
        let (handle, target) = (self.handle, self.target);

        let ok = self.system().set_position(
            handle,
            target,
            ZOrder::NoTopMost,
            PositionFlags::show_no_activate() | PositionFlags::ASYNC_WINDOW_POS,
        );
        if self.attempt("set_position", ok) {
            return Some("set_position");
        }

        let ok = self.system().move_resize(handle, target);
        if self.attempt("move_resize", ok) {
            return Some("move_resize");
        }
        None
    }

    /// For clients that ignore ordinary positioning.
    fn forced_cascade(&mut self) -> Option<&'static str> {
        let (handle, target) = (self.handle, self.target);

        let ok = self.system().set_position(
            handle,
            target,
            ZOrder::TopMost,
            PositionFlags::show_no_activate()
                | PositionFlags::ASYNC_WINDOW_POS
                | PositionFlags::NO_OWNER_ZORDER,
        );
        if self.attempt("topmost_position", ok) {
            return Some("topmost_position");
        }

        // raise results are advisory; the position call below decides
        self.system().bring_to_foreground(handle);
        self.system().bring_to_top(handle);
        settle(self.mover.config.raise_settle());
        let ok = self.system().set_position(
            handle,
            target,
            ZOrder::Top,
            PositionFlags::show_no_activate(),
        );
        if self.attempt("raise_then_position", ok) {
            return Some("raise_then_position");
        }

        let ok = self.system().move_resize(handle, target);
        if self.attempt("move_resize", ok) {
            settle(self.mover.config.raise_settle());
            let pinned = self.system().set_position(
                handle,
                target,
                ZOrder::TopMost,
                PositionFlags::keep_geometry(),
            );
            self.record(DiagnosticKind::Strategy {
                name: "reassert_topmost",
                ok: pinned,
            });
            return Some("move_resize");
        }
        None
    }
}
