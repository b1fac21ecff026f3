// Diagnostic trail for window moves
//
// The mover reports every step it takes here. Nothing in the success/failure
// contract depends on what a sink does with the events.

use crate::window::info::{Rect, WindowHandle};
use log::{debug, warn};
use ringbuf::{traits::*, HeapRb};
use std::sync::Mutex;
use std::time::SystemTime;

#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    MoveStarted { title: String, target: Rect },
    HandleInvalid,
    CurrentRect(Rect),
    AlreadyPositioned,
    Restored { ok: bool },
    Strategy { name: &'static str, ok: bool },
    Verified {
        actual: Rect,
        dx: i32,
        dy: i32,
        ok: bool,
    },
    RectUnreadable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticEvent {
    pub at: SystemTime,
    pub handle: WindowHandle,
    pub kind: DiagnosticKind,
}

impl DiagnosticEvent {
    pub fn new(handle: WindowHandle, kind: DiagnosticKind) -> Self {
        Self {
            at: SystemTime::now(),
            handle,
            kind,
        }
    }
}

pub trait DiagnosticSink {
    fn record(&self, event: DiagnosticEvent);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, event: DiagnosticEvent) {
        (**self).record(event)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: DiagnosticEvent) {}
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, event: DiagnosticEvent) {
        let handle = event.handle;
        match event.kind {
            DiagnosticKind::MoveStarted { title, target } => {
                debug!("[{}] moving {:?} to {}", handle, title, target)
            }
            DiagnosticKind::HandleInvalid => warn!("[{}] window handle is no longer valid", handle),
            DiagnosticKind::CurrentRect(rect) => debug!("[{}] current position {}", handle, rect),
            DiagnosticKind::AlreadyPositioned => {
                debug!("[{}] already in position, nothing to do", handle)
            }
            DiagnosticKind::Restored { ok } => debug!("[{}] restored from minimized: {}", handle, ok),
            DiagnosticKind::Strategy { name, ok } => {
                debug!("[{}] strategy {} reported {}", handle, name, ok)
            }
            DiagnosticKind::Verified { actual, dx, dy, ok } => {
                if ok {
                    debug!("[{}] final position {} (dx={}, dy={})", handle, actual, dx, dy)
                } else {
                    warn!(
                        "[{}] final position {} is off target (dx={}, dy={})",
                        handle, actual, dx, dy
                    )
                }
            }
            DiagnosticKind::RectUnreadable => warn!("[{}] could not read window rectangle", handle),
        }
    }
}

/// Keeps the most recent events in a bounded ring for later inspection.
pub struct TrailSink {
    ring: Mutex<HeapRb<DiagnosticEvent>>,
}

impl TrailSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Mutex::new(HeapRb::new(capacity.max(1))),
        }
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        match self.ring.lock() {
            Ok(ring) => ring.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ring.lock().map(|ring| ring.occupied_len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut ring) = self.ring.lock() {
            ring.clear();
        }
    }
}

impl Default for TrailSink {
    fn default() -> Self {
        Self::new(256)
    }
}

impl DiagnosticSink for TrailSink {
    fn record(&self, event: DiagnosticEvent) {
        if let Ok(mut ring) = self.ring.lock() {
            ring.push_overwrite(event);
        }
    }
}

/// Sends each event to two sinks.
pub struct Tee<A, B>(pub A, pub B);

impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for Tee<A, B> {
    fn record(&self, event: DiagnosticEvent) {
        self.0.record(event.clone());
        self.1.record(event);
    }
}
