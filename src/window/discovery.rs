// Poker table discovery over a single enumeration snapshot

use crate::window::info::ManagedWindow;
use crate::window::room::{classify, is_table, Room};
use crate::window::system::{RawWindow, WindowSystem};
use log::{debug, info, trace};

pub struct WindowDiscovery<S> {
    system: S,
}

impl<S: WindowSystem> WindowDiscovery<S> {
    pub fn new(system: S) -> Self {
        Self { system }
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Enumerates, classifies and filters windows.
    ///
    /// Windows of rooms that need forced positioning come first; enumeration
    /// order is kept inside each group.
    pub fn discover(&self) -> Vec<ManagedWindow> {
        let raw = self.system.enumerate_windows();
        let scanned = raw.len();
        let windows = order_for_positioning(raw.into_iter().filter_map(accept).collect());
        info!(
            "Discovery found {} table windows among {} visible windows",
            windows.len(),
            scanned
        );
        windows
    }
}

fn accept(raw: RawWindow) -> Option<ManagedWindow> {
    trace!(
        "Checking window {} title={:?} process={:?}",
        raw.handle,
        raw.title,
        raw.process_name
    );

    if raw.title.trim().is_empty() || raw.process_name.trim().is_empty() {
        return None;
    }

    let room = classify(&raw.process_name, &raw.title);
    if !is_table(room, &raw.title) {
        trace!("  -> not a table ({})", room);
        return None;
    }

    let Some(rect) = raw.rect else {
        debug!("  -> {} vanished before its rectangle was read", raw.handle);
        return None;
    };

    debug!("  -> table window {:?} ({}) at {}", raw.title, room, rect);
    Some(ManagedWindow::new(
        raw.handle,
        raw.title,
        raw.process_name,
        rect,
        room,
    ))
}

/// Stable partition: forced-positioning rooms first.
pub fn order_for_positioning(windows: Vec<ManagedWindow>) -> Vec<ManagedWindow> {
    let (mut first, rest): (Vec<_>, Vec<_>) = windows
        .into_iter()
        .partition(|window| window.room.needs_forced_positioning());
    first.extend(rest);
    first
}

/// Count of discovered windows per room, in first-seen order.
pub fn room_summary(windows: &[ManagedWindow]) -> Vec<(Room, usize)> {
    let mut summary: Vec<(Room, usize)> = Vec::new();
    for window in windows {
        match summary.iter_mut().find(|(room, _)| *room == window.room) {
            Some((_, count)) => *count += 1,
            None => summary.push((window.room, 1)),
        }
    }
    summary
}
