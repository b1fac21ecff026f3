// Table organizer - discovery, layout calculation and batch moves
//
// Everything runs on the calling thread, one window at a time. A failing
// window never aborts the batch; it is reported in the ApplyReport.

use crate::config::OrganizerConfig;
use crate::diagnostics::DiagnosticSink;
use crate::grid::{Layout, LayoutStore, PositionCalculator};
use crate::organizer_errors::{
    retry_until, validate_layout_name, OrganizerError, OrganizerResult,
};
use crate::window::{ManagedWindow, MoveReport, Rect, ScreenSize, WindowDiscovery, WindowMover, WindowSystem};
use log::{info, warn};

/// Aggregate result of applying positions to a batch of windows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplyStatus {
    /// Every window reached its position (also used for an empty batch).
    All,
    Partial,
    None,
}

/// Result for one window of a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowResult {
    pub window: ManagedWindow,
    pub target: Rect,
    pub attempts: u32,
    /// Report of the last attempt.
    pub last: MoveReport,
}

impl WindowResult {
    pub fn success(&self) -> bool {
        self.last.success()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApplyReport {
    /// Layout name, or `None` for the computed default arrangement.
    pub layout: Option<String>,
    pub results: Vec<WindowResult>,
}

impl ApplyReport {
    pub fn moved(&self) -> impl Iterator<Item = &WindowResult> {
        self.results.iter().filter(|r| r.success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &WindowResult> {
        self.results.iter().filter(|r| !r.success())
    }

    pub fn moved_count(&self) -> usize {
        self.moved().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn status(&self) -> ApplyStatus {
        match (self.moved_count(), self.failed_count()) {
            (_, 0) => ApplyStatus::All,
            (0, _) => ApplyStatus::None,
            _ => ApplyStatus::Partial,
        }
    }
}

pub struct TableOrganizer<S, L, D> {
    discovery: WindowDiscovery<S>,
    mover: WindowMover<S, D>,
    store: L,
    config: OrganizerConfig,
}

impl<S, L, D> TableOrganizer<S, L, D>
where
    S: WindowSystem + Clone,
    L: LayoutStore,
    D: DiagnosticSink,
{
    pub fn new(system: S, store: L, sink: D, config: OrganizerConfig) -> Self {
        Self {
            discovery: WindowDiscovery::new(system.clone()),
            mover: WindowMover::new(system, sink, config.mover.clone()),
            store,
            config,
        }
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    pub fn store(&self) -> &L {
        &self.store
    }

    pub fn sink(&self) -> &D {
        self.mover.sink()
    }

    fn system(&self) -> &S {
        self.discovery.system()
    }

    /// Primary screen size, or the configured fallback.
    pub fn screen_size(&self) -> ScreenSize {
        self.calculator().screen()
    }

    pub fn calculator(&self) -> PositionCalculator {
        PositionCalculator::new(
            self.system().primary_screen_size(),
            self.config.arrangement.clone(),
        )
    }

    /// Fresh discovery pass.
    pub fn refresh(&self) -> Vec<ManagedWindow> {
        self.discovery.discover()
    }

    pub fn layouts(&self) -> OrganizerResult<Vec<Layout>> {
        Ok(self.store.list_layouts()?)
    }

    pub fn layout(&self, name: &str) -> OrganizerResult<Option<Layout>> {
        Ok(self.store.get_layout(name)?)
    }

    /// Applies the named layout, or the computed default when `name` is None.
    ///
    /// A name that is not in the store is an error and no window is touched.
    pub fn apply_layout(&self, name: Option<&str>) -> OrganizerResult<ApplyReport> {
        let layout = match name {
            Some(name) => Some(
                self.store
                    .get_layout(name)?
                    .ok_or_else(|| OrganizerError::LayoutNotFound(name.to_string()))?,
            ),
            None => None,
        };

        let windows = self.refresh();
        let positions = self.calculator().calculate(windows.len(), layout.as_ref());
        info!(
            "Applying {} to {} windows",
            layout
                .as_ref()
                .map(|l| format!("layout '{}' ({} positions)", l.name, l.len()))
                .unwrap_or_else(|| "default arrangement".to_string()),
            windows.len()
        );

        let mut report = self.apply_positions(&windows, &positions);
        report.layout = layout.map(|l| l.name);
        match report.status() {
            ApplyStatus::All => info!("✅ Moved all {} windows", report.moved_count()),
            ApplyStatus::Partial => warn!(
                "⚠️ Layout partially applied: {} moved, {} failed",
                report.moved_count(),
                report.failed_count()
            ),
            ApplyStatus::None => warn!("❌ No window could be moved"),
        }
        Ok(report)
    }

    /// Moves each window to the position with the same index, retrying each
    /// window as configured. Extra windows or positions are ignored.
    pub fn apply_positions(&self, windows: &[ManagedWindow], positions: &[Rect]) -> ApplyReport {
        let results = windows
            .iter()
            .zip(positions)
            .map(|(window, target)| self.move_with_retry(window, *target))
            .collect();
        ApplyReport {
            layout: None,
            results,
        }
    }

    fn move_with_retry(&self, window: &ManagedWindow, target: Rect) -> WindowResult {
        let context = format!("{:?} ({})", window.title, window.room);
        let retried = retry_until(
            |_| self.mover.move_window_report(window, target),
            MoveReport::success,
            &self.config.retry,
            &context,
        );

        if !retried.outcome.succeeded {
            warn!(
                "Giving up on {} after {} attempts: {:?}",
                context, retried.outcome.attempts, retried.value.outcome
            );
        }
        WindowResult {
            window: window.clone(),
            target,
            attempts: retried.outcome.attempts,
            last: retried.value,
        }
    }

    /// Builds a layout from the windows' current rectangles, re-read from the
    /// window system. Windows whose rectangle cannot be read are left out.
    pub fn capture_layout(&self, name: &str) -> OrganizerResult<Layout> {
        let name = validate_layout_name(name)?;
        let positions = self
            .refresh()
            .iter()
            .filter_map(|window| {
                let rect = self.system().window_rect(window.handle);
                if rect.is_none() {
                    warn!("Could not read position of {:?}, skipping", window.title);
                }
                rect
            })
            .collect();
        Ok(Layout::with_positions(name, positions))
    }

    /// Captures the current arrangement and stores it under `name`.
    pub fn save_current_layout(&self, name: &str) -> OrganizerResult<Layout> {
        let layout = self.capture_layout(name)?;
        self.store.upsert_layout(layout.clone())?;
        info!(
            "Saved layout '{}' with {} positions",
            layout.name,
            layout.len()
        );
        Ok(layout)
    }

    pub fn delete_layout(&self, name: &str) -> OrganizerResult<bool> {
        Ok(self.store.delete_layout(name)?)
    }
}
