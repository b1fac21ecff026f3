// Position calculator - maps a window count onto target rectangles
//
// Always returns exactly `window_count` rectangles. Fixtures assert exact
// pixels, so every division here is integer division truncating toward zero.

use crate::config::ArrangementConfig;
use crate::grid::layout::Layout;
use crate::window::info::{Rect, ScreenSize};

#[derive(Debug, Clone)]
pub struct PositionCalculator {
    screen: ScreenSize,
    config: ArrangementConfig,
}

impl PositionCalculator {
    /// `screen` is the primary display; `None` or an unusable size falls back
    /// to the configured default.
    pub fn new(screen: Option<ScreenSize>, config: ArrangementConfig) -> Self {
        let screen = screen
            .filter(ScreenSize::is_usable)
            .unwrap_or(config.fallback_screen);
        Self { screen, config }
    }

    pub fn with_screen(width: i32, height: i32) -> Self {
        Self::new(
            Some(ScreenSize::new(width, height)),
            ArrangementConfig::default(),
        )
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn calculate(&self, window_count: usize, layout: Option<&Layout>) -> Vec<Rect> {
        match layout {
            Some(layout) if !layout.is_empty() => self.from_layout(window_count, layout),
            _ => self.default_arrangement(window_count),
        }
    }

    fn from_layout(&self, window_count: usize, layout: &Layout) -> Vec<Rect> {
        let available = layout.positions.len();
        if window_count <= available {
            return layout.positions[..window_count].to_vec();
        }

        let mut positions = layout.positions.clone();
        if let Some(last) = layout.last_position().copied() {
            let step = self.config.cascade_offset;
            let extra = i32::try_from(window_count - available).unwrap_or(i32::MAX);
            positions.extend((1..=extra).map(|j| {
                let shift = step.saturating_mul(j);
                last.offset(shift, shift)
            }));
        }
        positions
    }

    /// Computed arrangement used when no saved layout applies.
    pub fn default_arrangement(&self, window_count: usize) -> Vec<Rect> {
        let ScreenSize {
            width: sw,
            height: sh,
        } = self.screen;
        let (w, h) = (self.config.window_width, self.config.window_height);
        let at = |x: i32, y: i32| Rect::new(x, y, w, h);

        // quadrant centres, expressed as top-left corners
        let left = sw / 4 - w / 2;
        let right = 3 * sw / 4 - w / 2;
        let top = sh / 4 - h / 2;
        let bottom = 3 * sh / 4 - h / 2;

        match window_count {
            0 => Vec::new(),
            1 => vec![at((sw - w) / 2, (sh - h) / 2)],
            2 => vec![at(left, (sh - h) / 2), at(right, (sh - h) / 2)],
            3 => vec![at(sw / 2 - w / 2, top), at(left, bottom), at(right, bottom)],
            4 => vec![at(left, top), at(right, top), at(left, bottom), at(right, bottom)],
            n => {
                let cols = ceil_sqrt(n);
                let rows = n.div_ceil(cols);
                let cell_w = sw / cols as i32;
                let cell_h = sh / rows as i32;
                (0..n)
                    .map(|i| {
                        let col = (i % cols) as i32;
                        let row = (i / cols) as i32;
                        at(
                            col * cell_w + (cell_w - w) / 2,
                            row * cell_h + (cell_h - h) / 2,
                        )
                    })
                    .collect()
            }
        }
    }
}

/// Smallest `c` with `c * c >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 0 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}
