use crate::organizer_errors::{OrganizerError, OrganizerResult, RetryConfig};
use crate::window::info::ScreenSize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration for the organizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerConfig {
    pub mover: MoverConfig,
    pub retry: RetryConfig,
    pub arrangement: ArrangementConfig,
    /// Number of diagnostic events kept in memory.
    pub trail_capacity: usize,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            mover: MoverConfig::default(),
            retry: RetryConfig::default(),
            arrangement: ArrangementConfig::default(),
            trail_capacity: 256,
        }
    }
}

impl OrganizerConfig {
    /// Reads a JSON config file. A missing file gives the defaults.
    pub fn load(path: &Path) -> OrganizerResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| OrganizerError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| OrganizerError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Settle pauses off. For tests and dry runs.
    pub fn without_delays() -> Self {
        let mut config = Self::default();
        config.mover.restore_settle_ms = 0;
        config.mover.raise_settle_ms = 0;
        config.mover.verify_settle_ms = 0;
        config.retry.base_delay_ms = 0;
        config
    }
}

/// Timing and tolerance for the window mover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Maximum per-field pixel deviation still treated as in position.
    pub tolerance: i32,
    /// Pause after restoring a minimized window (ms)
    pub restore_settle_ms: u64,
    /// Pause after raising a window before repositioning it (ms)
    pub raise_settle_ms: u64,
    /// Pause before reading back the final rectangle (ms)
    pub verify_settle_ms: u64,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            tolerance: crate::POSITION_TOLERANCE,
            restore_settle_ms: 50,
            raise_settle_ms: 50,
            verify_settle_ms: 50,
        }
    }
}

impl MoverConfig {
    pub fn restore_settle(&self) -> Duration {
        Duration::from_millis(self.restore_settle_ms)
    }

    pub fn raise_settle(&self) -> Duration {
        Duration::from_millis(self.raise_settle_ms)
    }

    pub fn verify_settle(&self) -> Duration {
        Duration::from_millis(self.verify_settle_ms)
    }
}

/// Parameters of the computed default arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementConfig {
    pub window_width: i32,
    pub window_height: i32,
    /// Diagonal step for windows beyond a layout's last position
    pub cascade_offset: i32,
    pub fallback_screen: ScreenSize,
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            window_width: crate::DEFAULT_WINDOW_WIDTH,
            window_height: crate::DEFAULT_WINDOW_HEIGHT,
            cascade_offset: crate::CASCADE_OFFSET,
            fallback_screen: crate::FALLBACK_SCREEN,
        }
    }
}
