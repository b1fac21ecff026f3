// Display formatting utilities

use crate::grid::Layout;
use crate::organizer::{ApplyReport, ApplyStatus, WindowResult};
use crate::window::{ManagedWindow, MoveOutcome};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

const TITLE_WIDTH: usize = 48;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Ok,
    Warning,
    Error,
    Info,
}

impl StatusLevel {
    fn color(self) -> Color {
        match self {
            StatusLevel::Ok => Color::Green,
            StatusLevel::Warning => Color::Yellow,
            StatusLevel::Error => Color::Red,
            StatusLevel::Info => Color::Cyan,
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

/// One row of the window list: room, title, rectangle.
pub fn format_window_line(index: usize, window: &ManagedWindow) -> String {
    format!(
        "{:>2}. [{:<10}] {:<width$} {}",
        index + 1,
        window.room.display_name(),
        truncate(&window.title, TITLE_WIDTH),
        window.rect,
        width = TITLE_WIDTH
    )
}

pub fn format_layout_line(layout: &Layout) -> String {
    let noun = if layout.len() == 1 { "position" } else { "positions" };
    format!("{} ({} {})", layout.name, layout.len(), noun)
}

fn format_outcome(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::AlreadyPositioned => "already in position".to_string(),
        MoveOutcome::Moved { strategy } => format!("moved ({})", strategy),
        MoveOutcome::WindowClosed => "window closed".to_string(),
        MoveOutcome::StrategiesFailed => "all positioning calls failed".to_string(),
        MoveOutcome::VerificationFailed { dx, dy, .. } => {
            format!("ended off target (dx={}, dy={})", dx, dy)
        }
    }
}

fn format_result_line(result: &WindowResult) -> String {
    format!(
        "{} -> {}: {} after {} attempt{}",
        truncate(&result.window.title, TITLE_WIDTH),
        result.target,
        format_outcome(&result.last.outcome),
        result.attempts,
        if result.attempts == 1 { "" } else { "s" }
    )
}

/// Final status line of an apply, e.g. "Layout 'Six' applied (4/4 windows)".
pub fn format_apply_summary(report: &ApplyReport) -> String {
    let what = match &report.layout {
        Some(name) => format!("Layout '{}'", name),
        None => "Default arrangement".to_string(),
    };
    let total = report.results.len();
    match report.status() {
        ApplyStatus::All => format!("{} applied ({}/{} windows)", what, total, total),
        ApplyStatus::Partial => format!(
            "{} partially applied ({}/{} windows)",
            what,
            report.moved_count(),
            total
        ),
        ApplyStatus::None => format!("{} could not be applied (0/{} windows)", what, total),
    }
}

pub fn print_status(level: StatusLevel, message: &str) -> io::Result<()> {
    let mut out = io::stdout();
    queue!(
        out,
        SetForegroundColor(level.color()),
        Print(message),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

pub fn print_windows(windows: &[ManagedWindow]) -> io::Result<()> {
    print_status(
        StatusLevel::Info,
        &format!("{} table windows found", windows.len()),
    )?;
    for (index, window) in windows.iter().enumerate() {
        println!("{}", format_window_line(index, window));
    }
    Ok(())
}

pub fn print_layouts(layouts: &[Layout]) -> io::Result<()> {
    if layouts.is_empty() {
        return print_status(StatusLevel::Info, "No saved layouts");
    }
    for layout in layouts {
        println!("  {}", format_layout_line(layout));
    }
    Ok(())
}

pub fn print_apply_report(report: &ApplyReport) -> io::Result<()> {
    for result in &report.results {
        let level = if result.success() {
            StatusLevel::Ok
        } else {
            StatusLevel::Error
        };
        print_status(level, &format_result_line(result))?;
    }
    let level = match report.status() {
        ApplyStatus::All => StatusLevel::Ok,
        ApplyStatus::Partial => StatusLevel::Warning,
        ApplyStatus::None => StatusLevel::Error,
    };
    print_status(level, &format_apply_summary(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{MoveReport, Rect, Room, WindowHandle};

    fn result(handle: u64, outcome: MoveOutcome) -> WindowResult {
        let target = Rect::new(0, 0, 560, 436);
        WindowResult {
            window: ManagedWindow::new(
                WindowHandle(handle),
                "NLH $0.05/$0.10",
                "888poker.exe",
                target,
                Room::Poker888,
            ),
            target,
            attempts: 1,
            last: MoveReport {
                handle: WindowHandle(handle),
                target,
                outcome,
                strategies_tried: Vec::new(),
            },
        }
    }

    #[test]
    fn test_window_line() {
        let window = ManagedWindow::new(
            WindowHandle(1),
            "Table 'Halley' - $0.01/$0.02",
            "pokerstars.exe",
            Rect::new(10, 20, 560, 436),
            Room::PokerStars,
        );
        let line = format_window_line(0, &window);
        assert!(line.starts_with(" 1. [PokerStars]"));
        assert!(line.ends_with("X=10, Y=20, W=560, H=436"));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let long = "x".repeat(100);
        assert_eq!(truncate(&long, 10), "xxxxxxx...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_layout_line() {
        let layout = Layout::with_positions("Solo", vec![Rect::default()]);
        assert_eq!(format_layout_line(&layout), "Solo (1 position)");
    }

    #[test]
    fn test_apply_summary() {
        let mut report = ApplyReport {
            layout: Some("Six".to_string()),
            results: vec![
                result(1, MoveOutcome::Moved { strategy: "set_position" }),
                result(2, MoveOutcome::WindowClosed),
            ],
        };
        assert_eq!(
            format_apply_summary(&report),
            "Layout 'Six' partially applied (1/2 windows)"
        );
        report.layout = None;
        report.results.truncate(1);
        assert_eq!(
            format_apply_summary(&report),
            "Default arrangement applied (1/1 windows)"
        );
    }
}
