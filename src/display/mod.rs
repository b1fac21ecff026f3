// Display module for console output of windows, layouts and apply reports
pub mod formatters;

// Re-export main functions
pub use formatters::{
    format_apply_summary, format_layout_line, format_window_line, print_apply_report,
    print_layouts, print_status, print_windows, StatusLevel,
};
