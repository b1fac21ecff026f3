// Command line front end for arranging poker table windows
#![cfg_attr(not(windows), allow(dead_code, unused_imports))]

use poker_grid::config::default_data_dir;
use poker_grid::display::{
    format_layout_line, print_apply_report, print_layouts, print_status, print_windows,
    StatusLevel,
};
use poker_grid::diagnostics::Tee;
use poker_grid::{
    ApplyStatus, JsonLayoutStore, LogSink, OrganizerConfig, TableOrganizer, TrailSink,
    UserSettings, WindowSystem,
};
use std::path::PathBuf;

const BANNER: &str = r#"
  ┌─┐┌─┐┬┌─┌─┐┬─┐   ┌─┐┬─┐┬┌┬┐
  ├─┘│ │├┴┐├┤ ├┬┘───│ ┬├┬┘│ ││
  ┴  └─┘┴ ┴└─┘┴└─   └─┘┴└─┴─┴┘
"#;

fn show_help() {
    println!("{}", BANNER);
    println!("Usage: poker_grid <command> [args]");
    println!();
    println!("Commands:");
    println!("  list              Show the poker table windows that were found");
    println!("  layouts           List saved layouts");
    println!("  apply [name]      Apply a saved layout, or the default grid without a name");
    println!("  save <name>       Save the current table positions as a layout");
    println!("  delete <name>     Delete a saved layout");
    println!("  language [code]   Show or set the preferred language (e.g. en-US, pt-BR)");
    println!("  help              Show this help message");
    println!();
    println!("Files live in {}", default_data_dir().display());
    println!("Set RUST_LOG=debug to see every positioning attempt.");
}

fn data_path(file: &str) -> PathBuf {
    default_data_dir().join(file)
}

fn run<S: WindowSystem + Clone>(system: S, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = OrganizerConfig::load(&data_path("config.json"))?;
    let store = JsonLayoutStore::open(data_path("layouts.json"))?;
    let trail = TrailSink::new(config.trail_capacity);
    let organizer = TableOrganizer::new(system, store, Tee(LogSink, &trail), config);

    match args.first().map(|s| s.as_str()) {
        Some("list") => {
            let screen = organizer.screen_size();
            print_status(
                StatusLevel::Info,
                &format!("Primary screen {}x{}", screen.width, screen.height),
            )?;
            print_windows(&organizer.refresh())?;
        }
        Some("layouts") => print_layouts(&organizer.layouts()?)?,
        Some("apply") => {
            let report = organizer.apply_layout(args.get(1).map(|s| s.as_str()))?;
            print_apply_report(&report)?;
            if report.status() != ApplyStatus::All {
                for failed in report.failed() {
                    println!("  Steps for {}:", failed.window.handle);
                    for event in trail
                        .snapshot()
                        .iter()
                        .filter(|e| e.handle == failed.window.handle)
                    {
                        println!("    {:?}", event.kind);
                    }
                }
            }
        }
        Some("save") => {
            let Some(name) = args.get(1) else {
                print_status(StatusLevel::Warning, "Enter a layout name: poker_grid save <name>")?;
                return Ok(());
            };
            let layout = organizer.save_current_layout(name)?;
            print_status(
                StatusLevel::Ok,
                &format!("Saved {}", format_layout_line(&layout)),
            )?;
        }
        Some("delete") => {
            let Some(name) = args.get(1) else {
                print_status(StatusLevel::Warning, "Select a layout: poker_grid delete <name>")?;
                return Ok(());
            };
            if organizer.delete_layout(name)? {
                print_status(StatusLevel::Ok, &format!("Deleted layout '{}'", name))?;
            } else {
                print_status(StatusLevel::Warning, &format!("Layout '{}' not found", name))?;
            }
        }
        Some(unknown) => {
            print_status(StatusLevel::Error, &format!("Unknown command: {}", unknown))?;
            println!("Run 'poker_grid help' for usage information");
        }
        None => show_help(),
    }

    Ok(())
}

fn language(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let path = UserSettings::default_path();
    let mut settings = UserSettings::load(&path);
    match args.get(1) {
        Some(code) => {
            settings.language = code.clone();
            settings.save(&path)?;
            print_status(StatusLevel::Ok, &format!("Language set to {}", code))?;
        }
        None => println!("{}", settings.language),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(|s| s.as_str()) {
        Some("help") | Some("-h") | Some("--help") | None => {
            show_help();
            Ok(())
        }
        Some("language") => language(&args),
        _ => run_platform(&args),
    }
}

#[cfg(windows)]
fn run_platform(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    run(poker_grid::window::Win32WindowSystem::new(), args)
}

#[cfg(not(windows))]
fn run_platform(_args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    print_status(
        StatusLevel::Error,
        "Window management needs the Win32 window system; this build has none.",
    )?;
    Err("unsupported platform".into())
}
