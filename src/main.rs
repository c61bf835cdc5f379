//! PomoCLI - a terminal Pomodoro timer
//!
//! Runs the full-screen interface: pick a task, work through a 25 minute
//! countdown, get alerted, take a 5 minute break. Every session start and
//! end is appended to a plain-text log in the home directory.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use pomocli::ui::App;
use pomocli::Paths;

/// Terminal Pomodoro timer
#[derive(Parser)]
#[command(name = "pomocli", version, about)]
struct Cli {}

fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments (help/version only)
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Output goes to stderr so the alternate-screen interface stays clean;
/// set RUST_LOG to raise the filter above the default "warn".
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Sets up the terminal, runs the event loop, and restores the terminal.
///
/// Restoration runs even when the loop errors, so a crash never leaves the
/// shell in raw mode.
fn run() -> Result<()> {
    let paths = Paths::resolve()?;
    let mut app = App::new(&paths);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = app.run(&mut terminal);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    result
}
