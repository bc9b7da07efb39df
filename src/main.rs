// buncotty: terminal Bunco scorekeeper

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use buncotty::config::{Cli, Config};
use buncotty::feedback::{platform_supports_feedback, Feedback, TerminalBell};
use buncotty::game::Scoreboard;
use buncotty::prefs::{FileStore, KeyValueStore, MemoryStore, Preferences};
use buncotty::ui::App;

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse());

    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    tracing::info!(?config, "starting");

    let store: Box<dyn KeyValueStore> = if config.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::in_dir(&config.data_dir).context("Failed to open preference store")?)
    };
    let prefs = Preferences::load(store).context("Failed to load preferences")?;

    let term = std::env::var("TERM").ok();
    let supported = platform_supports_feedback(term.as_deref(), config.no_bell);
    let feedback = if supported {
        Feedback::new(Box::new(TerminalBell::stdout()), true)
    } else {
        Feedback::disabled()
    };

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(
        Scoreboard::new(config.show_five_button),
        prefs,
        feedback,
        config.system_scheme,
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "ui loop failed");
        eprintln!("Error: {:?}", err);
    }

    // Dropping the app joins the preference writer
    drop(app);
    tracing::info!("exiting");
    Ok(())
}

/// Log to a file; the alternate screen owns stdout/stderr while running
fn init_tracing(config: &Config) -> Result<()> {
    let Some(log_file) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}
