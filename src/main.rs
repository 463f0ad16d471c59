// ABOUTME: Main entry point for rolo: dispatches subcommands or runs the reorder editor TUI

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    path::Path,
    process::ExitCode,
    time::Duration,
};
use tracing::{error, warn};

use rolo::app::terminal::run_restoring;
use rolo::app::{App, EditorExit, EditorState};
use rolo::cli::{self, Commands, CommandExit};
use rolo::components::LayoutComponent;
use rolo::config::Settings;
use rolo::session::{Direction, OrderStore, SessionPersistence};
use rolo::tmux::TmuxClient;

fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(exit) => return exit.into(),
    };

    match run(cli) {
        Ok(exit) => exit.into(),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> Result<CommandExit> {
    let store = SessionPersistence::from_config_dir(cli.config_dir.as_deref())?;
    setup_logging(store.storage_path());

    let settings = load_settings(&store);
    let source = TmuxClient::new();

    match cli.command {
        Some(Commands::Populate) => {
            cli::run_populate(&source, &store, &store.order_path(), &mut io::stdout())
        }
        Some(Commands::Next) => cli::run_navigate(
            &source,
            &store,
            settings.wrap_around,
            Direction::Next,
            &mut io::stderr(),
        ),
        Some(Commands::Prev) => cli::run_navigate(
            &source,
            &store,
            settings.wrap_around,
            Direction::Previous,
            &mut io::stderr(),
        ),
        None => run_editor(&source, &store, settings),
    }
}

/// Settings are read once here and passed down. A broken settings file falls
/// back to defaults with a warning.
fn load_settings(store: &SessionPersistence) -> Settings {
    store.load_settings().unwrap_or_else(|e| {
        warn!("Using default settings: {}", e);
        eprintln!("Warning: {e}; using default settings");
        Settings::default()
    })
}

fn run_editor(source: &TmuxClient, store: &SessionPersistence, settings: Settings) -> Result<CommandExit> {
    let sessions = store.load().context("Error loading sessions")?;
    let mut app = App::new(EditorState::new(sessions, settings.wrap_around), source);
    let mut layout = LayoutComponent::new();

    setup_panic_handler();
    run_tui(&mut app, &mut layout)?;

    match app.finish(store) {
        Ok(EditorExit::Commit) => {
            println!(
                "Saved {} session(s) to {}",
                app.state.sessions().len(),
                store.order_path().display()
            );
            Ok(CommandExit::Success)
        }
        Ok(EditorExit::Discard) => Ok(CommandExit::Success),
        Err(e) => {
            error!("Failed to save session order: {}", e);
            eprintln!("Error saving sessions: {e}");
            Ok(CommandExit::Failure)
        }
    }
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    enable_raw_mode().context("Terminal not compatible")?;

    run_restoring(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            Ok(())
        },
        || {
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            event_loop(&mut terminal, app, layout)
        },
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
        },
    )
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    layout: &mut LayoutComponent,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while !app.should_quit() {
        terminal.draw(|frame| {
            layout.render(frame, &app.state, &app.view);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key_event) = event::read()? {
                app.handle_key(key_event);
            }
        }

        app.tick();
    }

    Ok(())
}

fn setup_logging(config_dir: &Path) {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::prelude::*;

    let log_dir = config_dir.join("logs");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_file = log_dir.join(format!(
        "rolo-{}.log",
        chrono::Local::now().format("%Y%m%d")
    ));

    // Logging is best effort: rolo still works if the file can't be opened
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(Mutex::new(file))
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rolo=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
