//! PatentWatch TUI — search drugs by name and see when their patents expire.
//!
//! Layout:
//! 1. Hero — title, search box, show-expired checkbox
//! 2. Body — one section per expiration year, a card per drug
//! 3. Status bar — match counts, key hints, last message

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use patentwatch_core::{TrackerConfig, TrackerPage};
use patentwatch_tui::app::AppState;
use patentwatch_tui::{input, logging, persistence, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Config and logging
    let config_path = TrackerConfig::default_path();
    let config = TrackerConfig::load(&config_path)?;
    logging::init(&config.log_filter, &logging::default_path())?;
    info!(config = %config_path.display(), "starting patentwatch-tui");

    // Catalog and page
    let catalog = config
        .load_catalog()
        .context("load drug catalog")?;
    info!(records = catalog.len(), "catalog ready");
    let page = TrackerPage::with_query(catalog, config.initial_query());
    let mut app = AppState::new(page, chrono::Local::now().naive_local());

    // Persisted state from the last session wins over config defaults
    let state_path = persistence::default_path();
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        warn!(error = %e, "failed to save state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Advance the clock (rederives only when the date rolls over)
        app.tick(chrono::Local::now().naive_local());

        // 2. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Poll for input events (250ms timeout; nothing animates)
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
