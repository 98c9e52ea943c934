//! Terminal dashboard for besober.
//!
//! Shows the sobriety streak as a progress gauge above the list of personal
//! counters. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::BeSoberError;
use crate::tracker::Tracker;

/// Run the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to. Storage
/// errors are shown in the status bar instead.
pub fn run(tracker: &Tracker) -> Result<(), BeSoberError> {
    enable_raw_mode()
        .map_err(|e| BeSoberError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| BeSoberError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| BeSoberError::Terminal(format!("Failed to create terminal: {e}")))?;

    tracing::info!("dashboard started");
    let mut app = App::new(tracker);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::info!("dashboard closed");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), BeSoberError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| BeSoberError::Terminal(format!("Failed to draw: {e}")))?;

        match event::handle_events(app)? {
            Some(event::Action::Quit) => break,
            Some(event::Action::Refresh) => app.refresh(),
            None => {}
        }
    }

    Ok(())
}
