//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::BeSoberError;
use crate::tui::app::{App, Mode};
use crate::tui::ui::HELP;

/// Action for the main loop after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Reload counters and streak.
    Refresh,
}

/// Poll for one terminal event and apply it to `app`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, BeSoberError> {
    if !event::poll(Duration::from_millis(250))
        .map_err(|e| BeSoberError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| BeSoberError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        Event::Resize(..) => Ok(Some(Action::Refresh)),
        _ => Ok(None),
    }
}

/// Apply a key press to `app`.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.mode {
        Mode::Input { .. } => {
            match key.code {
                KeyCode::Enter => app.submit_input(),
                KeyCode::Esc => app.cancel_mode(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
            None
        }
        Mode::Confirm(_) => {
            match key.code {
                KeyCode::Char('y' | 'Y') => app.answer(true),
                _ => app.answer(false),
            }
            None
        }
        Mode::Normal => handle_normal_key(app, key.code),
    }
}

fn handle_normal_key(app: &mut App<'_>, code: KeyCode) -> Option<Action> {
    if code != KeyCode::Char('g') {
        app.cancel_pending();
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') => app.handle_g(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Home => app.select_first(),

        // Actions
        KeyCode::Char('a') => app.begin_add(),
        KeyCode::Char('e') => app.begin_rename(),
        KeyCode::Char('r') => app.reset_selected(),
        KeyCode::Char('d') => app.begin_delete(),
        KeyCode::Char('R') => app.begin_reset_streak(),
        KeyCode::F(5) => return Some(Action::Refresh),

        KeyCode::Char('?') => app.status = Some(HELP.to_string()),
        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::FixedClock;
    use crate::storage::Database;
    use crate::tracker::Tracker;
    use chrono::NaiveDate;

    fn tracker() -> Tracker {
        let db = Database::open_in_memory().unwrap();
        let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2024, 8, 20).unwrap());
        let tracker = Tracker::with_clock(db, Box::new(clock), Config::default());
        tracker.bootstrap().unwrap();
        tracker
    }

    fn press(app: &mut App<'_>, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_typing_q_in_input_does_not_quit() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        press(&mut app, KeyCode::Char('a'));
        for c in "No Quitting".chars() {
            assert_eq!(press(&mut app, KeyCode::Char(c)), None);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.counters.iter().any(|c| c.name == "No Quitting"));
    }

    #[test]
    fn test_delete_confirm_flow() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.mode, Mode::Confirm(_)));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.counters.len(), 3);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.counters.len(), 2);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_escape_cancels_input() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.counters[0].name, "No Smoking");
    }
}
