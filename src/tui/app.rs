//! Application state for the TUI.
//!
//! Storage failures never end the session: they are logged, shown in the
//! status bar, and the last good state stays on screen.

use crate::error::BeSoberError;
use crate::features::counters::Counter;
use crate::features::sobriety::SobrietyStatus;
use crate::tracker::Tracker;

/// Which text field is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Name for a new counter.
    Add,
    /// New name for an existing counter.
    Rename(i64),
}

/// Which destructive action awaits confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirm {
    /// Delete a counter.
    DeleteCounter { id: i64, name: String },
    /// Reset the sobriety streak.
    ResetStreak,
}

/// Interaction mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the list.
    Normal,
    /// Typing into the input line.
    Input { kind: InputKind, buffer: String },
    /// Waiting for y/n.
    Confirm(Confirm),
}

/// Application state.
pub struct App<'a> {
    /// Shared tracker.
    tracker: &'a Tracker,
    /// Counters shown in the list.
    pub counters: Vec<Counter>,
    /// Default streak shown in the header.
    pub streak: Option<SobrietyStatus>,
    /// Currently selected index.
    pub selected: usize,
    /// Current interaction mode.
    pub mode: Mode,
    /// Status message to display.
    pub status: Option<String>,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance and load current data.
    pub fn new(tracker: &'a Tracker) -> Self {
        let mut app = Self {
            tracker,
            counters: Vec::new(),
            streak: None,
            selected: 0,
            mode: Mode::Normal,
            status: None,
            pending_g: false,
        };
        app.refresh();
        if app.status.is_none() {
            app.status = Some("Press ? for help".to_string());
        }
        app
    }

    /// Log a failed operation and surface it in the status bar.
    fn soft<T>(&mut self, what: &str, result: Result<T, BeSoberError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "{what} failed");
                self.status = Some(format!("{what} failed: {e}"));
                None
            }
        }
    }

    /// Apply the daily rollover and reload counters and streak.
    pub fn refresh(&mut self) {
        let tracker = self.tracker;
        self.soft("Daily update", tracker.counters().rollover());

        if let Some(counters) = self.soft("Loading counters", tracker.counters().list()) {
            self.counters = counters;
        }

        let goal = tracker.config().streak.progress_goal_days;
        if let Some(streak) = self.soft("Loading streak", tracker.sobriety().status(goal)) {
            self.streak = streak;
        }

        if !self.counters.is_empty() && self.selected >= self.counters.len() {
            self.selected = self.counters.len() - 1;
        }
    }

    /// Get the currently selected counter.
    pub fn selected_counter(&self) -> Option<&Counter> {
        self.counters.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_g = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.counters.is_empty() && self.selected < self.counters.len() - 1 {
            self.selected += 1;
        }
        self.pending_g = false;
    }

    /// Jump to first item.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_g = false;
    }

    /// Jump to last item.
    pub fn select_last(&mut self) {
        if !self.counters.is_empty() {
            self.selected = self.counters.len() - 1;
        }
        self.pending_g = false;
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            self.select_first();
        } else {
            self.pending_g = true;
            self.status = Some("g-".to_string());
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        self.pending_g = false;
    }

    /// Start typing a new counter name.
    pub fn begin_add(&mut self) {
        self.mode = Mode::Input {
            kind: InputKind::Add,
            buffer: String::new(),
        };
    }

    /// Start editing the selected counter's name.
    pub fn begin_rename(&mut self) {
        if let Some(counter) = self.selected_counter() {
            self.mode = Mode::Input {
                kind: InputKind::Rename(counter.id),
                buffer: counter.name.clone(),
            };
        }
    }

    /// Ask to delete the selected counter.
    pub fn begin_delete(&mut self) {
        if let Some(counter) = self.selected_counter() {
            self.mode = Mode::Confirm(Confirm::DeleteCounter {
                id: counter.id,
                name: counter.name.clone(),
            });
        }
    }

    /// Ask to reset the sobriety streak.
    pub fn begin_reset_streak(&mut self) {
        self.mode = Mode::Confirm(Confirm::ResetStreak);
    }

    /// Append a character to the input line.
    pub fn push_char(&mut self, c: char) {
        if let Mode::Input { buffer, .. } = &mut self.mode {
            buffer.push(c);
        }
    }

    /// Remove the last character of the input line.
    pub fn pop_char(&mut self) {
        if let Mode::Input { buffer, .. } = &mut self.mode {
            buffer.pop();
        }
    }

    /// Leave input or confirm mode without acting.
    pub fn cancel_mode(&mut self) {
        self.mode = Mode::Normal;
        self.status = None;
    }

    /// Submit the input line. Blank input is ignored.
    pub fn submit_input(&mut self) {
        let Mode::Input { kind, buffer } = std::mem::replace(&mut self.mode, Mode::Normal) else {
            return;
        };

        let name = buffer.trim().to_string();
        if name.is_empty() {
            self.status = None;
            return;
        }

        let tracker = self.tracker;
        match kind {
            InputKind::Add => {
                if let Some(counter) = self.soft("Add counter", tracker.counters().create(&name)) {
                    self.status = Some(format!("Added: {}", counter.name));
                    self.refresh();
                    self.select_last();
                }
            }
            InputKind::Rename(id) => {
                if self
                    .soft("Rename", tracker.counters().rename(id, &name))
                    .is_some()
                {
                    self.status = Some(format!("Renamed to: {name}"));
                    self.refresh();
                }
            }
        }
    }

    /// Answer the pending confirmation.
    pub fn answer(&mut self, yes: bool) {
        let Mode::Confirm(confirm) = std::mem::replace(&mut self.mode, Mode::Normal) else {
            return;
        };

        if !yes {
            self.status = Some("Cancelled".to_string());
            return;
        }

        let tracker = self.tracker;
        match confirm {
            Confirm::DeleteCounter { id, name } => {
                if self.soft("Delete", tracker.counters().delete(id)).is_some() {
                    self.status = Some(format!("Deleted: {name}"));
                    self.refresh();
                }
            }
            Confirm::ResetStreak => {
                if let Some(Some(counter)) = self.soft("Reset streak", tracker.sobriety().reset()) {
                    self.status = Some(format!(
                        "Streak reset. Longest streak: {} days",
                        counter.longest_streak
                    ));
                    self.refresh();
                }
            }
        }
    }

    /// Restart the selected counter from today.
    pub fn reset_selected(&mut self) {
        let Some(counter) = self.selected_counter() else {
            return;
        };
        let (id, name) = (counter.id, counter.name.clone());

        let tracker = self.tracker;
        if self.soft("Reset counter", tracker.counters().reset(id)).is_some() {
            self.status = Some(format!("Reset: {name}"));
            self.refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::FixedClock;
    use crate::storage::Database;
    use chrono::NaiveDate;

    fn tracker() -> Tracker {
        let db = Database::open_in_memory().unwrap();
        let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2024, 8, 20).unwrap());
        let tracker = Tracker::with_clock(db, Box::new(clock), Config::default());
        tracker.bootstrap().unwrap();
        tracker
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn test_new_loads_seeded_counters() {
        let tracker = tracker();
        let app = App::new(&tracker);

        assert_eq!(app.counters.len(), 3);
        assert!(app.streak.is_some());
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_navigation_bounds() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_last();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 2);
        app.handle_g();
        app.handle_g();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_add_counter_via_input() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        app.begin_add();
        type_text(&mut app, "No Soda!");
        app.pop_char();
        app.submit_input();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.counters.len(), 4);
        assert_eq!(app.selected_counter().unwrap().name, "No Soda");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        app.begin_add();
        type_text(&mut app, "   ");
        app.submit_input();
        assert_eq!(app.counters.len(), 3);
    }

    #[test]
    fn test_rename_selected() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        app.begin_rename();
        if let Mode::Input { buffer, .. } = &mut app.mode {
            buffer.clear();
        }
        type_text(&mut app, "No Cigarettes");
        app.submit_input();

        assert_eq!(app.counters[0].name, "No Cigarettes");
    }

    #[test]
    fn test_delete_requires_yes() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        app.begin_delete();
        app.answer(false);
        assert_eq!(app.counters.len(), 3);

        app.begin_delete();
        app.answer(true);
        assert_eq!(app.counters.len(), 2);
        assert_eq!(tracker.counters().count().unwrap(), 2);
    }

    #[test]
    fn test_reset_selected_counter() {
        let tracker = tracker();
        let mut app = App::new(&tracker);
        assert!(app.counters[0].counter > 0);

        app.reset_selected();
        assert_eq!(app.counters[0].counter, 0);
    }

    #[test]
    fn test_reset_streak_confirmed() {
        let tracker = tracker();
        let mut app = App::new(&tracker);

        app.begin_reset_streak();
        app.answer(true);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.status.as_deref().unwrap().starts_with("Streak reset"));
        assert_eq!(app.streak.as_ref().unwrap().current_days, 0);
    }
}
