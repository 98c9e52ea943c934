//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, Confirm, InputKind, Mode};

/// Key bindings shown in the status bar.
pub const HELP: &str = "j/k:nav | a:add | e:rename | r:reset | d:delete | R:reset streak | q:quit";

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Streak
            Constraint::Min(0),    // Counters
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_streak(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the default counter as a progress gauge.
fn render_streak(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let Some(streak) = &app.streak else {
        let empty = Paragraph::new(" No sobriety counter yet ")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} since {} ", streak.name, streak.start_day))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(streak.progress)
        .label(format!(
            "{} / {} days",
            streak.current_days, streak.goal_days
        ));
    frame.render_widget(gauge, rows[0]);

    let mut spans = vec![Span::styled(
        format!("Longest streak: {} days", streak.longest_streak),
        Style::default().fg(Color::Yellow),
    )];
    if streak.is_personal_best() {
        spans.push(Span::styled(
            "  personal best!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
}

/// Render the counter list.
fn render_list(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .counters
        .iter()
        .enumerate()
        .map(|(i, counter)| {
            let is_selected = i == app.selected;

            let spans = vec![
                Span::styled(
                    format!("{:>5}d  ", counter.counter),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    &counter.name,
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  since {}", counter.start_date),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Counters ({}) ", app.counters.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !app.counters.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar, which doubles as the input and confirm line.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let (text, style) = match &app.mode {
        Mode::Input { kind, buffer } => {
            let prompt = match kind {
                InputKind::Add => "New counter",
                InputKind::Rename(_) => "Rename to",
            };
            (
                format!("{prompt}: {buffer}_  (Enter:save Esc:cancel)"),
                Style::default().fg(Color::Cyan),
            )
        }
        Mode::Confirm(Confirm::DeleteCounter { name, .. }) => (
            format!("Delete '{name}'? (y/n)"),
            Style::default().fg(Color::Red),
        ),
        Mode::Confirm(Confirm::ResetStreak) => (
            "Reset your sobriety streak? (y/n)".to_string(),
            Style::default().fg(Color::Red),
        ),
        Mode::Normal => (
            app.status.clone().unwrap_or_else(|| HELP.to_string()),
            Style::default().fg(Color::DarkGray),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
