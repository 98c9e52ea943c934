use chrono::NaiveDate;
use colored::Colorize;

use crate::features::counters::Counter;
use crate::features::sobriety::{DefaultCounter, MonthGrid, SobrietyStatus};

const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';
const PROGRESS_WIDTH: usize = 30;

/// Render a horizontal progress bar for a ratio in `0.0..=1.0`.
#[must_use]
pub fn render_progress_bar(ratio: f64, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);

    let mut bar = FULL_BLOCK.to_string().repeat(filled);
    bar.push_str(&LIGHT_SHADE.to_string().repeat(width - filled));
    bar
}

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Format a list of counters as a pretty table
pub fn format_counters_pretty(counters: &[Counter]) -> String {
    if counters.is_empty() {
        return "Counters (0)\n  No counters. Add one with 'besober counter add <name>'"
            .to_string();
    }

    let width = counters.iter().map(|c| c.name.len()).max().unwrap_or(0);

    let mut output = format!("Counters ({})\n", counters.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for counter in counters {
        let days = plural_days(i64::from(counter.counter));
        output.push_str(&format!(
            "{} {:width$}  {}  {}\n",
            format!("#{:<3}", counter.id).dimmed(),
            counter.name.bold(),
            days.green(),
            format!("since {}", counter.start_date).dimmed(),
            width = width,
        ));
    }

    output
}

/// Format a single counter as pretty output
pub fn format_counter_pretty(counter: &Counter) -> String {
    let mut output = format!("{}\n", counter.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), counter.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Days".dimmed(),
        plural_days(i64::from(counter.counter)).green()
    ));
    output.push_str(&format!("  {}: {}\n", "Started".dimmed(), counter.start_date));
    output.push_str(&format!(
        "  {}: {}\n",
        "Last updated".dimmed(),
        counter.last_updated
    ));
    output
}

/// Format the default counter status
pub fn format_status_pretty(status: &SobrietyStatus) -> String {
    let mut output = format!("{}\n", "Sobriety Tracker".cyan().bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "  {}  {}\n",
        status.current_days.to_string().bold().green(),
        "DAYS".dimmed()
    ));
    output.push_str(&format!(
        "  {} {:>3.0}% of {} days\n",
        render_progress_bar(status.progress, PROGRESS_WIDTH).cyan(),
        status.progress * 100.0,
        status.goal_days
    ));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {}\n",
        "Started".dimmed(),
        status.start_date.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Longest streak".dimmed(),
        plural_days(i64::from(status.longest_streak))
    ));

    if status.is_personal_best() && status.longest_streak > 0 {
        output.push_str(&format!("  {}\n", "New personal best!".yellow().bold()));
    }

    output
}

/// Format the outcome of a default counter reset
pub fn format_reset_pretty(counter: &DefaultCounter) -> String {
    let mut output = format!("{}\n", "Streak reset. Day 0 starts now.".yellow());
    output.push_str(&format!(
        "  {}: {}\n",
        "Longest streak".dimmed(),
        plural_days(i64::from(counter.longest_streak))
    ));
    output
}

/// Format a month calendar with streak days highlighted
pub fn format_calendar_pretty(grid: &MonthGrid, today: NaiveDate) -> String {
    let mut output = format!("{:^27}\n", grid.title().bold());
    output.push_str(&format!("{}\n", " Mo  Tu  We  Th  Fr  Sa  Su".dimmed()));

    for week in &grid.weeks {
        let mut line = String::new();
        for cell in week {
            let text = match cell {
                None => "    ".normal(),
                Some(day) => {
                    let label = format!("{:>3} ", day.date.format("%-d"));
                    match (day.marked, day.today) {
                        (true, true) => label.black().on_green().bold(),
                        (true, false) => label.green(),
                        (false, true) => label.bold().underline(),
                        (false, false) => label.normal(),
                    }
                }
            };
            line.push_str(&text.to_string());
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let marked = grid.marked_count();
    output.push('\n');
    output.push_str(&format!(
        "  {} {marked} streak {} this month (today: {today})\n",
        "●".green(),
        if marked == 1 { "day" } else { "days" },
    ));
    output
}
