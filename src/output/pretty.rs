use chrono::{Datelike, NaiveDate};
use colored::Colorize;

use crate::core::to_iso_date;
use crate::info::calendar::{center, weekday_header};
use crate::info::{humanize_offset, MonthCalendar, RelativeInfo, WeekdayInfo};
use crate::resolver::ResolutionResult;

/// Format a resolution as labelled lines
pub fn format_resolution_pretty(result: &ResolutionResult) -> String {
    let mut output = format!(
        "{}  {}\n",
        result.iso_date().bold().green(),
        result.day_of_week.bold()
    );
    output.push_str(&format!("  {}: {}\n", "Expression".dimmed(), result.expression));
    output.push_str(&format!("  {}: {}\n", "Meaning".dimmed(), result.description));
    output.push_str(&format!(
        "  {}: {} ({:+})",
        "Offset".dimmed(),
        humanize_offset(result.days_from_today),
        result.days_from_today
    ));

    if let Some(warning) = &result.warning {
        output.push_str(&format!("\n  {}: {}", "Warning".yellow(), warning.yellow()));
    }

    output
}

pub fn format_weekday_pretty(info: &WeekdayInfo) -> String {
    let kind = if info.is_weekend {
        "weekend".cyan()
    } else {
        "weekday".normal()
    };
    format!(
        "{}  {} ({kind})",
        to_iso_date(info.date).bold(),
        info.day_of_week.bold().green()
    )
}

pub fn format_relative_pretty(info: &RelativeInfo) -> String {
    let mut output = format!(
        "{}  {}\n",
        to_iso_date(info.date).bold(),
        info.day_of_week.bold()
    );
    output.push_str(&format!("  {}\n", info.human_readable.green()));
    output.push_str(&format!(
        "  {}: {}  {}: {}",
        "Days".dimmed(),
        info.days_from_today,
        "Business days".dimmed(),
        info.business_days
    ));
    output
}

/// Format a calendar grid, reversing the cell for `highlight` when it falls
/// inside the month.
pub fn format_calendar_pretty(calendar: &MonthCalendar, highlight: Option<NaiveDate>) -> String {
    let today = highlight
        .filter(|date| calendar.contains(*date))
        .map(|date| date.day());

    let mut lines = vec![
        center(&calendar.title).bold().to_string(),
        weekday_header(calendar.first_weekday).dimmed().to_string(),
    ];

    for week in &calendar.weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) if Some(*day) == today => format!("{day:2}").reversed().to_string(),
                Some(day) => format!("{day:2}"),
                None => "  ".to_string(),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    lines.join("\n")
}
