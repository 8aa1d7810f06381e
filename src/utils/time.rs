use chrono::{DateTime, Datelike, Local};

/// Current date and time rendered for model prompt context
pub fn current_date_line() -> String {
    format_date_line(&Local::now())
}

/// Format a date the way the prompt template expects it
pub fn format_date_line(now: &DateTime<Local>) -> String {
    format!(
        "day: {}, month: {}, year: {}, time: {}",
        now.day(),
        now.month(),
        now.year(),
        now.format("%I:%M %p")
    )
}
