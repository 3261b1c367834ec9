//! Relative time formatting
//!
//! Turns a timestamp into a short approximate age such as `3 hours`.

use chrono::{DateTime, Utc};

/// Humanize the time elapsed between `then` and now.
#[must_use]
pub fn humanize_time(then: DateTime<Utc>) -> String {
    humanize_since(then, Utc::now())
}

/// Humanize the time elapsed between `then` and `now`.
///
/// Timestamps in the future count as no elapsed time.
#[must_use]
pub fn humanize_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).max(chrono::Duration::zero());

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "seconds".to_string()
    } else if hours < 1 {
        plural(minutes, "minute")
    } else if days < 1 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else if days / 30 < 12 {
        plural(days / 30, "month")
    } else {
        plural((days / 365).max(1), "year")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
