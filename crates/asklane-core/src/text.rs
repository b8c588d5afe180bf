//! Plain-text helpers shared by view models and renderers.

use std::sync::LazyLock;

use chrono::{Datelike, Timelike};
use regex::Regex;

use crate::model::Timestamp;

/// Longest excerpt, in characters, before the ellipsis.
pub const EXCERPT_LEN: usize = 200;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[^`]*```").expect("fenced block pattern is valid"));

/// Short plain-text preview of a markdown body.
///
/// Fenced code blocks are dropped, the rest is cut to [`EXCERPT_LEN`]
/// characters, and `...` is appended whenever the full body is longer than
/// that, even if stripping code already made the preview shorter.
pub fn excerpt(content: &str) -> String {
    let stripped = FENCED_BLOCK.replace_all(content, "");
    let mut preview: String = stripped.chars().take(EXCERPT_LEN).collect();
    if content.chars().count() > EXCERPT_LEN {
        preview.push_str("...");
    }
    preview
}

/// Format a count with comma thousands separators: `2187356` → `2,187,356`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Calendar date as shown on profiles, e.g. `Jan 15, 2022`.
pub fn format_date(at: Timestamp) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Long calendar date, e.g. `January 15, 2022`.
pub fn format_long_date(at: Timestamp) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Human distance between `then` and `now`, e.g. `about 2 months`.
///
/// Buckets follow the usual "time ago" wording: minutes, hours and days are
/// rounded, months and years are whole calendar units. A `then` in the
/// future reads as `less than a minute`.
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    const HOUR: i64 = 60;
    const DAY: i64 = 24 * HOUR;

    let seconds = (now - then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;

    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes == 1 {
        return "1 minute".to_string();
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < DAY {
        return format!("about {} hours", (minutes + HOUR / 2) / HOUR);
    }
    if minutes < 42 * HOUR {
        return "1 day".to_string();
    }
    if minutes < 30 * DAY {
        return format!("{} days", (minutes + DAY / 2) / DAY);
    }
    if minutes < 45 * DAY {
        return "about 1 month".to_string();
    }
    if minutes < 60 * DAY {
        return "about 2 months".to_string();
    }

    let months = whole_months_between(then, now);
    if months < 12 {
        return format!("{} months", months.max(2));
    }

    let years = months / 12;
    let rest = months % 12;
    if rest < 3 {
        format!("about {}", plural(years, "year"))
    } else if rest < 9 {
        format!("over {}", plural(years, "year"))
    } else {
        format!("almost {}", plural(years + 1, "year"))
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Completed calendar months from `then` to `now`.
fn whole_months_between(then: Timestamp, now: Timestamp) -> i64 {
    let mut months = i64::from(now.year() - then.year()) * 12
        + i64::from(now.month()) - i64::from(then.month());
    let then_rest = (then.day(), then.num_seconds_from_midnight());
    let now_rest = (now.day(), now.num_seconds_from_midnight());
    if now_rest < then_rest {
        months -= 1;
    }
    months.max(0)
}
