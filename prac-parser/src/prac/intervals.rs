//! Interval tokens
//!
//! An interval is the send-off time for one repetition, written as a clock
//! duration. Three shapes are accepted:
//!
//!   :SS        seconds only, 00-59
//!   MM:SS      minutes 0-59 (one or two digits), seconds 00-59
//!   H:MM:SS    any number of hour digits, minutes and seconds 00-59
//!
//! Validation is a pure function of the token text.

use once_cell::sync::Lazy;
use regex::Regex;

static SECONDS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:([0-5][0-9])$").unwrap());
static MINUTES_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-5]?[0-9]):([0-5][0-9])$").unwrap());
static HOURS_MINUTES_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+):([0-5][0-9]):([0-5][0-9])$").unwrap());

/// Returns true when `token` is a well-formed interval.
pub fn is_valid_interval(token: &str) -> bool {
    interval_seconds(token).is_some()
}

/// Returns true when every token is a valid interval. An empty list is valid.
pub fn validate_intervals<S: AsRef<str>>(intervals: &[S]) -> bool {
    intervals.iter().all(|token| is_valid_interval(token.as_ref()))
}

/// Converts an interval token to whole seconds, or `None` if it is malformed.
///
/// Hour counts too large for `u64` saturate rather than fail; the token is
/// still well formed.
pub fn interval_seconds(token: &str) -> Option<u64> {
    if let Some(caps) = SECONDS_ONLY.captures(token) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = MINUTES_SECONDS.captures(token) {
        let minutes: u64 = caps[1].parse().ok()?;
        let seconds: u64 = caps[2].parse().ok()?;
        return Some(minutes * 60 + seconds);
    }
    if let Some(caps) = HOURS_MINUTES_SECONDS.captures(token) {
        let hours: u64 = caps[1].parse().unwrap_or(u64::MAX);
        let minutes: u64 = caps[2].parse().ok()?;
        let seconds: u64 = caps[3].parse().ok()?;
        return Some(
            hours
                .saturating_mul(3600)
                .saturating_add(minutes * 60 + seconds),
        );
    }
    None
}

/// Formats a number of seconds as `M:SS`, or `H:MM:SS` from one hour up.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
