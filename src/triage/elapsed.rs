//! Human-readable rendering of the time since a notification was updated.

use chrono::TimeDelta;

const UNITS: [(&str, i64); 6] = [
    ("year", 365 * 24 * 60 * 60),
    ("week", 7 * 24 * 60 * 60),
    ("day", 24 * 60 * 60),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Largest number of units shown, e.g. `3 days 4 hours`.
const MAX_UNITS: usize = 2;

/// Formats a duration using at most two non-zero units.
///
/// Negative durations, which appear when the local clock lags GitHub's, are
/// clamped to zero.
///
/// ```
/// use chrono::TimeDelta;
/// use mailroom::triage::elapsed::format_elapsed;
///
/// let delta = TimeDelta::days(3) + TimeDelta::hours(4) + TimeDelta::minutes(5);
/// assert_eq!(format_elapsed(delta), "3 days 4 hours");
/// ```
#[must_use]
pub fn format_elapsed(delta: TimeDelta) -> String {
    let mut remaining = delta.num_seconds().max(0);
    let mut parts = Vec::with_capacity(MAX_UNITS);

    for (name, unit_seconds) in UNITS {
        if parts.len() == MAX_UNITS {
            break;
        }
        let count = remaining.div_euclid(unit_seconds);
        remaining = remaining.rem_euclid(unit_seconds);
        if count > 0 {
            parts.push(pluralise(count, name));
        }
    }

    if parts.is_empty() {
        return pluralise(0, "second");
    }
    parts.join(" ")
}

fn pluralise(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
