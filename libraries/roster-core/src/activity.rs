//! Activity recency classification and relative-time formatting.
//!
//! Both functions take an explicit `now` so they are deterministic and
//! total: every valid timestamp (and its absence) maps to a result,
//! and nothing here can panic. Callers that want wall-clock behavior
//! pass `Utc::now()`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Coarse classification of a user's last-active timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Active within the last few minutes
    Online,
    /// Recently active but not right now
    Away,
    /// No recent activity
    Offline,
    /// No activity timestamp recorded
    Unknown,
}

impl ActivityStatus {
    /// Indicator color for this status, as a CSS hex string.
    pub fn indicator_color(self) -> &'static str {
        match self {
            ActivityStatus::Online => "#22c55e",
            ActivityStatus::Away => "#f59e0b",
            ActivityStatus::Offline => "#6b7280",
            ActivityStatus::Unknown => "#d1d5db",
        }
    }
}

/// Classify a last-active timestamp relative to `now`.
///
/// Thresholds: within 5 minutes is `Online`, within an hour is `Away`,
/// older is `Offline`. A missing timestamp is `Unknown`. Timestamps in
/// the future (clock skew between backend and client) read as current
/// activity.
pub fn classify(last_active: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ActivityStatus {
    let Some(last_active) = last_active else {
        return ActivityStatus::Unknown;
    };

    let elapsed = now.signed_duration_since(last_active);
    if elapsed <= Duration::minutes(5) {
        ActivityStatus::Online
    } else if elapsed <= Duration::hours(1) {
        ActivityStatus::Away
    } else {
        ActivityStatus::Offline
    }
}

/// Render a last-active timestamp as a relative-time phrase.
///
/// Produces "never" for a missing timestamp, "just now" under a minute
/// (and for skewed future values), then "N minutes/hours/days ago".
pub fn relative_time(last_active: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last_active) = last_active else {
        return "never".to_string();
    };

    let elapsed = now.signed_duration_since(last_active);
    if elapsed < Duration::minutes(1) {
        return "just now".to_string();
    }

    if elapsed < Duration::hours(1) {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
