use chrono::{DateTime, Utc};

use super::FactorScore;
use crate::clock;
use crate::profile::ActivityEvent;
use crate::rating::Factor;

/// Only events this recent count toward the score.
pub const ACTIVITY_WINDOW_DAYS: f64 = 90.0;
/// Days after which an event's value halves.
pub const HALF_LIFE_DAYS: f64 = 21.0;

/// Age of an event in days; events stamped after `now` count as brand new.
pub fn event_age_days(event: &ActivityEvent, now: DateTime<Utc>) -> f64 {
    clock::days_between(event.created_at, now).max(0.0)
}

pub fn decayed_value(event: &ActivityEvent, now: DateTime<Utc>) -> f64 {
    event.value * 0.5_f64.powf(event_age_days(event, now) / HALF_LIFE_DAYS)
}

pub fn score(events: &[ActivityEvent], now: DateTime<Utc>) -> FactorScore {
    let recent: Vec<&ActivityEvent> = events
        .iter()
        .filter(|event| event_age_days(event, now) <= ACTIVITY_WINDOW_DAYS)
        .collect();
    if recent.is_empty() {
        return FactorScore::empty(Some("No recent activity in the last 90 days"));
    }

    let total: f64 = recent.iter().map(|event| decayed_value(event, now)).sum();
    let explanations = vec![format!(
        "{} recent activities (last 90 days)",
        recent.len()
    )];

    FactorScore::capped(total, Factor::RecentActivity.cap(), explanations)
}
