use chrono::{DateTime, Utc};

use crate::clock;
use crate::market;
use crate::profile::{ExperienceRecord, MarketSignal};

const TREND_EXPLAIN_BAND: f64 = 0.02;
const STALE_AFTER_DAYS: f64 = 180.0;
const PENALTY_PER_MONTH: f64 = 0.02;
const MAX_STALENESS_PENALTY: f64 = 0.10;
const STALENESS_EXPLAIN_BELOW: f64 = 0.98;

/// Market trend multiplier and its explanation; exactly 1.0 without a signal.
pub fn trend(signal: Option<&MarketSignal>) -> (f64, Option<String>) {
    let Some(signal) = signal else {
        return (1.0, None);
    };

    let multiplier = market::trend_multiplier(signal);
    let delta_pct = (multiplier - 1.0) * 100.0;
    let explanation = if multiplier > 1.0 + TREND_EXPLAIN_BAND {
        Some(format!("Market trends are favorable (+{delta_pct:.1}%)"))
    } else if multiplier < 1.0 - TREND_EXPLAIN_BAND {
        Some(format!("Market trends are challenging ({delta_pct:.1}%)"))
    } else {
        None
    };

    (multiplier, explanation)
}

/// Days since the most recent experience ended; ongoing roles end "now".
pub fn days_stale(experiences: &[ExperienceRecord], now: DateTime<Utc>) -> Option<f64> {
    experiences
        .iter()
        .map(|record| record.end_date.map(clock::start_of_day).unwrap_or(now))
        .max()
        .map(|latest| clock::days_between(latest, now))
}

/// Staleness penalty: none within six months, then 2% per month up to 10%.
pub fn recency(experiences: &[ExperienceRecord], now: DateTime<Utc>) -> (f64, Option<String>) {
    let Some(days) = days_stale(experiences, now) else {
        return (1.0, None);
    };
    if days < STALE_AFTER_DAYS {
        return (1.0, None);
    }

    let months_stale = (days - STALE_AFTER_DAYS) / 30.0;
    let adjustment = 1.0 - (months_stale * PENALTY_PER_MONTH).min(MAX_STALENESS_PENALTY);
    let explanation = (adjustment < STALENESS_EXPLAIN_BELOW).then(|| {
        format!(
            "Profile needs update ({}% staleness penalty)",
            ((1.0 - adjustment) * 100.0).round()
        )
    });

    (adjustment, explanation)
}
