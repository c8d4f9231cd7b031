//! The six independent factor scorers.
//!
//! Each scorer is a pure function over one slice of the profile returning a capped,
//! non-negative raw score plus the explanations it wants surfaced.

pub mod certifications;
pub mod education;
pub mod experience;
pub mod impact;
pub mod recent_activity;
pub mod skills;

use chrono::{DateTime, Utc};

use super::Factor;
use crate::profile::ProfileSnapshot;
use crate::tiers::TierClassifier;

/// Raw result of one scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub raw: f64,
    pub explanations: Vec<String>,
}

impl FactorScore {
    pub(crate) fn empty(explanation: Option<&str>) -> Self {
        Self {
            raw: 0.0,
            explanations: explanation.map(str::to_string).into_iter().collect(),
        }
    }

    pub(crate) fn capped(raw: f64, cap: f64, explanations: Vec<String>) -> Self {
        Self {
            raw: raw.clamp(0.0, cap),
            explanations,
        }
    }
}

/// Run every scorer in breakdown order.
pub(crate) fn score_all(
    profile: &ProfileSnapshot,
    tiers: &TierClassifier,
    now: DateTime<Utc>,
) -> Vec<(Factor, FactorScore)> {
    Factor::ALL
        .iter()
        .map(|factor| {
            let score = match factor {
                Factor::Education => education::score(&profile.education, tiers),
                Factor::Experience => experience::score(&profile.experiences, tiers, now),
                Factor::Impact => impact::score(&profile.experiences),
                Factor::Skills => {
                    skills::score(&profile.skills, profile.market_signal.as_ref(), now)
                }
                Factor::Certifications => certifications::score(&profile.certifications, now),
                Factor::RecentActivity => recent_activity::score(&profile.events, now),
            };
            (*factor, score)
        })
        .collect()
}
