//! Advisory actions that would raise a profile's rating.
//!
//! The rules read the profile directly instead of the rating breakdown, so they can evolve
//! without touching the scoring model. Deltas are fixed estimates, not derived from weights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::profile::signals::count_quantified;
use crate::profile::ProfileSnapshot;
use crate::rating::Factor;

/// Most actions returned for a single profile.
pub const MAX_RECOMMENDATIONS: usize = 5;

const QUANTIFIED_TARGET: usize = 3;
const SKILL_TARGET: usize = 5;
const UNVERIFIED_THRESHOLD: usize = 3;
const CERTIFICATION_SCORE_CEILING: u8 = 80;
const ACTIVITY_LOOKBACK_DAYS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub estimated_delta: u32,
    pub category: Factor,
}

impl Recommendation {
    fn new(action: &str, estimated_delta: u32, category: Factor) -> Self {
        Self {
            action: action.to_string(),
            estimated_delta,
            category,
        }
    }
}

/// Ranked improvement actions, largest estimated gain first. Rules that tie keep their
/// rule order.
pub fn recommend(
    profile: &ProfileSnapshot,
    overall: u8,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let mut actions = Vec::new();

    if profile.education.is_empty() {
        actions.push(Recommendation::new(
            "Add education history",
            8,
            Factor::Education,
        ));
    } else if profile.education.iter().all(|record| record.gpa.is_none()) {
        actions.push(Recommendation::new("Add GPA", 2, Factor::Education));
    }

    if profile.experiences.is_empty() {
        actions.push(Recommendation::new(
            "Add internship or work experience",
            15,
            Factor::Experience,
        ));
    } else if count_quantified(profile.all_bullets()) < QUANTIFIED_TARGET {
        actions.push(Recommendation::new(
            "Quantify achievements",
            5,
            Factor::Impact,
        ));
    }

    if profile.skills.len() < SKILL_TARGET {
        actions.push(Recommendation::new("Add more skills", 3, Factor::Skills));
    }
    let unverified = profile.skills.iter().filter(|skill| !skill.verified).count();
    if unverified >= UNVERIFIED_THRESHOLD {
        actions.push(Recommendation::new("Verify skills", 4, Factor::Skills));
    }

    if profile.certifications.is_empty() && overall < CERTIFICATION_SCORE_CEILING {
        actions.push(Recommendation::new(
            "Earn a certification",
            3,
            Factor::Certifications,
        ));
    }

    let active_recently = profile.events.iter().any(|event| {
        let age = clock::days_between(event.created_at, now);
        age < ACTIVITY_LOOKBACK_DAYS
    });
    if !active_recently {
        actions.push(Recommendation::new(
            "Log recent activities",
            2,
            Factor::RecentActivity,
        ));
    }

    actions.sort_by(|a, b| b.estimated_delta.cmp(&a.estimated_delta));
    actions.truncate(MAX_RECOMMENDATIONS);
    actions
}
