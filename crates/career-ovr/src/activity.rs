//! Activity event catalog and anti-gaming admission.
//!
//! Scoring only ever sees admitted events. The ledger enforces per-type daily caps and
//! rejects a proof URL that was already claimed for the same event type.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::profile::ActivityEvent;

const STANDARD_XP: [(&str, f64); 11] = [
    ("internship_offer", 12.0),
    ("fulltime_offer", 15.0),
    ("promotion", 10.0),
    ("major_project_launch", 8.0),
    ("blog_post", 1.5),
    ("github_commit", 0.2),
    ("kaggle_submission", 2.0),
    ("course_module_completed", 1.0),
    ("mock_interview", 0.8),
    ("networking_call", 0.5),
    ("certification_earned", 5.0),
];

const DAILY_CAPS: [(&str, usize); 4] = [
    ("github_commit", 5),
    ("blog_post", 1),
    ("networking_call", 3),
    ("course_module_completed", 5),
];

/// Catalog XP for a known event type.
pub fn standard_xp(kind: &str) -> Option<f64> {
    STANDARD_XP
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, xp)| *xp)
}

/// Events of this type admitted per UTC day, when capped at all.
pub fn daily_cap(kind: &str) -> Option<usize> {
    DAILY_CAPS
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, cap)| *cap)
}

impl ActivityEvent {
    /// Event valued from the catalog; `None` for types the catalog does not know.
    pub fn standard(
        kind: &str,
        created_at: DateTime<Utc>,
        proof_url: Option<String>,
    ) -> Option<Self> {
        standard_xp(kind).map(|value| Self {
            kind: kind.to_string(),
            value,
            created_at,
            proof_url,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("daily cap reached for {kind} ({cap}/day)")]
    DailyCapReached { kind: String, cap: usize },
    #[error("duplicate event detected for {kind} ({proof_url})")]
    DuplicateProof { kind: String, proof_url: String },
}

/// Admitted events for one person.
#[derive(Debug, Clone, Default)]
pub struct ActivityLedger {
    events: Vec<ActivityEvent>,
    per_day: BTreeMap<(String, NaiveDate), usize>,
    proofs: BTreeSet<(String, String)>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an event, or explain why it was refused.
    pub fn admit(&mut self, event: ActivityEvent) -> Result<(), ActivityError> {
        let day = event.created_at.date_naive();
        let day_key = (event.kind.clone(), day);

        if let Some(cap) = daily_cap(&event.kind) {
            let today = self.per_day.get(&day_key).copied().unwrap_or(0);
            if today >= cap {
                return Err(ActivityError::DailyCapReached {
                    kind: event.kind,
                    cap,
                });
            }
        }

        if let Some(proof_url) = &event.proof_url {
            let proof_key = (event.kind.clone(), proof_url.clone());
            if self.proofs.contains(&proof_key) {
                return Err(ActivityError::DuplicateProof {
                    kind: proof_key.0,
                    proof_url: proof_key.1,
                });
            }
            self.proofs.insert(proof_key);
        }

        *self.per_day.entry(day_key).or_insert(0) += 1;
        debug!(kind = %event.kind, value = event.value, %day, "activity admitted");
        self.events.push(event);
        Ok(())
    }

    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ActivityEvent> {
        self.events
    }
}
