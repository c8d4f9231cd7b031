use chrono::{DateTime, NaiveDate, Utc};

use crate::profile::{EmploymentKind, ExperienceRecord, ProfileSnapshot};

const BASE_CONFIDENCE: f64 = 0.5;
const COMPLETENESS_WEIGHT: f64 = 0.1;
const VERIFICATION_WEIGHT: f64 = 0.2;
const PROOF_WEIGHT: f64 = 0.1;
const OVERLAP_PENALTY: f64 = 0.1;

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn span(record: &ExperienceRecord, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (record.start_date, record.effective_end(today))
}

/// Whether any two full-time roles overlap (inclusive on both ends).
pub fn has_overlapping_full_time(experiences: &[ExperienceRecord], now: DateTime<Utc>) -> bool {
    let today = now.date_naive();
    let spans: Vec<(NaiveDate, NaiveDate)> = experiences
        .iter()
        .filter(|record| record.employment == EmploymentKind::FullTime)
        .map(|record| span(record, today))
        .collect();

    spans.iter().enumerate().any(|(idx, (start1, end1))| {
        spans[idx + 1..]
            .iter()
            .any(|(start2, end2)| start1 <= end2 && start2 <= end1)
    })
}

/// Trust estimate in [0, 1] from completeness, verification and date consistency.
pub fn estimate(profile: &ProfileSnapshot, now: DateTime<Utc>) -> f64 {
    let present = [
        !profile.education.is_empty(),
        !profile.experiences.is_empty(),
        !profile.skills.is_empty(),
    ]
    .iter()
    .filter(|present| **present)
    .count();

    let verified = profile.skills.iter().filter(|skill| skill.verified).count();
    let proven = profile
        .events
        .iter()
        .filter(|event| event.proof_url.is_some())
        .count();

    let mut confidence = BASE_CONFIDENCE
        + COMPLETENESS_WEIGHT * ratio(present, 3)
        + VERIFICATION_WEIGHT * ratio(verified, profile.skills.len())
        + PROOF_WEIGHT * ratio(proven, profile.events.len());

    if has_overlapping_full_time(&profile.experiences, now) {
        confidence -= OVERLAP_PENALTY;
    }

    confidence.clamp(0.0, 1.0)
}
