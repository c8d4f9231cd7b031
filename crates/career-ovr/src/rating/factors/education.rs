use super::FactorScore;
use crate::profile::EducationRecord;
use crate::rating::Factor;
use crate::tiers::{TierClassifier, TierTable};

const TIER_POINTS: f64 = 10.0;
const DEGREE_POINTS: f64 = 8.0;
const GPA_POINTS: f64 = 4.0;
const EXCELLENT_GPA: f64 = 3.7;

/// GPA scale assumed when a record does not declare one.
pub const DEFAULT_GPA_SCALE: f64 = 4.0;

const GPA_CURVE: [(f64, f64); 7] = [
    (3.7, 1.0),
    (3.5, 0.9),
    (3.3, 0.8),
    (3.0, 0.7),
    (2.7, 0.55),
    (2.5, 0.4),
    (2.0, 0.25),
];
const GPA_FLOOR: f64 = 0.1;

/// Degree level in [0, 1] from a free-text title. Long forms match as substrings,
/// abbreviations (`MS`, `B.A.`, `Ph.D.`) only as whole tokens.
pub fn degree_level_score(degree: &str) -> f64 {
    let lowered = degree.to_lowercase().replace(['.', '\''], "");
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    let has_token = |candidates: &[&str]| tokens.iter().any(|token| candidates.contains(token));

    if lowered.contains("phd") || lowered.contains("doctor") || has_token(&["dphil"]) {
        1.0
    } else if lowered.contains("master")
        || lowered.contains("mba")
        || has_token(&["ms", "ma", "msc", "meng", "mfa"])
    {
        0.85
    } else if lowered.contains("bachelor") || has_token(&["bs", "ba", "bsc", "beng", "bfa"]) {
        0.7
    } else if lowered.contains("associate") || has_token(&["aa", "as", "aas"]) {
        0.4
    } else {
        0.5
    }
}

/// GPA in [0, 1] after normalizing to a 4.0 scale. Missing GPA scores zero.
pub fn gpa_score(gpa: Option<f64>, scale: f64) -> f64 {
    let Some(gpa) = gpa else {
        return 0.0;
    };
    let normalized = gpa / scale * DEFAULT_GPA_SCALE;

    GPA_CURVE
        .iter()
        .find(|(threshold, _)| normalized >= *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(GPA_FLOOR)
}

fn normalized_gpa(record: &EducationRecord) -> Option<f64> {
    let scale = record.gpa_scale.unwrap_or(DEFAULT_GPA_SCALE);
    record.gpa.map(|gpa| gpa / scale * DEFAULT_GPA_SCALE)
}

/// Best single entry wins; further degrees neither dilute nor inflate the score.
pub fn score(records: &[EducationRecord], tiers: &TierClassifier) -> FactorScore {
    if records.is_empty() {
        return FactorScore::empty(Some("No education data provided"));
    }

    let mut best: Option<(f64, &EducationRecord, Option<u8>)> = None;
    for record in records {
        let tier = tiers.resolve(
            TierTable::Institution,
            &record.institution,
            record.institution_tier,
        );
        let points = crate::tiers::tier_to_score(tier) * TIER_POINTS
            + degree_level_score(&record.degree) * DEGREE_POINTS
            + gpa_score(
                record.gpa,
                record.gpa_scale.unwrap_or(DEFAULT_GPA_SCALE),
            ) * GPA_POINTS;

        if best.map(|(top, _, _)| points > top).unwrap_or(true) {
            best = Some((points, record, tier));
        }
    }

    let mut explanations = Vec::new();
    let Some((points, record, tier)) = best else {
        return FactorScore::empty(None);
    };

    match tier {
        Some(1) => explanations.push(format!("Elite education from {}", record.institution)),
        Some(2) => explanations.push(format!("Strong education from {}", record.institution)),
        _ => {}
    }
    if let (Some(gpa), Some(normalized)) = (record.gpa, normalized_gpa(record)) {
        if normalized >= EXCELLENT_GPA {
            explanations.push(format!("Excellent GPA: {gpa:.2}"));
        }
    }

    FactorScore::capped(points, Factor::Education.cap(), explanations)
}
