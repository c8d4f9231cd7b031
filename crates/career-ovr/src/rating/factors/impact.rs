use super::FactorScore;
use crate::profile::signals::{is_quantified, mentions_leadership};
use crate::profile::ExperienceRecord;
use crate::rating::Factor;

const QUANTIFIED_POINTS: f64 = 10.0;
const IMPACT_POINTS: f64 = 12.0;
const LEADERSHIP_BONUS: f64 = 5.0;
const DEFAULT_IMPACT: f64 = 0.5;
const EXPLAINED_QUANTIFIED: usize = 3;

pub fn score(records: &[ExperienceRecord]) -> FactorScore {
    if records.is_empty() {
        return FactorScore::empty(None);
    }

    let mut explanations = Vec::new();
    let bullets: Vec<&str> = records
        .iter()
        .flat_map(|record| record.bullets.iter().map(String::as_str))
        .collect();

    let quantified = bullets.iter().filter(|bullet| is_quantified(bullet)).count();
    let ratio = if bullets.is_empty() {
        0.0
    } else {
        quantified as f64 / bullets.len() as f64
    };
    if quantified >= EXPLAINED_QUANTIFIED {
        explanations.push(format!("{quantified} quantified achievements"));
    }

    let average_impact = records
        .iter()
        .map(|record| record.impact_score.unwrap_or(DEFAULT_IMPACT))
        .sum::<f64>()
        / records.len() as f64;

    let leadership = bullets.iter().any(|bullet| mentions_leadership(bullet));
    let mut points = ratio * QUANTIFIED_POINTS + average_impact * IMPACT_POINTS;
    if leadership {
        points += LEADERSHIP_BONUS;
        explanations.push("Leadership experience demonstrated".to_string());
    }

    FactorScore::capped(points, Factor::Impact.cap(), explanations)
}
