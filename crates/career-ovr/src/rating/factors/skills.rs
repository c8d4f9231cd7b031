use chrono::{DateTime, Utc};

use super::FactorScore;
use crate::clock;
use crate::market::skill_scarcity_weight;
use crate::profile::{MarketSignal, SkillRecord};
use crate::rating::Factor;

const VERIFIED_MULTIPLIER: f64 = 1.3;
const RECENT_MULTIPLIER: f64 = 1.2;
const RECENT_WINDOW_DAYS: f64 = 180.0;
const SCARCITY_THRESHOLD: f64 = 1.2;
const LISTED_SCARCE_SKILLS: usize = 3;
const DIVERSE_SKILL_COUNT: usize = 8;
const MAX_LEVEL: f64 = 5.0;

/// Contribution of a single skill before the factor cap.
pub fn skill_value(skill: &SkillRecord, market: Option<&MarketSignal>, now: DateTime<Utc>) -> f64 {
    let level = skill
        .level
        .map(|level| f64::from(level) / MAX_LEVEL)
        .unwrap_or(1.0);
    let verified = if skill.verified {
        VERIFIED_MULTIPLIER
    } else {
        1.0
    };
    let recency = match skill.last_used {
        Some(last_used) if clock::days_since(last_used, now) < RECENT_WINDOW_DAYS => {
            RECENT_MULTIPLIER
        }
        _ => 1.0,
    };
    let scarcity = scarcity_boost(skill, market).unwrap_or(1.0);

    level * verified * recency * scarcity
}

fn scarcity_boost(skill: &SkillRecord, market: Option<&MarketSignal>) -> Option<f64> {
    let weight = skill_scarcity_weight(&skill.name, market?);
    (weight > SCARCITY_THRESHOLD).then_some(weight)
}

pub fn score(
    skills: &[SkillRecord],
    market: Option<&MarketSignal>,
    now: DateTime<Utc>,
) -> FactorScore {
    if skills.is_empty() {
        return FactorScore::empty(Some("No skills listed"));
    }

    let total: f64 = skills
        .iter()
        .map(|skill| skill_value(skill, market, now))
        .sum();

    let mut explanations = Vec::new();
    let scarce: Vec<&str> = skills
        .iter()
        .filter(|skill| scarcity_boost(skill, market).is_some())
        .map(|skill| skill.name.as_str())
        .collect();
    if !scarce.is_empty() {
        let listed: Vec<&str> = scarce.iter().take(LISTED_SCARCE_SKILLS).copied().collect();
        explanations.push(format!("High-demand skills: {}", listed.join(", ")));
    }
    if skills.len() >= DIVERSE_SKILL_COUNT {
        explanations.push(format!("Diverse skill set ({} skills)", skills.len()));
    }

    FactorScore::capped(total, Factor::Skills.cap(), explanations)
}
