//! Weighted Overall Rating (OVR) model.
//!
//! The engine runs six factor scorers, weights them into a breakdown, converts the weighted
//! sum into rating points above a base floor, applies the market trend multiplier and the
//! staleness adjustment, and clamps the rounded result to 0..=99. It is a pure function of
//! the profile and the supplied "now".

pub mod adjustments;
pub mod confidence;
mod config;
pub mod factors;
mod report;

#[cfg(test)]
mod tests;

pub use config::{FactorWeights, RatingConfig, MODEL_VERSION};
pub use factors::FactorScore;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::profile::{ProfileSnapshot, ValidationError};
use crate::tiers::TierClassifier;

/// Points every profile starts with.
pub const BASE_SCORE: f64 = 20.0;
/// Highest reportable rating.
pub const MAX_OVERALL: u8 = 99;

/// Named scoring factor, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Education,
    Experience,
    Impact,
    Skills,
    Certifications,
    RecentActivity,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::Education,
        Factor::Experience,
        Factor::Impact,
        Factor::Skills,
        Factor::Certifications,
        Factor::RecentActivity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Factor::Education => "Education",
            Factor::Experience => "Experience",
            Factor::Impact => "Impact",
            Factor::Skills => "Skills",
            Factor::Certifications => "Certifications",
            Factor::RecentActivity => "Recent Activity",
        }
    }

    /// Hard ceiling on the factor's raw score.
    pub fn cap(self) -> f64 {
        match self {
            Factor::Education => 22.0,
            Factor::Experience => 30.0,
            Factor::Impact => 27.0,
            Factor::Skills => 20.0,
            Factor::Certifications => 8.0,
            Factor::RecentActivity => 8.0,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One weighted row of the rating breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub factor: Factor,
    pub raw_score: f64,
    pub cap: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Complete, explainable rating for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub overall: u8,
    pub confidence: f64,
    pub breakdown: Vec<BreakdownItem>,
    pub explanations: Vec<String>,
    pub trend_multiplier: f64,
    pub recency_adjustment: f64,
    pub model_version: String,
    pub rated_at: DateTime<Utc>,
}

/// Stateless rating engine; safe to share across threads.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    config: RatingConfig,
    tiers: TierClassifier,
    model_version: String,
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
            tiers: TierClassifier::default(),
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

impl RatingEngine {
    pub fn new(config: RatingConfig) -> Result<Self, ValidationError> {
        config.weights.validate()?;
        if !config.weights.sums_to_one() {
            warn!(
                sum = config.weights.sum(),
                "factor weights do not sum to 1.0; overall scores lose their scale"
            );
        }

        let model_version = config.weights.model_version();
        Ok(Self {
            config,
            tiers: TierClassifier::default(),
            model_version,
        })
    }

    pub fn with_classifier(mut self, tiers: TierClassifier) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn rate(
        &self,
        profile: &ProfileSnapshot,
        clock: &dyn Clock,
    ) -> Result<RatingResult, ValidationError> {
        self.rate_at(profile, clock.now())
    }

    /// Rate a profile as of `now`.
    pub fn rate_at(
        &self,
        profile: &ProfileSnapshot,
        now: DateTime<Utc>,
    ) -> Result<RatingResult, ValidationError> {
        profile.validate()?;

        let weights = &self.config.weights;
        let mut breakdown = Vec::with_capacity(Factor::ALL.len());
        let mut explanations = Vec::new();

        for (factor, score) in factors::score_all(profile, &self.tiers, now) {
            let weight = weights.weight(factor);
            breakdown.push(BreakdownItem {
                factor,
                raw_score: score.raw,
                cap: factor.cap(),
                weight,
                contribution: score.raw * weight,
            });
            explanations.extend(score.explanations);
        }

        let weighted_sum: f64 = breakdown.iter().map(|item| item.contribution).sum();
        let raw_total = BASE_SCORE + weighted_sum * self.point_scale();

        let (trend_multiplier, trend_note) = adjustments::trend(profile.market_signal.as_ref());
        explanations.extend(trend_note);

        let (recency_adjustment, recency_note) =
            adjustments::recency(&profile.experiences, now);
        explanations.extend(recency_note);

        let overall = to_overall(raw_total * trend_multiplier * recency_adjustment)?;
        let confidence = confidence::estimate(profile, now);

        debug!(
            overall,
            confidence,
            empty_profile = profile.is_empty(),
            raw_total,
            trend_multiplier,
            recency_adjustment,
            model_version = %self.model_version,
            "profile rated"
        );

        Ok(RatingResult {
            overall,
            confidence,
            breakdown,
            explanations,
            trend_multiplier,
            recency_adjustment,
            model_version: self.model_version.clone(),
            rated_at: now,
        })
    }

    /// Rating points per unit of weighted factor score, so that a profile maxing every
    /// factor lands on the top of the scale before adjustments.
    fn point_scale(&self) -> f64 {
        let weighted_caps: f64 = Factor::ALL
            .iter()
            .map(|factor| factor.cap() * self.config.weights.weight(*factor))
            .sum();
        if weighted_caps > 0.0 {
            (f64::from(MAX_OVERALL) - BASE_SCORE) / weighted_caps
        } else {
            0.0
        }
    }
}

/// Rounds half away from zero and clamps into `0..=MAX_OVERALL`.
fn to_overall(adjusted: f64) -> Result<u8, ValidationError> {
    if !adjusted.is_finite() {
        return Err(ValidationError::NonFinite {
            field: "overall".to_string(),
            value: adjusted,
        });
    }
    Ok(adjusted.round().clamp(0.0, f64::from(MAX_OVERALL)) as u8)
}
