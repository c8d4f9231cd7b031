use serde::{Deserialize, Serialize};

use super::Factor;
use crate::profile::ValidationError;

/// Tag for the default weights and formulas. Bump whenever either changes.
pub const MODEL_VERSION: &str = "v1.1";

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Per-factor weights. They are expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub education: f64,
    pub experience: f64,
    pub impact: f64,
    pub skills: f64,
    pub certifications: f64,
    pub recent_activity: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            education: 0.18,
            experience: 0.28,
            impact: 0.24,
            skills: 0.18,
            certifications: 0.06,
            recent_activity: 0.06,
        }
    }
}

impl FactorWeights {
    pub fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Education => self.education,
            Factor::Experience => self.experience,
            Factor::Impact => self.impact,
            Factor::Skills => self.skills,
            Factor::Certifications => self.certifications,
            Factor::RecentActivity => self.recent_activity,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|factor| self.weight(*factor)).sum()
    }

    pub fn sums_to_one(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for factor in Factor::ALL {
            let value = self.weight(factor);
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight {
                    factor: factor.label(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Version tag pinned to these weights.
    pub fn model_version(&self) -> String {
        if *self == Self::default() {
            return MODEL_VERSION.to_string();
        }

        let weights: Vec<String> = Factor::ALL
            .iter()
            .map(|factor| self.weight(*factor).to_string())
            .collect();
        format!("{MODEL_VERSION}+w{}", weights.join("/"))
    }
}

/// Tunable inputs of the rating model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    #[serde(default)]
    pub weights: FactorWeights,
}
