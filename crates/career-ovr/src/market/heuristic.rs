use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{MarketError, MarketSignalProvider, MarketSnapshot};
use crate::profile::MarketSignal;

const SOFTWARE_SCARCITY: [(&str, f64); 10] = [
    ("Python", 0.72),
    ("JavaScript", 0.65),
    ("TypeScript", 0.68),
    ("React", 0.64),
    ("SQL", 0.61),
    ("AWS", 0.70),
    ("Machine Learning", 0.75),
    ("LLMs", 0.82),
    ("Rust", 0.79),
    ("Go", 0.71),
];

const FINANCE_SCARCITY: [(&str, f64); 8] = [
    ("Python", 0.68),
    ("Excel", 0.45),
    ("SQL", 0.58),
    ("Tableau", 0.62),
    ("R", 0.65),
    ("Bloomberg", 0.55),
    ("Financial Modeling", 0.60),
    ("VBA", 0.52),
];

/// Reference provider deriving stable signals from role and industry keywords.
///
/// The as-of date is fixed at construction so repeated fetches are identical.
#[derive(Debug, Clone)]
pub struct HeuristicMarketProvider {
    as_of: NaiveDate,
}

impl HeuristicMarketProvider {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Synchronous core of [`MarketSignalProvider::fetch_signal`].
    pub fn signal_for(&self, role_family: &str, industry: &str) -> MarketSignal {
        let role = role_family.to_lowercase();
        let industry = industry.to_lowercase();

        let mut demand_idx: f64 = if role.contains("software") || role.contains("engineer") {
            0.72
        } else if role.contains("data") {
            0.78
        } else if role.contains("finance") || role.contains("investment") {
            0.58
        } else if role.contains("product") {
            0.65
        } else {
            0.5
        };

        if industry.contains("fintech") {
            demand_idx += 0.08;
        } else if industry.contains("tech") || industry.contains("saas") {
            demand_idx += 0.05;
        } else if industry.contains("crypto") || industry.contains("web3") {
            demand_idx -= 0.15;
        }
        let demand_idx = demand_idx.clamp(0.0, 1.0);

        let mut skill_scarcity = BTreeMap::new();
        if role.contains("software") || role.contains("data") {
            skill_scarcity.extend(
                SOFTWARE_SCARCITY
                    .iter()
                    .map(|(skill, scarcity)| (skill.to_string(), *scarcity)),
            );
        }
        if role.contains("finance") || role.contains("investment") {
            skill_scarcity.extend(
                FINANCE_SCARCITY
                    .iter()
                    .map(|(skill, scarcity)| (skill.to_string(), *scarcity)),
            );
        }

        let comp_momentum = if demand_idx > 0.7 {
            0.15
        } else if demand_idx > 0.6 {
            0.05
        } else if demand_idx < 0.4 {
            -0.10
        } else {
            0.0
        };

        MarketSignal {
            demand_idx,
            skill_scarcity,
            comp_momentum,
        }
    }
}

#[async_trait]
impl MarketSignalProvider for HeuristicMarketProvider {
    async fn fetch_signal(
        &self,
        role_family: &str,
        industry: &str,
        geo: Option<&str>,
    ) -> Result<MarketSnapshot, MarketError> {
        let signal = self.signal_for(role_family, industry);
        signal.validate()?;

        Ok(MarketSnapshot {
            role_family: role_family.to_string(),
            industry: industry.to_string(),
            geo: geo.map(str::to_string),
            as_of: self.as_of,
            signal,
        })
    }
}
