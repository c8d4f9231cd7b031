//! Market signal provider capability and the adjustments derived from a signal.
//!
//! Providers are resolved by the caller before rating; the engine itself never calls out.

mod heuristic;
mod sync;

pub use heuristic::HeuristicMarketProvider;
pub use sync::{default_segments, sync_segments, MarketSegment};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::MarketSignal;

const NEUTRAL_SCARCITY: f64 = 0.5;
const TREND_FLOOR: f64 = 0.90;
const TREND_CEILING: f64 = 1.10;

/// Signal plus the query it answers, as returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub role_family: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    pub as_of: NaiveDate,
    pub signal: MarketSignal,
}

#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("market provider unavailable: {0}")]
    Unavailable(String),
    #[error("market provider returned an invalid signal: {0}")]
    InvalidSignal(#[from] crate::profile::ValidationError),
}

/// Source of market conditions for a role family and industry.
#[async_trait]
pub trait MarketSignalProvider: Send + Sync {
    async fn fetch_signal(
        &self,
        role_family: &str,
        industry: &str,
        geo: Option<&str>,
    ) -> Result<MarketSnapshot, MarketError>;
}

/// Score multiplier within [0.90, 1.10] from demand and compensation momentum.
pub fn trend_multiplier(signal: &MarketSignal) -> f64 {
    let adjustment = 0.15 * (signal.demand_idx - 0.5) + 0.10 * signal.comp_momentum;
    (1.0 + adjustment).clamp(TREND_FLOOR, TREND_CEILING)
}

/// Weight in [0.5, 1.5]; skills the signal does not mention count as neutral.
pub fn skill_scarcity_weight(skill: &str, signal: &MarketSignal) -> f64 {
    let scarcity = signal
        .skill_scarcity
        .get(skill)
        .copied()
        .unwrap_or(NEUTRAL_SCARCITY);
    0.5 + 1.0 * scarcity
}
