use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{MarketSignalProvider, MarketSnapshot};

/// Role family / industry / geography combination tracked by the market sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSegment {
    pub role_family: String,
    pub industry: String,
    #[serde(default)]
    pub geo: Option<String>,
}

impl MarketSegment {
    pub fn new(role_family: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            role_family: role_family.into(),
            industry: industry.into(),
            geo: None,
        }
    }
}

/// Segments swept when no profile has declared a target yet.
pub fn default_segments() -> Vec<MarketSegment> {
    vec![
        MarketSegment::new("Software Engineering", "Technology"),
        MarketSegment::new("Data Science", "Technology"),
        MarketSegment::new("Investment Banking", "Finance"),
        MarketSegment::new("Investment Operations", "Asset Management"),
        MarketSegment::new("Product Management", "Technology"),
    ]
}

/// Fetch a snapshot per segment; failing segments are logged and skipped. An empty slice
/// sweeps [`default_segments`].
pub async fn sync_segments<P>(provider: &P, segments: &[MarketSegment]) -> Vec<MarketSnapshot>
where
    P: MarketSignalProvider + ?Sized,
{
    let defaults;
    let segments = if segments.is_empty() {
        defaults = default_segments();
        defaults.as_slice()
    } else {
        segments
    };

    let mut snapshots = Vec::with_capacity(segments.len());
    for segment in segments {
        match provider
            .fetch_signal(
                &segment.role_family,
                &segment.industry,
                segment.geo.as_deref(),
            )
            .await
        {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(err) => warn!(
                role_family = %segment.role_family,
                industry = %segment.industry,
                error = %err,
                "skipping market segment"
            ),
        }
    }

    info!(
        requested = segments.len(),
        synced = snapshots.len(),
        "market signal sweep finished"
    );
    snapshots
}
