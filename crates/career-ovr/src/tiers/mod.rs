//! Prestige tiers for organizations and institutions.
//!
//! Lookup is exact first, then a bidirectional substring scan in table order; misses
//! default to tier 3 so an unknown entity is never treated as the worst tier.

mod tables;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::profile::ValidationError;
use tables::{INSTITUTION_TIERS, ORGANIZATION_TIERS};

/// Tier assigned when no table entry matches.
pub const DEFAULT_TIER: u8 = 3;

const HIGHEST_CLASSIFIED_TIER: u8 = 3;

/// Which curated table a name is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierTable {
    Organization,
    Institution,
}

impl TierTable {
    fn entries(self) -> &'static [(&'static str, u8)] {
        match self {
            TierTable::Organization => ORGANIZATION_TIERS,
            TierTable::Institution => INSTITUTION_TIERS,
        }
    }

    fn exact(self) -> &'static HashMap<&'static str, u8> {
        static ORGANIZATIONS: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();
        static INSTITUTIONS: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();

        let cell = match self {
            TierTable::Organization => &ORGANIZATIONS,
            TierTable::Institution => &INSTITUTIONS,
        };
        cell.get_or_init(|| self.entries().iter().copied().collect())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Classify a free-text name against one of the curated tables.
pub fn tier_of(table: TierTable, name: &str) -> u8 {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return DEFAULT_TIER;
    }

    if let Some(tier) = table.exact().get(normalized.as_str()) {
        return *tier;
    }

    table
        .entries()
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        .map(|(_, tier)| *tier)
        .unwrap_or(DEFAULT_TIER)
}

pub fn company_tier(name: &str) -> u8 {
    tier_of(TierTable::Organization, name)
}

pub fn school_tier(name: &str) -> u8 {
    tier_of(TierTable::Institution, name)
}

/// Normalized [0, 1] score for a tier. `None` means no entity was supplied at all and
/// scores zero, while a tier the table does not list falls back to the unknown-tier 0.5.
pub fn tier_to_score(tier: Option<u8>) -> f64 {
    match tier {
        None => 0.0,
        Some(1) => 1.0,
        Some(2) => 0.75,
        Some(3) => 0.5,
        Some(4) => 0.3,
        Some(5) => 0.15,
        Some(_) => 0.5,
    }
}

/// Read-only classifier with optional user-submitted corrections.
#[derive(Debug, Clone, Default)]
pub struct TierClassifier {
    overrides: BTreeMap<(TierTable, String), u8>,
}

impl TierClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a classifier whose overrides win over the curated tables.
    pub fn with_overrides<I, S>(overrides: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (TierTable, S, u8)>,
        S: AsRef<str>,
    {
        let mut classifier = Self::default();
        for (table, name, tier) in overrides {
            let name = name.as_ref();
            if tier == 0 || tier > HIGHEST_CLASSIFIED_TIER {
                return Err(ValidationError::UnknownTier {
                    field: format!("override[{name}]"),
                    tier,
                });
            }
            classifier.overrides.insert((table, normalize(name)), tier);
        }
        Ok(classifier)
    }

    pub fn classify(&self, table: TierTable, name: &str) -> u8 {
        self.overrides
            .get(&(table, normalize(name)))
            .copied()
            .unwrap_or_else(|| tier_of(table, name))
    }

    /// Tier for a record: the explicit value when present, otherwise the classified one.
    /// A blank name yields `None` so that "nothing supplied" scores zero.
    pub fn resolve(&self, table: TierTable, name: &str, explicit: Option<u8>) -> Option<u8> {
        explicit.or_else(|| {
            if name.trim().is_empty() {
                None
            } else {
                Some(self.classify(table, name))
            }
        })
    }

    pub fn score(&self, table: TierTable, name: &str, explicit: Option<u8>) -> f64 {
        tier_to_score(self.resolve(table, name, explicit))
    }
}
