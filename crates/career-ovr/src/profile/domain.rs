use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;

/// Single education entry; the tier is resolved by the classifier when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub institution: String,
    #[serde(default)]
    pub institution_tier: Option<u8>,
    pub degree: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    /// Grading scale the GPA was reported on; 4.0 when absent.
    #[serde(default)]
    pub gpa_scale: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    #[serde(alias = "fulltime", alias = "full-time")]
    FullTime,
    Internship,
    Contract,
}

/// Work history entry. `end_date` of `None` means the role is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub organization_tier: Option<u8>,
    #[serde(default)]
    pub industry: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub employment: EmploymentKind,
    /// Self-assessed or reviewer-assigned impact in [0, 1].
    #[serde(default)]
    pub impact_score: Option<f64>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub geography: Option<String>,
}

impl ExperienceRecord {
    /// End of the role, treating an open-ended role as running until `today`.
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(today)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    /// Proficiency from 1 (novice) to 5 (expert).
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub last_used: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub name: String,
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
}

impl CertificationRecord {
    /// Expired once the expiry date's midnight has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_on
            .is_some_and(|expiry| clock::start_of_day(expiry) < now)
    }
}

/// Micro-activity carrying an XP-like magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub kind: String,
    pub value: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub proof_url: Option<String>,
}

/// Resolved market conditions for the profile's target role and industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSignal {
    pub demand_idx: f64,
    #[serde(default)]
    pub skill_scarcity: BTreeMap<String, f64>,
    pub comp_momentum: f64,
}

/// The sole input to the rating engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub certifications: Vec<CertificationRecord>,
    #[serde(default)]
    pub events: Vec<ActivityEvent>,
    #[serde(default)]
    pub market_signal: Option<MarketSignal>,
}

impl ProfileSnapshot {
    pub fn is_empty(&self) -> bool {
        self.education.is_empty()
            && self.experiences.is_empty()
            && self.skills.is_empty()
            && self.certifications.is_empty()
            && self.events.is_empty()
    }

    pub fn with_market_signal(mut self, signal: MarketSignal) -> Self {
        self.market_signal = Some(signal);
        self
    }

    pub fn all_bullets(&self) -> impl Iterator<Item = &str> {
        self.experiences
            .iter()
            .flat_map(|experience| experience.bullets.iter().map(String::as_str))
    }
}
