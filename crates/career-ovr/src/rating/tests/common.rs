use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::clock;
use crate::profile::{
    ActivityEvent, CertificationRecord, EducationRecord, EmploymentKind, ExperienceRecord,
    MarketSignal, ProfileSnapshot, SkillRecord,
};
use crate::rating::RatingEngine;

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn now() -> DateTime<Utc> {
    clock::start_of_day(date(2025, 6, 1))
}

pub(super) fn engine() -> RatingEngine {
    RatingEngine::default()
}

pub(super) fn skill(name: &str, level: u8, verified: bool) -> SkillRecord {
    SkillRecord {
        name: name.to_string(),
        level: Some(level),
        verified,
        last_used: Some(date(2025, 5, 1)),
    }
}

pub(super) fn elite_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        education: vec![EducationRecord {
            institution: "MIT".to_string(),
            institution_tier: None,
            degree: "Master's in Computer Science".to_string(),
            major: Some("Computer Science".to_string()),
            gpa: Some(3.9),
            gpa_scale: None,
            start_date: Some(date(2018, 9, 1)),
            end_date: Some(date(2020, 5, 31)),
        }],
        experiences: vec![ExperienceRecord {
            title: "Senior Software Engineer".to_string(),
            organization: "Google".to_string(),
            organization_tier: None,
            industry: Some("Technology".to_string()),
            start_date: date(2022, 6, 1),
            end_date: None,
            employment: EmploymentKind::FullTime,
            impact_score: Some(0.9),
            bullets: vec![
                "Led team of 5 engineers to deliver ML platform".to_string(),
                "Increased model accuracy by 15%".to_string(),
                "Reduced inference latency by 40%".to_string(),
            ],
            geography: Some("US".to_string()),
        }],
        skills: vec![
            skill("Python", 5, true),
            skill("Machine Learning", 5, true),
            skill("AWS", 4, true),
        ],
        certifications: vec![CertificationRecord {
            name: "AWS Certified Solutions Architect".to_string(),
            authority: Some("Amazon".to_string()),
            issued_on: Some(date(2024, 1, 15)),
            expires_on: Some(date(2027, 1, 15)),
        }],
        events: Vec::new(),
        market_signal: None,
    }
}

/// Analyst whose only role ended two years before `now()`.
pub(super) fn stale_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        experiences: vec![ExperienceRecord {
            title: "Analyst".to_string(),
            organization: "OldCorp".to_string(),
            organization_tier: Some(3),
            industry: None,
            start_date: date(2020, 1, 1),
            end_date: Some(date(2023, 6, 1)),
            employment: EmploymentKind::FullTime,
            impact_score: None,
            bullets: vec!["Prepared weekly reports".to_string()],
            geography: None,
        }],
        ..ProfileSnapshot::default()
    }
}

pub(super) fn hot_market() -> MarketSignal {
    MarketSignal {
        demand_idx: 0.8,
        skill_scarcity: BTreeMap::from([("Python".to_string(), 0.9)]),
        comp_momentum: 0.15,
    }
}

pub(super) fn event(kind: &str, value: f64, created_at: DateTime<Utc>) -> ActivityEvent {
    ActivityEvent {
        kind: kind.to_string(),
        value,
        created_at,
        proof_url: None,
    }
}
