use chrono::{DateTime, Utc};

use super::FactorScore;
use crate::clock;
use crate::profile::ExperienceRecord;
use crate::rating::Factor;
use crate::tiers::{tier_to_score, TierClassifier, TierTable};

const TIER_POINTS: f64 = 12.0;
const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_TENURE_POINT: f64 = 6.0;
const MAX_TENURE_POINTS: f64 = 10.0;
const EXPLAINED_TENURE_MONTHS: f64 = 24.0;

/// Seniority detected across the whole history, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleLevel {
    Senior,
    Analyst,
    Intern,
    Other,
}

impl RoleLevel {
    pub fn points(self) -> f64 {
        match self {
            RoleLevel::Senior => 8.0,
            RoleLevel::Analyst => 5.0,
            RoleLevel::Intern => 3.0,
            RoleLevel::Other => 4.0,
        }
    }

    /// One classification for the whole list: any senior title beats any analyst
    /// title, which beats any intern title.
    pub fn classify<'a>(titles: impl IntoIterator<Item = &'a str>) -> Self {
        let titles: Vec<String> = titles.into_iter().map(str::to_lowercase).collect();
        let any = |keywords: &[&str]| {
            titles
                .iter()
                .any(|title| keywords.iter().any(|keyword| title.contains(keyword)))
        };

        if any(&["senior", "lead", "principal"]) {
            RoleLevel::Senior
        } else if any(&["analyst", "associate"]) {
            RoleLevel::Analyst
        } else if any(&["intern", "co-op"]) {
            RoleLevel::Intern
        } else {
            RoleLevel::Other
        }
    }
}

/// Months in a role, ongoing roles running until `now`. Never negative.
pub fn tenure_months(record: &ExperienceRecord, now: DateTime<Utc>) -> f64 {
    let start = clock::start_of_day(record.start_date);
    let end = record.end_date.map(clock::start_of_day).unwrap_or(now);
    (clock::days_between(start, end) / DAYS_PER_MONTH).max(0.0)
}

pub fn score(
    records: &[ExperienceRecord],
    tiers: &TierClassifier,
    now: DateTime<Utc>,
) -> FactorScore {
    if records.is_empty() {
        return FactorScore::empty(Some("No work experience yet"));
    }

    let mut explanations = Vec::new();

    let resolved: Vec<Option<u8>> = records
        .iter()
        .map(|record| {
            tiers.resolve(
                TierTable::Organization,
                &record.organization,
                record.organization_tier,
            )
        })
        .collect();
    let average_tier = resolved
        .iter()
        .map(|tier| tier_to_score(*tier))
        .sum::<f64>()
        / records.len() as f64;
    if resolved.contains(&Some(1)) {
        explanations.push("Tier-1 company experience".to_string());
    }

    let total_months: f64 = records
        .iter()
        .map(|record| tenure_months(record, now))
        .sum();
    let tenure_points = (total_months / MONTHS_PER_TENURE_POINT).min(MAX_TENURE_POINTS);
    if total_months >= EXPLAINED_TENURE_MONTHS {
        explanations.push(format!(
            "{} years of experience",
            (total_months / 12.0).round()
        ));
    }

    let level = RoleLevel::classify(records.iter().map(|record| record.title.as_str()));
    if level == RoleLevel::Senior {
        explanations.push("Senior-level role".to_string());
    }

    let points = average_tier * TIER_POINTS + tenure_points + level.points();
    FactorScore::capped(points, Factor::Experience.cap(), explanations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::EmploymentKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn role(title: &str, organization: &str, start: NaiveDate, end: Option<NaiveDate>) -> ExperienceRecord {
        ExperienceRecord {
            title: title.to_string(),
            organization: organization.to_string(),
            organization_tier: None,
            industry: None,
            start_date: start,
            end_date: end,
            employment: EmploymentKind::FullTime,
            impact_score: None,
            bullets: Vec::new(),
            geography: None,
        }
    }

    #[test]
    fn role_level_uses_priority_not_first_match() {
        let level = RoleLevel::classify(["Software Intern", "Data Analyst", "Team Lead"]);
        assert_eq!(level, RoleLevel::Senior);
        assert_eq!(
            RoleLevel::classify(["Summer Intern", "Associate Consultant"]),
            RoleLevel::Analyst
        );
        assert_eq!(RoleLevel::classify(["Co-op Student"]), RoleLevel::Intern);
        assert_eq!(RoleLevel::classify(["Engineer"]), RoleLevel::Other);
    }

    #[test]
    fn tenure_is_capped_at_ten_points() {
        let now = clock::start_of_day(date(2025, 1, 1));
        let records = vec![role("Engineer", "", date(2010, 1, 1), None)];
        let result = score(&records, &TierClassifier::new(), now);
        // no tier points for a blank organization, 10 tenure points, 4 role points
        assert!((result.raw - 14.0).abs() < 1e-9);
        assert!(result
            .explanations
            .iter()
            .any(|line| line == "15 years of experience"));
    }

    #[test]
    fn ongoing_role_runs_until_now() {
        let now = clock::start_of_day(date(2025, 1, 31));
        let record = role("Engineer", "Acme", date(2025, 1, 1), None);
        assert!((tenure_months(&record, now) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn future_start_never_goes_negative() {
        let now = clock::start_of_day(date(2025, 1, 1));
        let record = role("Engineer", "Acme", date(2025, 6, 1), None);
        assert_eq!(tenure_months(&record, now), 0.0);
    }

    #[test]
    fn tier_one_senior_history() {
        let now = clock::start_of_day(date(2025, 1, 1));
        let records = vec![role(
            "Senior Engineer",
            "Google",
            date(2019, 1, 1),
            Some(date(2024, 12, 1)),
        )];
        let result = score(&records, &TierClassifier::new(), now);
        assert_eq!(result.raw, Factor::Experience.cap());
        assert!(result
            .explanations
            .contains(&"Tier-1 company experience".to_string()));
        assert!(result.explanations.contains(&"Senior-level role".to_string()));
    }

    #[test]
    fn empty_history_explains_absence() {
        let now = clock::start_of_day(date(2025, 1, 1));
        let result = score(&[], &TierClassifier::new(), now);
        assert_eq!(result.raw, 0.0);
        assert_eq!(result.explanations, vec!["No work experience yet"]);
    }
}
