use chrono::{DateTime, Utc};

use super::FactorScore;
use crate::profile::CertificationRecord;
use crate::rating::Factor;

const CLOUD_NAME_KEYWORDS: [&str; 3] = ["aws", "google cloud", "azure"];
const CLOUD_AUTHORITY_KEYWORDS: [&str; 3] = ["amazon", "google", "microsoft"];
const PROFESSIONAL_KEYWORDS: [&str; 4] = ["cfa", "cpa", "pmp", "cissp"];

/// Recognition class of a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationClass {
    CloudVendor,
    Professional,
    General,
}

impl CertificationClass {
    pub fn classify(record: &CertificationRecord) -> Self {
        let name = record.name.to_lowercase();
        let authority = record
            .authority
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        if CLOUD_NAME_KEYWORDS.iter().any(|kw| name.contains(kw))
            || CLOUD_AUTHORITY_KEYWORDS.iter().any(|kw| authority.contains(kw))
        {
            CertificationClass::CloudVendor
        } else if PROFESSIONAL_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            CertificationClass::Professional
        } else {
            CertificationClass::General
        }
    }

    pub fn points(self) -> f64 {
        match self {
            CertificationClass::CloudVendor => 2.5,
            CertificationClass::Professional => 3.0,
            CertificationClass::General => 1.5,
        }
    }
}

pub fn score(records: &[CertificationRecord], now: DateTime<Utc>) -> FactorScore {
    if records.is_empty() {
        return FactorScore::empty(Some("No certifications listed"));
    }

    let active: Vec<&CertificationRecord> = records
        .iter()
        .filter(|record| !record.is_expired(now))
        .collect();
    if active.is_empty() {
        return FactorScore::empty(Some("All certifications have expired"));
    }

    let points: f64 = active
        .iter()
        .map(|record| CertificationClass::classify(record).points())
        .sum();
    let plural = if active.len() == 1 { "" } else { "s" };
    let explanations = vec![format!("{} active certification{plural}", active.len())];

    FactorScore::capped(points, Factor::Certifications.cap(), explanations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn cert(name: &str, authority: Option<&str>, expires_on: Option<NaiveDate>) -> CertificationRecord {
        CertificationRecord {
            name: name.to_string(),
            authority: authority.map(str::to_string),
            issued_on: None,
            expires_on,
        }
    }

    #[test]
    fn classifies_by_name_and_authority() {
        assert_eq!(
            CertificationClass::classify(&cert("AWS Certified Solutions Architect", None, None)),
            CertificationClass::CloudVendor
        );
        assert_eq!(
            CertificationClass::classify(&cert("Data Engineer", Some("Google"), None)),
            CertificationClass::CloudVendor
        );
        assert_eq!(
            CertificationClass::classify(&cert("CFA Level II", None, None)),
            CertificationClass::Professional
        );
        assert_eq!(
            CertificationClass::classify(&cert("First Aid", Some("Red Cross"), None)),
            CertificationClass::General
        );
    }

    #[test]
    fn expired_certifications_are_skipped() {
        let now = clock::start_of_day(date(2025, 6, 1));
        let records = vec![
            cert("PMP", None, Some(date(2024, 1, 1))),
            cert("Azure Fundamentals", None, Some(date(2026, 1, 1))),
        ];
        let result = score(&records, now);
        assert_eq!(result.raw, 2.5);
        assert_eq!(result.explanations, vec!["1 active certification"]);
    }

    #[test]
    fn all_expired_scores_zero() {
        let now = clock::start_of_day(date(2025, 6, 1));
        let result = score(&[cert("PMP", None, Some(date(2025, 5, 31)))], now);
        assert_eq!(result.raw, 0.0);
        assert_eq!(result.explanations, vec!["All certifications have expired"]);
    }

    #[test]
    fn caps_at_eight() {
        let now = clock::start_of_day(date(2025, 6, 1));
        let records: Vec<CertificationRecord> =
            (0..4).map(|_| cert("CISSP", None, None)).collect();
        assert_eq!(score(&records, now).raw, 8.0);
    }
}
