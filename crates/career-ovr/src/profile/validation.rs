use super::domain::{MarketSignal, ProfileSnapshot};

/// Shape errors raised before any scoring starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number (found {value})")]
    NonFinite { field: String, value: f64 },
    #[error("{field} must lie within [{min}, {max}] (found {value})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} ends before it starts")]
    InvertedDates { field: String },
    #[error("tier {tier} for {field} is not in the tier table")]
    UnknownTier { field: String, tier: u8 },
    #[error("weight for {factor} must be a non-negative finite number (found {value})")]
    InvalidWeight { factor: &'static str, value: f64 },
}

const MAX_TABLE_TIER: u8 = 5;

fn finite(field: impl Into<String>, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite {
            field: field.into(),
            value,
        })
    }
}

fn within(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    let field = field.into();
    let value = finite(field.clone(), value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn known_tier(field: impl Into<String>, tier: Option<u8>) -> Result<(), ValidationError> {
    match tier {
        Some(tier) if tier == 0 || tier > MAX_TABLE_TIER => Err(ValidationError::UnknownTier {
            field: field.into(),
            tier,
        }),
        _ => Ok(()),
    }
}

impl ProfileSnapshot {
    /// Reject malformed records; sparse profiles are always valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (idx, edu) in self.education.iter().enumerate() {
            let field = format!("education[{idx}]");
            known_tier(format!("{field}.institution_tier"), edu.institution_tier)?;
            if let Some(gpa) = edu.gpa {
                within(format!("{field}.gpa"), gpa, 0.0, f64::MAX)?;
            }
            if let Some(scale) = edu.gpa_scale {
                let scale = finite(format!("{field}.gpa_scale"), scale)?;
                if scale <= 0.0 {
                    return Err(ValidationError::OutOfRange {
                        field: format!("{field}.gpa_scale"),
                        min: f64::MIN_POSITIVE,
                        max: f64::MAX,
                        value: scale,
                    });
                }
            }
            if let (Some(start), Some(end)) = (edu.start_date, edu.end_date) {
                if end < start {
                    return Err(ValidationError::InvertedDates { field });
                }
            }
        }

        for (idx, exp) in self.experiences.iter().enumerate() {
            let field = format!("experiences[{idx}]");
            known_tier(format!("{field}.organization_tier"), exp.organization_tier)?;
            if let Some(impact) = exp.impact_score {
                within(format!("{field}.impact_score"), impact, 0.0, 1.0)?;
            }
            if exp.end_date.is_some_and(|end| end < exp.start_date) {
                return Err(ValidationError::InvertedDates { field });
            }
        }

        for (idx, skill) in self.skills.iter().enumerate() {
            if let Some(level) = skill.level {
                within(format!("skills[{idx}].level"), f64::from(level), 1.0, 5.0)?;
            }
        }

        for (idx, cert) in self.certifications.iter().enumerate() {
            if let (Some(issued), Some(expires)) = (cert.issued_on, cert.expires_on) {
                if expires < issued {
                    return Err(ValidationError::InvertedDates {
                        field: format!("certifications[{idx}]"),
                    });
                }
            }
        }

        for (idx, event) in self.events.iter().enumerate() {
            within(format!("events[{idx}].value"), event.value, 0.0, f64::MAX)?;
        }

        if let Some(signal) = &self.market_signal {
            signal.validate()?;
        }

        Ok(())
    }
}

impl MarketSignal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        within("market_signal.demand_idx", self.demand_idx, 0.0, 1.0)?;
        within("market_signal.comp_momentum", self.comp_momentum, -1.0, 1.0)?;
        for (skill, scarcity) in &self.skill_scarcity {
            within(
                format!("market_signal.skill_scarcity[{skill}]"),
                *scarcity,
                0.0,
                1.0,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::domain::{
        ActivityEvent, EducationRecord, EmploymentKind, ExperienceRecord, SkillRecord,
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn experience() -> ExperienceRecord {
        ExperienceRecord {
            title: "Analyst".to_string(),
            organization: "Acme".to_string(),
            organization_tier: None,
            industry: None,
            start_date: date(2022, 1, 1),
            end_date: None,
            employment: EmploymentKind::FullTime,
            impact_score: None,
            bullets: Vec::new(),
            geography: None,
        }
    }

    #[test]
    fn empty_profile_is_valid() {
        assert_eq!(ProfileSnapshot::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_nan_gpa() {
        let profile = ProfileSnapshot {
            education: vec![EducationRecord {
                institution: "Purdue".to_string(),
                institution_tier: None,
                degree: "BS".to_string(),
                major: None,
                gpa: Some(f64::NAN),
                gpa_scale: None,
                start_date: None,
                end_date: None,
            }],
            ..ProfileSnapshot::default()
        };

        match profile.validate() {
            Err(ValidationError::NonFinite { field, .. }) => assert_eq!(field, "education[0].gpa"),
            other => panic!("expected non-finite gpa, got {other:?}"),
        }
    }

    #[test]
    fn rejects_inverted_experience_dates() {
        let mut exp = experience();
        exp.end_date = Some(date(2021, 6, 1));
        let profile = ProfileSnapshot {
            experiences: vec![exp],
            ..ProfileSnapshot::default()
        };

        assert!(matches!(
            profile.validate(),
            Err(ValidationError::InvertedDates { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_impact_and_level() {
        let mut exp = experience();
        exp.impact_score = Some(1.4);
        let profile = ProfileSnapshot {
            experiences: vec![exp],
            ..ProfileSnapshot::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));

        let profile = ProfileSnapshot {
            skills: vec![SkillRecord {
                name: "Rust".to_string(),
                level: Some(7),
                verified: false,
                last_used: None,
            }],
            ..ProfileSnapshot::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_tier_outside_table() {
        let mut exp = experience();
        exp.organization_tier = Some(9);
        let profile = ProfileSnapshot {
            experiences: vec![exp],
            ..ProfileSnapshot::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ValidationError::UnknownTier {
                field: "experiences[0].organization_tier".to_string(),
                tier: 9,
            })
        );
    }

    #[test]
    fn rejects_negative_event_value() {
        let profile = ProfileSnapshot {
            events: vec![ActivityEvent {
                kind: "blog_post".to_string(),
                value: -3.0,
                created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                proof_url: None,
            }],
            ..ProfileSnapshot::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn rejects_market_signal_out_of_bounds() {
        let mut scarcity = BTreeMap::new();
        scarcity.insert("Rust".to_string(), 1.2);
        let signal = MarketSignal {
            demand_idx: 0.6,
            skill_scarcity: scarcity,
            comp_momentum: 0.1,
        };
        assert!(signal.validate().is_err());

        let signal = MarketSignal {
            demand_idx: 0.6,
            skill_scarcity: BTreeMap::new(),
            comp_momentum: -1.5,
        };
        assert!(signal.validate().is_err());
    }
}
