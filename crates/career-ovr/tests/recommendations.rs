use chrono::{DateTime, Duration, NaiveDate, Utc};

use career_ovr::activity::ActivityLedger;
use career_ovr::clock;
use career_ovr::profile::{
    ActivityEvent, EducationRecord, EmploymentKind, ExperienceRecord, ProfileSnapshot,
    SkillRecord,
};
use career_ovr::rating::{Factor, RatingEngine};
use career_ovr::recommendations::{recommend, MAX_RECOMMENDATIONS};

fn now() -> DateTime<Utc> {
    clock::start_of_day(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"))
}

fn analyst(bullets: &[&str]) -> ExperienceRecord {
    ExperienceRecord {
        title: "Financial Analyst".to_string(),
        organization: "Deloitte".to_string(),
        organization_tier: None,
        industry: Some("Consulting".to_string()),
        start_date: NaiveDate::from_ymd_opt(2023, 7, 1).expect("valid date"),
        end_date: None,
        employment: EmploymentKind::FullTime,
        impact_score: Some(0.6),
        bullets: bullets.iter().map(|bullet| bullet.to_string()).collect(),
        geography: None,
    }
}

fn actions(profile: &ProfileSnapshot, overall: u8) -> Vec<String> {
    recommend(profile, overall, now())
        .into_iter()
        .map(|recommendation| recommendation.action)
        .collect()
}

#[test]
fn empty_profile_mentions_education_and_experience() {
    let profile = ProfileSnapshot::default();
    let overall = RatingEngine::default()
        .rate_at(&profile, now())
        .expect("rated")
        .overall;

    let recommendations = recommend(&profile, overall, now());

    assert!(recommendations
        .iter()
        .any(|rec| rec.action == "Add education history" && rec.category == Factor::Education));
    assert!(recommendations.iter().any(|rec| {
        rec.action == "Add internship or work experience" && rec.category == Factor::Experience
    }));
    assert!(recommendations
        .windows(2)
        .all(|pair| pair[0].estimated_delta >= pair[1].estimated_delta));
    assert!(recommendations.len() <= MAX_RECOMMENDATIONS);
}

#[test]
fn quantified_history_drops_the_quantify_nudge() {
    let vague = ProfileSnapshot {
        experiences: vec![analyst(&["Supported audits", "Reduced close time by 2 days"])],
        ..ProfileSnapshot::default()
    };
    assert!(actions(&vague, 50).contains(&"Quantify achievements".to_string()));

    let quantified = ProfileSnapshot {
        experiences: vec![analyst(&[
            "Reduced close time by 2 days",
            "Saved $40k in vendor fees",
            "Improved forecast accuracy to 95%",
        ])],
        ..ProfileSnapshot::default()
    };
    assert!(!actions(&quantified, 50).contains(&"Quantify achievements".to_string()));
}

#[test]
fn complete_profile_only_hears_about_what_is_missing() {
    let profile = ProfileSnapshot {
        education: vec![EducationRecord {
            institution: "NYU".to_string(),
            institution_tier: None,
            degree: "BS Finance".to_string(),
            major: Some("Finance".to_string()),
            gpa: Some(3.6),
            gpa_scale: None,
            start_date: None,
            end_date: None,
        }],
        experiences: vec![analyst(&[
            "Reduced close time by 2 days",
            "Saved $40k in vendor fees",
            "Improved forecast accuracy to 95%",
        ])],
        skills: ["Excel", "SQL", "Python", "Tableau", "VBA"]
            .iter()
            .map(|name| SkillRecord {
                name: name.to_string(),
                level: Some(4),
                verified: true,
                last_used: None,
            })
            .collect(),
        ..ProfileSnapshot::default()
    };

    assert_eq!(
        actions(&profile, 70),
        vec!["Earn a certification", "Log recent activities"]
    );
    assert_eq!(actions(&profile, 85), vec!["Log recent activities"]);
}

#[test]
fn admitted_activity_silences_the_activity_nudge() {
    let mut ledger = ActivityLedger::new();
    ledger
        .admit(
            ActivityEvent::standard("networking_call", now() - Duration::days(3), None)
                .expect("known event type"),
        )
        .expect("under cap");

    let profile = ProfileSnapshot {
        events: ledger.into_events(),
        ..ProfileSnapshot::default()
    };

    assert!(!actions(&profile, 20).contains(&"Log recent activities".to_string()));
}
