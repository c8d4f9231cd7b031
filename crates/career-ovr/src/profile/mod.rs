//! Structured career profile records consumed by the rating engine.
//!
//! Every record is an immutable input. Upstream extraction hands the engine a
//! [`ProfileSnapshot`]; [`ProfileSnapshot::validate`] is the only gate between those
//! records and scoring.

pub mod domain;
pub(crate) mod signals;
mod validation;

pub use domain::{
    ActivityEvent, CertificationRecord, EducationRecord, EmploymentKind, ExperienceRecord,
    MarketSignal, ProfileSnapshot, SkillRecord,
};
pub use validation::ValidationError;
