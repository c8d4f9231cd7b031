//! Deterministic, explainable Overall Rating (OVR) for structured career profiles.
//!
//! [`rating::RatingEngine`] turns a [`profile::ProfileSnapshot`] into a 0..=99 rating with a
//! confidence, a per-factor breakdown and plain-language explanations.
//! [`recommendations::recommend`] proposes actions to raise it.

pub mod activity;
pub mod clock;
pub mod config;
pub mod error;
pub mod market;
pub mod profile;
pub mod rating;
pub mod recommendations;
pub mod telemetry;
pub mod tiers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use profile::{ProfileSnapshot, ValidationError};
pub use rating::{RatingEngine, RatingResult};
pub use recommendations::{recommend, Recommendation};
