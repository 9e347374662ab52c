//! Canonical agent model and trust scoring.
//!
//! Every protocol adapter normalizes its source payload into an [`Agent`].
//! Downstream code (scoring, registration, the agent record) depends only on
//! the fields defined here, never on the source format.

pub mod definition;
pub mod trust;

pub use definition::{Agent, Skill, Skills, DEFAULT_NAME, DEFAULT_OWNER, DEFAULT_VERSION};
pub use trust::calculate_trust_score;
