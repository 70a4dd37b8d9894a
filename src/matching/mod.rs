//! Donor-dispatch decision logic: scoring, behavior prediction, strategy
//! selection, and the feedback loop that recalibrates both.

pub mod clock;
pub mod domain;
pub mod learning;
mod prediction;
mod reason;
mod scoring;
pub mod service;
mod strategy;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    DonorRecord, Prediction, RequestContext, ScoreBreakdown, ScoredDonor, Strategy, StrategyKind,
    Urgency,
};
pub use learning::{DonorStats, LearningState};
pub use service::MatchEngine;

/// Distance under which a donor counts as close enough for the critical-case
/// scoring bonus and the proximity success bump.
pub(crate) const CRITICAL_PROXIMITY_KM: f64 = 5.0;

/// Round to two decimals for presentation-stable scores and probabilities.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal for predicted minutes.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
