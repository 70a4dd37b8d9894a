//! Decision core for emergency blood-donor dispatch.
//!
//! Given a pool of candidate donors and the context of an incoming request,
//! this crate ranks donors by a weighted multi-factor score, predicts each
//! donor's response time and success probability, selects a dispatch strategy,
//! and recalibrates its per-donor predictions from outcome feedback.
//!
//! Transport concerns (HTTP routing, payload validation, health checks) live
//! in the embedding service; this crate exposes pure data-in/data-out calls
//! through [`matching::MatchEngine`] plus the shared [`config`] and
//! [`telemetry`] plumbing that service wires up at startup.

pub mod config;
pub mod matching;
pub mod telemetry;

pub use config::{MatchConfig, ScoringWeights};
pub use matching::{MatchEngine, ScoredDonor, Strategy};
