use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::domain::{DonorRecord, RequestContext, ScoredDonor, Strategy};
use super::learning::{DonorStats, LearningState};
use super::{prediction, reason, scoring, strategy};
use crate::config::{MatchConfig, ScoringWeights};

/// Decision engine composing the scorer, predictor, strategy recommender,
/// and feedback-driven learning state.
///
/// Scoring and strategy selection are pure per call; [`LearningState`] is the
/// only shared state and is internally synchronized, so one engine serves
/// concurrent callers.
pub struct MatchEngine {
    weights: ScoringWeights,
    learning: LearningState,
    clock: Arc<dyn Clock>,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build an engine with an injected clock, for tests and replay tooling.
    pub fn with_clock(config: MatchConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            weights: config.weights,
            learning: LearningState::new(),
            clock,
        }
    }

    /// Score and rank the candidate pool for one request.
    ///
    /// The returned list is sorted descending by composite score; ties keep
    /// their input order (stable sort). An empty pool yields an empty list.
    pub fn score(&self, donors: &[DonorRecord], context: &RequestContext) -> Vec<ScoredDonor> {
        let hour = self.clock.hour();

        let mut scored: Vec<ScoredDonor> = donors
            .iter()
            .map(|donor| {
                let stats = self.learning.stats_for(&donor.donor_id);
                let breakdown = scoring::score_donor(donor, context, stats, &self.weights);
                let predictions = prediction::predict(donor, context, stats, hour);
                ScoredDonor {
                    donor_id: donor.donor_id.clone(),
                    total_score: breakdown.total,
                    confidence: breakdown.confidence,
                    reason: reason::reason_for(&breakdown, &predictions),
                    score_breakdown: breakdown,
                    predictions,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            urgency = context.urgency.label(),
            donors = scored.len(),
            top_score = scored.first().map(|d| d.total_score).unwrap_or(0.0),
            "scored donor pool"
        );

        scored
    }

    /// Select a dispatch strategy for a ranked donor list.
    pub fn recommend_strategy(&self, scored: &[ScoredDonor], context: &RequestContext) -> Strategy {
        let strategy = strategy::recommend(scored, context);
        info!(
            strategy = strategy.kind.label(),
            urgency = context.urgency.label(),
            confidence = strategy.confidence,
            "recommended dispatch strategy"
        );
        strategy
    }

    /// Fold one observed outcome into the donor's learned statistics.
    ///
    /// Feedback for a never-seen donor is a cold start, never an error; the
    /// update only affects future scoring and prediction calls.
    pub fn record_feedback(&self, donor_id: &str, response_time_minutes: f64, success: bool) {
        let updated = self.learning.record(donor_id, response_time_minutes, success);
        debug!(
            donor_id,
            response_time_minutes,
            success,
            avg_response_minutes = updated.avg_response_minutes,
            success_rate = updated.success_rate,
            "recorded donor feedback"
        );
    }

    /// Read-only snapshot of one donor's learned pair, for status surfaces.
    pub fn learning_stats(&self, donor_id: &str) -> Option<DonorStats> {
        self.learning.stats_for(donor_id)
    }

    /// Number of donors with recorded feedback.
    pub fn tracked_donors(&self) -> usize {
        self.learning.tracked_donors()
    }
}
