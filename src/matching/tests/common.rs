use std::sync::Arc;

use crate::config::MatchConfig;
use crate::matching::clock::FixedClock;
use crate::matching::domain::{
    DonorRecord, Prediction, RequestContext, ScoreBreakdown, ScoredDonor, Urgency,
};
use crate::matching::service::MatchEngine;

/// Engine with default weights and the clock pinned to `hour`.
pub(super) fn engine_at(hour: u32) -> MatchEngine {
    MatchEngine::with_clock(MatchConfig::default(), Arc::new(FixedClock(hour)))
}

/// The worked example: 2 km away, exact match, eligible, active within the
/// hour, reliability 90, no feedback history.
pub(super) fn ideal_donor() -> DonorRecord {
    DonorRecord {
        donor_id: "donor-ideal".to_string(),
        blood_group: "O+".to_string(),
        distance: 2.0,
        reliability_score: 90.0,
        can_donate: true,
        days_since_last_donation: 120,
        is_available: true,
        last_active_hours: 0.5,
    }
}

/// Weak candidate: far away, mismatched, recently donated, offline.
pub(super) fn weak_donor() -> DonorRecord {
    DonorRecord {
        donor_id: "donor-weak".to_string(),
        blood_group: "AB-".to_string(),
        distance: 30.0,
        reliability_score: 35.0,
        can_donate: false,
        days_since_last_donation: 20,
        is_available: false,
        last_active_hours: 48.0,
    }
}

pub(super) fn context(urgency: Urgency) -> RequestContext {
    RequestContext::new("O+", urgency)
}

/// Ranked entry with just the fields the strategy recommender reads.
pub(super) fn ranked(donor_id: &str, total_score: f64, success_probability: f64) -> ScoredDonor {
    ScoredDonor {
        donor_id: donor_id.to_string(),
        total_score,
        confidence: 0.5,
        score_breakdown: ScoreBreakdown {
            total: total_score,
            confidence: 0.5,
            distance: 0.0,
            reliability: 0.0,
            eligibility: 0.0,
            response_history: 0.0,
            blood_match: 0.0,
            availability: 0.0,
        },
        predictions: Prediction {
            response_time_minutes: 15.0,
            success_probability,
        },
        reason: "available and compatible".to_string(),
    }
}

pub(super) fn ranked_pool(count: usize, total_score: f64, success_probability: f64) -> Vec<ScoredDonor> {
    (0..count)
        .map(|i| ranked(&format!("donor-{i}"), total_score, success_probability))
        .collect()
}
