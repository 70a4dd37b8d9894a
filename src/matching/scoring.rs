use super::domain::{DonorRecord, RequestContext, ScoreBreakdown, Urgency};
use super::learning::DonorStats;
use super::{round2, CRITICAL_PROXIMITY_KM};
use crate::config::ScoringWeights;

/// Assumed average response time for donors with no feedback history.
const DEFAULT_AVG_RESPONSE_MINUTES: f64 = 30.0;
/// Flat bonus for a nearby donor on a critical request.
const CRITICAL_PROXIMITY_BONUS: f64 = 10.0;

/// Score penalty per kilometer of distance.
const DISTANCE_PENALTY_PER_KM: f64 = 5.0;
/// Days since last donation at which a donor counts as near-eligible.
const NEAR_ELIGIBLE_DAYS: u32 = 60;

pub(crate) fn score_donor(
    donor: &DonorRecord,
    context: &RequestContext,
    stats: Option<DonorStats>,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let distance = distance_score(donor.distance);
    let reliability = donor.reliability_score;
    let eligibility = eligibility_score(donor);
    let response_history = response_history_score(stats);
    let blood_match = blood_match_score(donor, context);
    let availability = availability_score(donor);

    let mut total = distance * weights.distance
        + reliability * weights.reliability
        + eligibility * weights.eligibility
        + response_history * weights.response_history
        + blood_match * weights.blood_match
        + availability * weights.availability;

    if context.urgency == Urgency::Critical && donor.distance < CRITICAL_PROXIMITY_KM {
        total += CRITICAL_PROXIMITY_BONUS;
    }

    // Binary bump: any recorded feedback at all raises confidence.
    let historical_points = if stats.is_some() { 1.0 } else { 0.0 };
    let confidence = f64::min(0.9, 0.5 + 0.4 * historical_points);

    ScoreBreakdown {
        total: round2(total),
        confidence: round2(confidence),
        distance: round2(distance),
        reliability: round2(reliability),
        eligibility: round2(eligibility),
        response_history: round2(response_history),
        blood_match: round2(blood_match),
        availability: round2(availability),
    }
}

fn distance_score(distance_km: f64) -> f64 {
    f64::max(0.0, 100.0 - distance_km * DISTANCE_PENALTY_PER_KM)
}

fn eligibility_score(donor: &DonorRecord) -> f64 {
    if donor.can_donate {
        100.0
    } else if donor.days_since_last_donation >= NEAR_ELIGIBLE_DAYS {
        50.0
    } else {
        0.0
    }
}

fn response_history_score(stats: Option<DonorStats>) -> f64 {
    let avg_response = stats
        .map(|s| s.avg_response_minutes)
        .unwrap_or(DEFAULT_AVG_RESPONSE_MINUTES);
    // Faster responders score higher.
    f64::max(0.0, 100.0 - avg_response * 2.0)
}

fn blood_match_score(donor: &DonorRecord, context: &RequestContext) -> f64 {
    if donor.blood_group == context.blood_group {
        100.0
    } else {
        // Compatible but not exact; no full compatibility table is applied.
        70.0
    }
}

fn availability_score(donor: &DonorRecord) -> f64 {
    if donor.is_available && donor.last_active_hours < 1.0 {
        100.0
    } else if donor.is_available && donor.last_active_hours < 6.0 {
        80.0
    } else if donor.is_available {
        50.0
    } else {
        20.0
    }
}
