use super::domain::{DonorRecord, Prediction, RequestContext, Urgency};
use super::learning::DonorStats;
use super::{round1, round2, CRITICAL_PROXIMITY_KM};

/// Assumed response time for donors with no feedback history.
const DEFAULT_RESPONSE_MINUTES: f64 = 25.0;
/// Assumed success rate for donors with no feedback history.
const DEFAULT_SUCCESS_RATE: f64 = 0.5;

const SUCCESS_PROBABILITY_FLOOR: f64 = 0.05;
const SUCCESS_PROBABILITY_CEIL: f64 = 0.95;

/// Estimate how this donor will behave for this request right now.
///
/// Pure in its inputs: the caller supplies the learning snapshot and the
/// local hour, so the same arguments always yield the same prediction.
pub(crate) fn predict(
    donor: &DonorRecord,
    context: &RequestContext,
    stats: Option<DonorStats>,
    hour: u32,
) -> Prediction {
    let base_response = stats
        .map(|s| s.avg_response_minutes)
        .unwrap_or(DEFAULT_RESPONSE_MINUTES);

    let mut response_time = base_response * hour_multiplier(hour);
    if context.urgency == Urgency::Critical {
        // Donors answer faster when the request is flagged critical.
        response_time *= 0.7;
    }

    let mut success = stats.map(|s| s.success_rate).unwrap_or(DEFAULT_SUCCESS_RATE);
    if donor.can_donate {
        success += 0.20;
    }
    if donor.distance < CRITICAL_PROXIMITY_KM {
        success += 0.15;
    }
    if donor.is_available {
        success += 0.10;
    }
    if context.urgency == Urgency::Critical {
        success += 0.05;
    }
    success = success.clamp(SUCCESS_PROBABILITY_FLOOR, SUCCESS_PROBABILITY_CEIL);

    Prediction {
        response_time_minutes: round1(response_time),
        success_probability: round2(success),
    }
}

/// Time-of-day effect on response latency: slow overnight, fast during
/// business hours, neutral in the shoulders.
fn hour_multiplier(hour: u32) -> f64 {
    match hour {
        22..=23 | 0..=6 => 2.0,
        9..=17 => 0.8,
        _ => 1.0,
    }
}
