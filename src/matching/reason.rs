use super::domain::{Prediction, ScoreBreakdown};

/// Derive the short human-readable justification shown alongside a ranked
/// donor. Rules fire in a fixed order so the wording is stable for a given
/// breakdown.
pub(crate) fn reason_for(breakdown: &ScoreBreakdown, prediction: &Prediction) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    if breakdown.distance >= 80.0 {
        reasons.push("very close proximity");
    } else if breakdown.distance >= 60.0 {
        reasons.push("nearby location");
    }

    if breakdown.reliability >= 80.0 {
        reasons.push("high reliability score");
    }

    if breakdown.eligibility >= 90.0 {
        reasons.push("eligible to donate");
    }

    if breakdown.blood_match >= 90.0 {
        reasons.push("exact blood match");
    }

    if prediction.success_probability >= 0.7 {
        reasons.push("high success probability");
    }

    if reasons.is_empty() {
        reasons.push("available and compatible");
    }

    reasons.join(", ")
}
