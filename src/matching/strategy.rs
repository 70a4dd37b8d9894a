use super::domain::{RequestContext, ScoredDonor, Strategy, StrategyKind, Urgency};
use super::round2;

/// Composite score at or above which a donor counts toward the strong pool.
const TOP_DONOR_THRESHOLD: f64 = 60.0;
/// How many of the leading donors feed the mean success probability.
const SUCCESS_SAMPLE: usize = 10;

/// Choose a dispatch policy from the ranked donor list and request context.
///
/// The input is expected to be sorted descending by composite score, as
/// produced by the engine; urgency is the primary discriminator, refined by
/// the size of the strong pool and the mean success probability of the
/// leading candidates.
pub(crate) fn recommend(scored: &[ScoredDonor], context: &RequestContext) -> Strategy {
    let top_donors = scored
        .iter()
        .filter(|d| d.total_score >= TOP_DONOR_THRESHOLD)
        .count();
    let mean_success = mean_success_probability(scored);

    let (kind, reasoning) = match context.urgency {
        Urgency::Critical if top_donors >= 5 => (
            StrategyKind::Hybrid {
                top_donor_count: 5,
                broadcast_after_minutes: 5,
            },
            "Critical urgency: notify top 5 donors immediately, broadcast if no response in 5 minutes",
        ),
        Urgency::Critical => (
            StrategyKind::Broadcast {
                broadcast_radius_km: 20,
            },
            "Critical urgency with few high-score donors: immediate broadcast to wider area",
        ),
        Urgency::Urgent if top_donors >= 3 && mean_success >= 0.6 => (
            StrategyKind::Targeted {
                top_donor_count: top_donors.min(5) as u32,
                escalate_after_minutes: 15,
            },
            "Urgent request with good candidates: targeted approach with escalation plan",
        ),
        Urgency::Urgent => (
            StrategyKind::Escalation {
                initial_donor_count: 3,
                add_donors_every_minutes: 10,
                max_donors: 10,
            },
            "Urgent with moderate candidates: gradual escalation to avoid donor fatigue",
        ),
        Urgency::Normal if top_donors >= 5 => (
            StrategyKind::Targeted {
                top_donor_count: 3,
                escalate_after_minutes: 30,
            },
            "Normal request with strong matches: conservative targeted approach",
        ),
        Urgency::Normal => (
            StrategyKind::Broadcast {
                broadcast_radius_km: 10,
            },
            "Normal request: moderate broadcast to find suitable donors",
        ),
    };

    Strategy {
        kind,
        reasoning: reasoning.to_string(),
        confidence: round2(f64::min(0.9, mean_success + 0.2)),
    }
}

/// Mean predicted success probability across the leading candidates; 0 when
/// the list is empty so an empty pool still yields a valid strategy.
fn mean_success_probability(scored: &[ScoredDonor]) -> f64 {
    let sample: Vec<f64> = scored
        .iter()
        .take(SUCCESS_SAMPLE)
        .map(|d| d.predictions.success_probability)
        .collect();
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}
