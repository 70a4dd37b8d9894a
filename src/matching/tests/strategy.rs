use super::common::*;
use crate::matching::domain::{StrategyKind, Urgency};
use crate::matching::strategy::recommend;

#[test]
fn critical_with_strong_pool_goes_hybrid() {
    let pool = ranked_pool(6, 75.0, 0.7);
    let strategy = recommend(&pool, &context(Urgency::Critical));

    match strategy.kind {
        StrategyKind::Hybrid {
            top_donor_count,
            broadcast_after_minutes,
        } => {
            assert_eq!(top_donor_count, 5);
            assert_eq!(broadcast_after_minutes, 5);
        }
        other => panic!("expected hybrid, got {other:?}"),
    }
    assert!(strategy.reasoning.contains("Critical urgency"));
}

#[test]
fn critical_with_thin_pool_broadcasts_wide() {
    let pool = ranked_pool(2, 75.0, 0.7);
    let strategy = recommend(&pool, &context(Urgency::Critical));

    match strategy.kind {
        StrategyKind::Broadcast {
            broadcast_radius_km,
        } => assert_eq!(broadcast_radius_km, 20),
        other => panic!("expected broadcast, got {other:?}"),
    }
}

#[test]
fn urgent_with_good_candidates_targets_capped_pool() {
    let pool = ranked_pool(4, 70.0, 0.7);
    let strategy = recommend(&pool, &context(Urgency::Urgent));

    match strategy.kind {
        StrategyKind::Targeted {
            top_donor_count,
            escalate_after_minutes,
        } => {
            assert_eq!(top_donor_count, 4);
            assert_eq!(escalate_after_minutes, 15);
        }
        other => panic!("expected targeted, got {other:?}"),
    }
}

#[test]
fn urgent_target_count_caps_at_five() {
    let pool = ranked_pool(9, 70.0, 0.7);
    let strategy = recommend(&pool, &context(Urgency::Urgent));

    match strategy.kind {
        StrategyKind::Targeted { top_donor_count, .. } => assert_eq!(top_donor_count, 5),
        other => panic!("expected targeted, got {other:?}"),
    }
}

#[test]
fn urgent_with_weak_success_escalates_gradually() {
    let pool = ranked_pool(4, 70.0, 0.4);
    let strategy = recommend(&pool, &context(Urgency::Urgent));

    match strategy.kind {
        StrategyKind::Escalation {
            initial_donor_count,
            add_donors_every_minutes,
            max_donors,
        } => {
            assert_eq!(initial_donor_count, 3);
            assert_eq!(add_donors_every_minutes, 10);
            assert_eq!(max_donors, 10);
        }
        other => panic!("expected escalation, got {other:?}"),
    }
}

#[test]
fn normal_with_strong_pool_targets_top_three() {
    let pool = ranked_pool(5, 80.0, 0.6);
    let strategy = recommend(&pool, &context(Urgency::Normal));

    match strategy.kind {
        StrategyKind::Targeted {
            top_donor_count,
            escalate_after_minutes,
        } => {
            assert_eq!(top_donor_count, 3);
            assert_eq!(escalate_after_minutes, 30);
        }
        other => panic!("expected targeted, got {other:?}"),
    }
}

#[test]
fn normal_with_thin_pool_broadcasts_moderately() {
    let pool = ranked_pool(2, 55.0, 0.5);
    let strategy = recommend(&pool, &context(Urgency::Normal));

    match strategy.kind {
        StrategyKind::Broadcast {
            broadcast_radius_km,
        } => assert_eq!(broadcast_radius_km, 10),
        other => panic!("expected broadcast, got {other:?}"),
    }
}

#[test]
fn empty_pool_yields_valid_strategy() {
    let strategy = recommend(&[], &context(Urgency::Normal));

    match strategy.kind {
        StrategyKind::Broadcast {
            broadcast_radius_km,
        } => assert_eq!(broadcast_radius_km, 10),
        other => panic!("expected broadcast, got {other:?}"),
    }
    // mean success defaults to 0 when nothing is scored.
    assert_eq!(strategy.confidence, 0.2);
}

#[test]
fn confidence_combines_mean_success_with_margin_and_caps() {
    let pool = ranked_pool(6, 75.0, 0.55);
    let strategy = recommend(&pool, &context(Urgency::Critical));
    assert_eq!(strategy.confidence, 0.75);

    let optimistic = ranked_pool(6, 75.0, 0.9);
    let capped = recommend(&optimistic, &context(Urgency::Critical));
    assert_eq!(capped.confidence, 0.9);
}

#[test]
fn mean_success_only_samples_first_ten() {
    // Ten strong leaders followed by hopeless stragglers; the stragglers
    // must not drag the confidence down.
    let mut pool = ranked_pool(10, 75.0, 0.6);
    pool.extend(ranked_pool(20, 10.0, 0.05));
    let strategy = recommend(&pool, &context(Urgency::Critical));
    assert_eq!(strategy.confidence, 0.8);
}
