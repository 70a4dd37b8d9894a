use crate::matching::learning::LearningState;

#[test]
fn first_observation_seeds_average_directly() {
    let state = LearningState::new();
    let stats = state.record("donor-1", 18.0, true);
    assert_eq!(stats.avg_response_minutes, 18.0);
}

#[test]
fn second_observation_blends_with_ema_weights() {
    let state = LearningState::new();
    state.record("donor-1", 20.0, true);
    let stats = state.record("donor-1", 10.0, true);
    // 0.7 * 20 + 0.3 * 10
    assert!((stats.avg_response_minutes - 17.0).abs() < 1e-9);
}

#[test]
fn cold_start_success_rate_is_optimistic_on_failure() {
    let state = LearningState::new();
    let succeeded = state.record("donor-win", 15.0, true);
    assert_eq!(succeeded.success_rate, 1.0);

    let failed = state.record("donor-miss", 15.0, false);
    assert_eq!(failed.success_rate, 0.5);
}

#[test]
fn success_rate_blends_with_smoother_weight() {
    let state = LearningState::new();
    state.record("donor-1", 15.0, true);
    let stats = state.record("donor-1", 15.0, false);
    // 0.8 * 1.0 + 0.2 * 0.0
    assert!((stats.success_rate - 0.8).abs() < 1e-9);
}

#[test]
fn repeated_feedback_converges_without_reaching_the_observation() {
    let state = LearningState::new();
    let seeded = state.record("donor-1", 40.0, false);
    assert_eq!(seeded.avg_response_minutes, 40.0);

    for _ in 0..39 {
        state.record("donor-1", 10.0, true);
    }
    let stats = state.record("donor-1", 10.0, true);

    assert!(stats.avg_response_minutes > 10.0);
    assert!((stats.avg_response_minutes - 10.0).abs() < 0.01);
    assert!(stats.success_rate < 1.0);
    assert!((stats.success_rate - 1.0).abs() < 0.01);
}

#[test]
fn unseen_donor_has_no_stats() {
    let state = LearningState::new();
    assert!(state.stats_for("donor-unknown").is_none());
    assert_eq!(state.tracked_donors(), 0);

    state.record("donor-1", 12.0, true);
    assert_eq!(state.tracked_donors(), 1);
}
