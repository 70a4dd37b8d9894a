use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Learned behavior statistics for a single donor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonorStats {
    pub avg_response_minutes: f64,
    pub success_rate: f64,
}

/// Observation weight for the response-time moving average.
const RESPONSE_OBSERVATION_WEIGHT: f64 = 0.3;
/// Observation weight for the success-rate moving average.
const SUCCESS_OBSERVATION_WEIGHT: f64 = 0.2;

/// Process-wide map of per-donor feedback statistics.
///
/// Entries are created lazily on first feedback and updated in place with an
/// exponential moving average on every subsequent one. The avg/success pair
/// for a donor lives in one record behind one mutex, so concurrent scorers
/// always read a consistent pair and feedback writers get atomic
/// read-modify-write. Entries are never evicted.
#[derive(Debug, Default)]
pub struct LearningState {
    stats: Mutex<HashMap<String, DonorStats>>,
}

impl LearningState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, DonorStats>> {
        // Critical sections only touch plain data; a panicking writer cannot
        // leave a half-updated record, so poisoning is recoverable.
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consistent snapshot of one donor's learned pair, if any feedback has
    /// ever been recorded for them.
    pub fn stats_for(&self, donor_id: &str) -> Option<DonorStats> {
        self.lock().get(donor_id).copied()
    }

    /// Number of donors with at least one recorded outcome.
    pub fn tracked_donors(&self) -> usize {
        self.lock().len()
    }

    /// Fold one observed outcome into the donor's statistics, returning the
    /// updated pair.
    ///
    /// Cold start seeds the averages directly: the first response time is
    /// taken as-is, and a first failure seeds the success rate at 0.5 rather
    /// than 0.0 so a single miss does not bury a new donor.
    pub fn record(&self, donor_id: &str, response_time_minutes: f64, success: bool) -> DonorStats {
        let observed_success = if success { 1.0 } else { 0.0 };
        let mut guard = self.lock();
        let updated = match guard.get(donor_id) {
            Some(current) => DonorStats {
                avg_response_minutes: current.avg_response_minutes
                    * (1.0 - RESPONSE_OBSERVATION_WEIGHT)
                    + response_time_minutes * RESPONSE_OBSERVATION_WEIGHT,
                success_rate: current.success_rate * (1.0 - SUCCESS_OBSERVATION_WEIGHT)
                    + observed_success * SUCCESS_OBSERVATION_WEIGHT,
            },
            None => DonorStats {
                avg_response_minutes: response_time_minutes,
                success_rate: if success { 1.0 } else { 0.5 },
            },
        };
        guard.insert(donor_id.to_string(), updated);
        updated
    }
}
