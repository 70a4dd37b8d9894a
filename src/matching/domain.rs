use serde::{Deserialize, Serialize};

/// Candidate donor attributes as supplied by the serving layer.
///
/// Every field except `donor_id` is optional on the wire; absent values take
/// the documented defaults so an incomplete profile is scored pessimistically
/// rather than rejected. Sentinel defaults (`distance` 999 km,
/// `days_since_last_donation` 999) mean "unknown, assume far / long ago".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub donor_id: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default = "default_distance")]
    pub distance: f64,
    #[serde(default = "default_reliability")]
    pub reliability_score: f64,
    #[serde(default)]
    pub can_donate: bool,
    #[serde(default = "default_days_since_donation")]
    pub days_since_last_donation: u32,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default = "default_last_active_hours")]
    pub last_active_hours: f64,
}

fn default_distance() -> f64 {
    999.0
}

fn default_reliability() -> f64 {
    50.0
}

fn default_days_since_donation() -> u32 {
    999
}

fn default_last_active_hours() -> f64 {
    24.0
}

/// Context of the incoming blood request.
///
/// `location` and `units_required` are carried through untouched for the
/// serving layer; the scoring math reads only `blood_group` and `urgency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units_required: Option<u32>,
}

impl RequestContext {
    pub fn new(blood_group: impl Into<String>, urgency: Urgency) -> Self {
        Self {
            blood_group: blood_group.into(),
            urgency,
            location: None,
            units_required: None,
        }
    }
}

/// Request priority driving both prediction adjustments and strategy choice.
///
/// Unrecognized wire values degrade to `Normal` rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Urgency {
    Critical,
    Urgent,
    #[default]
    Normal,
}

impl Urgency {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => Self::Critical,
            "urgent" => Self::Urgent,
            _ => Self::Normal,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::Urgent => "urgent",
            Urgency::Normal => "normal",
        }
    }
}

impl Serialize for Urgency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Urgency::from_str(&value))
    }
}

/// Per-factor sub-scores (each 0-100), the weighted composite, and the
/// confidence the scorer places in it. Field names are the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub confidence: f64,
    pub distance: f64,
    pub reliability: f64,
    pub eligibility: f64,
    pub response_history: f64,
    pub blood_match: f64,
    pub availability: f64,
}

/// Predicted donor behavior for this request at this moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub response_time_minutes: f64,
    pub success_probability: f64,
}

/// One ranked entry in the scoring response.
///
/// `total_score` and `confidence` are mirrored out of the breakdown so
/// callers can rank without digging into the nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDonor {
    pub donor_id: String,
    pub total_score: f64,
    pub confidence: f64,
    pub score_breakdown: ScoreBreakdown,
    pub predictions: Prediction,
    pub reason: String,
}

/// Recommended dispatch policy plus its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(flatten)]
    pub kind: StrategyKind,
    pub reasoning: String,
    pub confidence: f64,
}

/// Dispatch policy variants with their concrete parameters.
///
/// Serializes to a flat object tagged by `type`, matching the shape the
/// serving layer forwards to dispatch workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StrategyKind {
    Targeted {
        top_donor_count: u32,
        escalate_after_minutes: u32,
    },
    Broadcast {
        broadcast_radius_km: u32,
    },
    Escalation {
        initial_donor_count: u32,
        add_donors_every_minutes: u32,
        max_donors: u32,
    },
    Hybrid {
        top_donor_count: u32,
        broadcast_after_minutes: u32,
    },
}

impl StrategyKind {
    pub const fn label(&self) -> &'static str {
        match self {
            StrategyKind::Targeted { .. } => "targeted",
            StrategyKind::Broadcast { .. } => "broadcast",
            StrategyKind::Escalation { .. } => "escalation",
            StrategyKind::Hybrid { .. } => "hybrid",
        }
    }
}
