use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Days an applicant has to fix minor discrepancies on a conditional approval.
pub const CONDITIONAL_APPROVAL_DEADLINE_DAYS: u32 = 7;

/// Days an applicant has to submit corrections.
pub const NEEDS_CORRECTION_DEADLINE_DAYS: u32 = 30;

/// Overall disposition of a label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OverallStatus {
    Approved,
    ConditionallyApproved,
    NeedsCorrection,
    Rejected,
}

impl OverallStatus {
    /// Correction window attached to the status, if any.
    pub fn deadline_days(&self) -> Option<u32> {
        match self {
            OverallStatus::Approved | OverallStatus::Rejected => None,
            OverallStatus::ConditionallyApproved => Some(CONDITIONAL_APPROVAL_DEADLINE_DAYS),
            OverallStatus::NeedsCorrection => Some(NEEDS_CORRECTION_DEADLINE_DAYS),
        }
    }
}

/// Resolver output: the status, its deadline and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDecision {
    pub status: OverallStatus,
    pub deadline_days: Option<u32>,
    pub rule: &'static str,
}

impl StatusDecision {
    pub fn new(status: OverallStatus, rule: &'static str) -> Self {
        Self {
            status,
            deadline_days: status.deadline_days(),
            rule,
        }
    }

    /// Absolute correction deadline counted from `now`.
    pub fn deadline_from(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.deadline_days
            .map(|days| now + Duration::days(i64::from(days)))
    }
}
