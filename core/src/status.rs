//! Workload status bands.
//!
//! Each band is inclusive on its lower bound:
//!   [0, 20)  AVAILABLE
//!   [20, 30) BUSY
//!   [30, ..) CRITICAL

use crate::types::Hours;
use serde::{Deserialize, Serialize};

pub const BUSY_THRESHOLD: Hours = 20;
pub const CRITICAL_THRESHOLD: Hours = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkloadStatus {
    Available,
    Busy,
    Critical,
}

impl WorkloadStatus {
    pub fn label(self) -> &'static str {
        match self {
            WorkloadStatus::Available => "AVAILABLE",
            WorkloadStatus::Busy      => "BUSY",
            WorkloadStatus::Critical  => "CRITICAL",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            WorkloadStatus::Available => "#30D158",
            WorkloadStatus::Busy      => "#FF9F0A",
            WorkloadStatus::Critical  => "#FF3B30",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            WorkloadStatus::Available => "rgba(48,209,88,0.15)",
            WorkloadStatus::Busy      => "rgba(255,159,10,0.15)",
            WorkloadStatus::Critical  => "rgba(255,59,48,0.15)",
        }
    }
}

/// Classify a workload. Total over all inputs, including negatives.
pub fn classify(hours: Hours) -> WorkloadStatus {
    if hours >= CRITICAL_THRESHOLD {
        WorkloadStatus::Critical
    } else if hours >= BUSY_THRESHOLD {
        WorkloadStatus::Busy
    } else {
        WorkloadStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive_on_the_lower_bound() {
        assert_eq!(classify(0), WorkloadStatus::Available);
        assert_eq!(classify(19), WorkloadStatus::Available);
        assert_eq!(classify(20), WorkloadStatus::Busy);
        assert_eq!(classify(29), WorkloadStatus::Busy);
        assert_eq!(classify(30), WorkloadStatus::Critical);
        assert_eq!(classify(55), WorkloadStatus::Critical);
    }

    #[test]
    fn labels_and_colors() {
        let critical = classify(35);
        assert_eq!(critical.label(), "CRITICAL");
        assert_eq!(critical.color(), "#FF3B30");
        assert_eq!(critical.background(), "rgba(255,59,48,0.15)");
        assert_eq!(classify(3).label(), "AVAILABLE");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&WorkloadStatus::Available).unwrap();
        assert_eq!(json, "\"AVAILABLE\"");
    }
}
