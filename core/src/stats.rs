use crate::{employee::Employee, status::WorkloadStatus};
use serde::Serialize;

/// Per-band headcount. Recomputed on every call, never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadStats {
    pub total:     usize,
    pub available: usize,
    pub busy:      usize,
    pub critical:  usize,
}

impl WorkloadStats {
    pub fn from_roster(roster: &[Employee]) -> Self {
        roster.iter().fold(Self::default(), |mut acc, e| {
            acc.total += 1;
            match e.status() {
                WorkloadStatus::Available => acc.available += 1,
                WorkloadStatus::Busy      => acc.busy += 1,
                WorkloadStatus::Critical  => acc.critical += 1,
            }
            acc
        })
    }
}
