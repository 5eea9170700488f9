//! Shared primitive types and workload constants.

/// Stable employee identifier (SQLite rowid).
pub type EmployeeId = i64;

/// Workload measured in whole hours.
pub type Hours = i64;

/// An employee may never be pushed past this many hours by an assignment.
pub const MAX_WEEKLY_HOURS: Hours = 40;

/// Smallest task an assignment will accept.
pub const MIN_TASK_HOURS: Hours = 1;

/// Reliability is rated on a closed 1–10 scale.
pub const RELIABILITY_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Number of log entries shown in the default desk snapshot.
pub const DEFAULT_LOG_LIMIT: usize = 15;
