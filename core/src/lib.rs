//! Workload Desk core: task assignment by skill, reliability and load.
//!
//! Leaves first:
//!   status: hours → AVAILABLE / BUSY / CRITICAL
//!   scoring: suitability score and reason tags
//!   selection: eligibility filter and best-candidate pick
//!   store: SQLite roster, skill catalog and decision log
//!   engine: assign / reset / read views, one transaction per mutation

pub mod clock;
pub mod config;
pub mod decision_log;
pub mod employee;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod selection;
pub mod skill;
pub mod stats;
pub mod status;
pub mod store;
pub mod task;
pub mod types;
