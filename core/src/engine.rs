//! The assignment engine: the only entry point that mutates workload state.
//!
//! ASSIGN SEQUENCE (one IMMEDIATE transaction, never split):
//!   1. Read the roster in ascending id order.
//!   2. Select the best eligible employee (pure, see selection.rs).
//!   3. On success: add the task hours to the winner.
//!   4. Append exactly one decision log entry, success or over-capacity.
//!
//! RULES:
//!   - Invalid input is rejected before the store is touched. No log entry.
//!   - Over capacity is a normal outcome. It is logged and returned, not raised.
//!   - Mutating calls take `&mut self`. Share across threads via SharedEngine.

use crate::{
    clock::{Clock, SystemClock},
    config::RosterConfig,
    decision_log::{AssignResult, Assignment, LogView, NewLogEntry, OVER_CAPACITY_MESSAGE},
    employee::{Employee, EnrichedEmployee},
    error::{WorkloadError, WorkloadResult},
    scoring::reasons,
    selection::select,
    skill::{Skill, SkillRecord},
    stats::WorkloadStats,
    store::WorkloadStore,
    task::{check_hours, Task},
    types::{EmployeeId, Hours, DEFAULT_LOG_LIMIT},
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// An engine shared between threads. The mutex is the single
/// mutual-exclusion boundary around every read-select-mutate-log sequence.
pub type SharedEngine = Arc<Mutex<AssignmentEngine>>;

/// Everything the presentation layer renders in one poll.
#[derive(Debug, Clone, Serialize)]
pub struct DeskState {
    pub employees: Vec<EnrichedEmployee>,
    pub log:       Vec<LogView>,
    pub stats:     WorkloadStats,
    pub skills:    Vec<Skill>,
}

pub struct AssignmentEngine {
    store: WorkloadStore,
    clock: Box<dyn Clock>,
}

impl AssignmentEngine {
    pub fn new(store: WorkloadStore, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Migrate, seed on first run, and wire a wall-clock engine.
    pub fn build(store: WorkloadStore, config: &RosterConfig) -> WorkloadResult<Self> {
        store.migrate()?;
        let report = store.seed_if_empty(config)?;
        if report.skills > 0 || report.employees > 0 {
            log::info!(
                "seeded {} skills and {} employees",
                report.skills, report.employees
            );
        }
        Ok(Self::new(store, Box::new(SystemClock)))
    }

    /// In-memory engine with the built-in roster.
    pub fn build_test() -> WorkloadResult<Self> {
        Self::build(WorkloadStore::in_memory()?, &RosterConfig::builtin())
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    pub fn store(&self) -> &WorkloadStore {
        &self.store
    }

    // ── Reads ─────────────────────────────────────────────────────

    /// Skill catalog ordered by name.
    pub fn list_skills(&self) -> WorkloadResult<Vec<SkillRecord>> {
        self.store.all_skills()
    }

    pub fn list_employees(&self) -> WorkloadResult<Vec<Employee>> {
        self.store.all_employees()
    }

    pub fn employee(&self, id: EmployeeId) -> WorkloadResult<Option<Employee>> {
        self.store.employee_by_id(id)
    }

    pub fn list_employees_enriched(&self) -> WorkloadResult<Vec<EnrichedEmployee>> {
        let catalog = self.store.skill_catalog()?;
        self.store
            .all_employees()?
            .into_iter()
            .map(|e| {
                let skill = catalog_entry(&catalog, e.expertise)?;
                Ok(EnrichedEmployee::new(e, skill))
            })
            .collect()
    }

    /// The `limit` most recent decisions, newest first.
    pub fn get_log(&self, limit: usize) -> WorkloadResult<Vec<LogView>> {
        let catalog = self.store.skill_catalog()?;
        self.store
            .recent_log(limit)?
            .into_iter()
            .map(|entry| {
                let skill = catalog_entry(&catalog, entry.skill)?;
                Ok(LogView::new(entry, skill))
            })
            .collect()
    }

    pub fn stats(&self) -> WorkloadResult<WorkloadStats> {
        Ok(WorkloadStats::from_roster(&self.store.all_employees()?))
    }

    /// Combined view: roster, recent log, stats and skill names.
    pub fn snapshot(&self, log_limit: usize) -> WorkloadResult<DeskState> {
        Ok(DeskState {
            employees: self.list_employees_enriched()?,
            log: self.get_log(log_limit)?,
            stats: self.stats()?,
            skills: self.list_skills()?.into_iter().map(|s| s.name).collect(),
        })
    }

    pub fn default_snapshot(&self) -> WorkloadResult<DeskState> {
        self.snapshot(DEFAULT_LOG_LIMIT)
    }

    // ── Mutations ─────────────────────────────────────────────────

    /// Assign a task from raw boundary values.
    ///
    /// Returns `InvalidInput` for a blank name, an unknown skill, or hours
    /// outside [1, 40]; nothing is read, written or logged in that case.
    pub fn assign(
        &mut self,
        task_name: &str,
        skill: &str,
        priority: Option<&str>,
        hours: Hours,
    ) -> WorkloadResult<AssignResult> {
        let task = Task::parse(task_name, skill, priority, hours)?;
        self.assign_task(&task)
    }

    /// Assign an already built task.
    ///
    /// Hours are checked again here so no task can move hours down or past
    /// the ceiling, however it was built.
    pub fn assign_task(&mut self, task: &Task) -> WorkloadResult<AssignResult> {
        check_hours(task.hours)?;
        let at = self.clock.now();
        let result = self.store.with_transaction(|store| {
            let roster = store.all_employees()?;

            let Some(pick) = select(&roster, task.required_skill, task.hours) else {
                store.append_log(&NewLogEntry::over_capacity(task, at))?;
                return Ok(AssignResult::OverCapacity {
                    message: OVER_CAPACITY_MESSAGE.to_string(),
                });
            };

            let assignment = Assignment {
                assignee: pick.employee.name.clone(),
                score: pick.score,
                eligible_count: pick.eligible_count,
                reasons: reasons(pick.employee, task.required_skill),
            };
            store.add_hours(pick.employee.id, task.hours)?;
            store.append_log(&NewLogEntry::assigned(task, at, &assignment))?;
            Ok(AssignResult::Assigned(assignment))
        })?;

        match &result {
            AssignResult::Assigned(a) => log::info!(
                "assigned {:?} ({} h, {}) to {} score={} eligible={}",
                task.name, task.hours, task.required_skill, a.assignee, a.score, a.eligible_count
            ),
            AssignResult::OverCapacity { .. } => log::warn!(
                "could not assign {:?} ({} h, {}): all employees over capacity",
                task.name, task.hours, task.required_skill
            ),
        }
        Ok(result)
    }

    /// Restore seed hours for everyone and wipe the decision log.
    pub fn reset_all(&mut self) -> WorkloadResult<()> {
        let (employees, entries) = self
            .store
            .with_transaction(|store| Ok((store.reset_hours()?, store.clear_log()?)))?;
        log::info!("reset {employees} employees to seed hours, cleared {entries} log entries");
        Ok(())
    }
}

fn catalog_entry(
    catalog: &HashMap<Skill, SkillRecord>,
    skill: Skill,
) -> WorkloadResult<&SkillRecord> {
    catalog
        .get(&skill)
        .ok_or_else(|| WorkloadError::DataIntegrity(format!("skill {skill} has no catalog entry")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn raw_task(hours: Hours) -> Task {
        Task {
            name: "Rebuild index".into(),
            required_skill: Skill::DataAnalytics,
            priority: Priority::default(),
            hours,
        }
    }

    #[test]
    fn assign_task_rechecks_hours() {
        let mut engine = AssignmentEngine::build_test().unwrap();
        let before = engine.list_employees().unwrap();

        for hours in [-5, 0, 41, 100] {
            let err = engine.assign_task(&raw_task(hours)).unwrap_err();
            assert!(matches!(err, WorkloadError::InvalidInput(_)), "{hours}: {err}");
        }

        assert_eq!(engine.list_employees().unwrap(), before);
        assert_eq!(engine.store().log_count().unwrap(), 0);
        assert!(engine.assign_task(&raw_task(40)).is_ok());
    }
}
