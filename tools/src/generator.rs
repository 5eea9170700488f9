//! Deterministic random task stream for batch runs.
//!
//! RULE: The same seed always yields the same sequence of tasks, so a
//! batch run against a fresh database is fully reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use workload_core::{
    skill::Skill,
    task::{Priority, Task},
    types::Hours,
};

const VERBS: [&str; 8] = [
    "Build", "Review", "Fix", "Design", "Audit", "Plan", "Migrate", "Document",
];
const SUBJECTS: [&str; 8] = [
    "dashboard", "login flow", "test suite", "sprint board",
    "sensor board", "onboarding", "data pipeline", "release notes",
];
const PRIORITIES: [&str; 3] = ["LOW", "MEDIUM", "HIGH"];

/// Largest task the generator emits. Real tasks are rarely a full week.
const MAX_GENERATED_HOURS: Hours = 12;

pub struct TaskGenerator {
    inner: Pcg64Mcg,
    issued: u64,
}

impl TaskGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
            issued: 0,
        }
    }

    pub fn next_task(&mut self) -> anyhow::Result<Task> {
        self.issued += 1;
        let verb = VERBS[self.inner.gen_range(0..VERBS.len())];
        let subject = SUBJECTS[self.inner.gen_range(0..SUBJECTS.len())];
        let skill = Skill::ALL[self.inner.gen_range(0..Skill::ALL.len())];
        let priority = PRIORITIES[self.inner.gen_range(0..PRIORITIES.len())];
        let hours = self.inner.gen_range(1..=MAX_GENERATED_HOURS);

        let name = format!("{verb} {subject} #{}", self.issued);
        let task = Task::new(&name, skill, Priority::normalize(Some(priority)), hours)?;
        Ok(task)
    }
}
