//! Transient task requests.
//!
//! A Task only lives for the duration of one assign call. Its outcome is
//! recorded in the decision log; the task itself is never stored.

use crate::{
    error::{WorkloadError, WorkloadResult},
    skill::Skill,
    types::{Hours, MAX_WEEKLY_HOURS, MIN_TASK_HOURS},
};
use serde::Serialize;
use std::fmt;

/// Free-form priority label, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Priority(String);

impl Priority {
    pub const DEFAULT: &'static str = "MEDIUM";

    /// Normalize a caller-supplied priority. Blank input falls back to MEDIUM.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(p) if !p.is_empty() => Priority(p.to_uppercase()),
            _ => Priority(Self::DEFAULT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated task. Only `new` and `parse` can build one outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub(crate) name:           String,
    pub(crate) required_skill: Skill,
    pub(crate) priority:       Priority,
    pub(crate) hours:          Hours,
}

/// Reject task hours outside [1, 40].
pub(crate) fn check_hours(hours: Hours) -> WorkloadResult<()> {
    if (MIN_TASK_HOURS..=MAX_WEEKLY_HOURS).contains(&hours) {
        return Ok(());
    }
    Err(WorkloadError::InvalidInput(format!(
        "hours must be between {MIN_TASK_HOURS} and {MAX_WEEKLY_HOURS}, got {hours}"
    )))
}

impl Task {
    /// Build a validated task.
    ///
    /// Rejects a blank name and hours outside [1, 40] with `InvalidInput`.
    pub fn new(
        name: &str,
        required_skill: Skill,
        priority: Priority,
        hours: Hours,
    ) -> WorkloadResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkloadError::InvalidInput("taskName is required".into()));
        }
        check_hours(hours)?;
        Ok(Self {
            name: name.to_string(),
            required_skill,
            priority,
            hours,
        })
    }

    /// Build a task from raw boundary strings.
    pub fn parse(
        name: &str,
        skill: &str,
        priority: Option<&str>,
        hours: Hours,
    ) -> WorkloadResult<Self> {
        let required_skill: Skill = skill.parse()?;
        Self::new(name, required_skill, Priority::normalize(priority), hours)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_skill(&self) -> Skill {
        self.required_skill
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn hours(&self) -> Hours {
        self.hours
    }
}
