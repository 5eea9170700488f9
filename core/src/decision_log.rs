//! The decision log: one immutable entry per assignment attempt.
//!
//! RULE: Entries are written only by the engine's assign path and removed
//! only by a full reset. They are never updated.

use crate::{
    skill::{Skill, SkillRecord},
    task::{Priority, Task},
    types::Hours,
};
use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Serialize, Serializer};

pub const OVER_CAPACITY_MESSAGE: &str = "All employees would exceed the 40-hour limit.";

/// A persisted log row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id:              i64,
    pub timestamp:       DateTime<Utc>,
    pub task_name:       String,
    pub skill:           Skill,
    pub priority:        Priority,
    pub hours:           Hours,
    pub success:         bool,
    pub assignee:        Option<String>,
    pub score:           Option<i64>,
    pub eligible_count:  Option<usize>,
    pub reasons:         Option<String>,
    pub failure_message: Option<String>,
}

/// A log row before the store has given it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub timestamp:       DateTime<Utc>,
    pub task_name:       String,
    pub skill:           Skill,
    pub priority:        Priority,
    pub hours:           Hours,
    pub success:         bool,
    pub assignee:        Option<String>,
    pub score:           Option<i64>,
    pub eligible_count:  Option<usize>,
    pub reasons:         Option<String>,
    pub failure_message: Option<String>,
}

impl NewLogEntry {
    pub fn assigned(task: &Task, at: DateTime<Utc>, assignment: &Assignment) -> Self {
        Self {
            timestamp: at,
            task_name: task.name.clone(),
            skill: task.required_skill,
            priority: task.priority.clone(),
            hours: task.hours,
            success: true,
            assignee: Some(assignment.assignee.clone()),
            score: Some(assignment.score),
            eligible_count: Some(assignment.eligible_count),
            reasons: Some(assignment.reasons.clone()),
            failure_message: None,
        }
    }

    pub fn over_capacity(task: &Task, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at,
            task_name: task.name.clone(),
            skill: task.required_skill,
            priority: task.priority.clone(),
            hours: task.hours,
            success: false,
            assignee: None,
            score: None,
            eligible_count: Some(0),
            reasons: None,
            failure_message: Some(OVER_CAPACITY_MESSAGE.to_string()),
        }
    }
}

/// A log entry with the skill's display metadata attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogView {
    #[serde(flatten)]
    pub entry:       LogEntry,
    pub skill_code:  String,
    pub skill_color: String,
}

impl LogView {
    pub fn new(entry: LogEntry, skill: &SkillRecord) -> Self {
        Self {
            entry,
            skill_code: skill.code.clone(),
            skill_color: skill.color.clone(),
        }
    }
}

/// A committed assignment decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub assignee:       String,
    pub score:          i64,
    pub eligible_count: usize,
    pub reasons:        String,
}

/// What the caller gets back from `assign`.
///
/// Over capacity is a business outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignResult {
    Assigned(Assignment),
    OverCapacity { message: String },
}

impl AssignResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AssignResult::Assigned(_))
    }
}

impl Serialize for AssignResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AssignResult::Assigned(a) => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("assignee", &a.assignee)?;
                map.serialize_entry("score", &a.score)?;
                map.serialize_entry("eligibleCount", &a.eligible_count)?;
                map.serialize_entry("reasons", &a.reasons)?;
                map.end()
            }
            AssignResult::OverCapacity { message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}
