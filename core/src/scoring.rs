//! Suitability scoring.
//!
//! The weights are a stored contract: log entries keep the literal score,
//! so any change here changes the meaning of every historical entry.

use crate::{employee::Employee, skill::Skill};

pub const SKILL_MATCH_BONUS: i64 = 50;
pub const RELIABILITY_WEIGHT: i64 = 5;
pub const WORKLOAD_PENALTY: i64 = 2;

pub const HIGH_RELIABILITY: i64 = 9;
pub const LOW_WORKLOAD: i64 = 15;

pub const REASON_SEPARATOR: &str = " · ";

/// Score an employee for a task needing `required`. Higher is better; may be negative.
pub fn score(employee: &Employee, required: Skill) -> i64 {
    let mut score = 0;
    if employee.expertise == required {
        score += SKILL_MATCH_BONUS;
    }
    score += employee.reliability * RELIABILITY_WEIGHT;
    score -= employee.current_hours * WORKLOAD_PENALTY;
    score
}

/// Reason tags for a winning employee, evaluated on pre-assignment hours.
pub fn reason_tags(employee: &Employee, required: Skill) -> Vec<&'static str> {
    let mut tags = Vec::with_capacity(3);
    if employee.expertise == required {
        tags.push("Skill match");
    }
    if employee.reliability >= HIGH_RELIABILITY {
        tags.push("High reliability");
    }
    if employee.current_hours <= LOW_WORKLOAD {
        tags.push("Low workload");
    }
    tags
}

/// Joined reason text as stored in the log.
pub fn reasons(employee: &Employee, required: Skill) -> String {
    let tags = reason_tags(employee, required);
    if tags.is_empty() {
        "Best available".to_string()
    } else {
        tags.join(REASON_SEPARATOR)
    }
}
