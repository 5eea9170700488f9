//! Employee records and their display enrichment.

use crate::{
    skill::{Skill, SkillRecord},
    status::{classify, WorkloadStatus},
    types::{EmployeeId, Hours, MAX_WEEKLY_HOURS},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id:            EmployeeId,
    pub name:          String,
    pub expertise:     Skill,
    pub reliability:   i64,
    pub seed_hours:    Hours,
    pub current_hours: Hours,
}

impl Employee {
    pub fn status(&self) -> WorkloadStatus {
        classify(self.current_hours)
    }

    /// Hours this employee would carry after taking `task_hours` more.
    pub fn projected_hours(&self, task_hours: Hours) -> Hours {
        self.current_hours + task_hours
    }
}

/// An employee as it appears in the roster config, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSeed {
    pub name:        String,
    pub expertise:   Skill,
    pub reliability: i64,
    pub seed_hours:  Hours,
}

/// Employee plus the derived fields the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEmployee {
    #[serde(flatten)]
    pub employee:     Employee,
    pub status:       WorkloadStatus,
    pub status_color: &'static str,
    pub status_bg:    &'static str,
    pub skill_code:   String,
    pub skill_color:  String,
    pub initials:     String,
    pub load_pct:     f64,
}

impl EnrichedEmployee {
    pub fn new(employee: Employee, skill: &SkillRecord) -> Self {
        let status = employee.status();
        Self {
            initials: initials(&employee.name),
            load_pct: load_pct(employee.current_hours),
            status,
            status_color: status.color(),
            status_bg: status.background(),
            skill_code: skill.code.clone(),
            skill_color: skill.color.clone(),
            employee,
        }
    }
}

/// Upper-cased first letter of every whitespace-separated name token.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `hours / 40 * 100`, rounded to one decimal place.
pub fn load_pct(hours: Hours) -> f64 {
    let pct = hours as f64 / MAX_WEEKLY_HOURS as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 7,
            name: "Sophie Martinez".into(),
            expertise: Skill::DataAnalytics,
            reliability: 9,
            seed_hours: 20,
            current_hours: 21,
        }
    }

    #[test]
    fn initials_take_each_token() {
        assert_eq!(initials("Sophie Martinez"), "SM");
        assert_eq!(initials("  anna  de la cruz "), "ADLC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn load_pct_rounds_to_one_decimal() {
        assert_eq!(load_pct(0), 0.0);
        assert_eq!(load_pct(13), 32.5);
        assert_eq!(load_pct(40), 100.0);
        assert_eq!(load_pct(21), 52.5);
    }

    #[test]
    fn enrichment_carries_status_and_skill_display() {
        let skill = SkillRecord {
            name: Skill::DataAnalytics,
            code: "DAT".into(),
            color: "#FFD700".into(),
        };
        let enriched = EnrichedEmployee::new(sample(), &skill);
        assert_eq!(enriched.status, WorkloadStatus::Busy);
        assert_eq!(enriched.status_color, "#FF9F0A");
        assert_eq!(enriched.skill_code, "DAT");
        assert_eq!(enriched.initials, "SM");

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["currentHours"], 21);
        assert_eq!(json["expertise"], "Data Analytics");
        assert_eq!(json["status"], "BUSY");
        assert_eq!(json["statusBg"], "rgba(255,159,10,0.15)");
        assert_eq!(json["loadPct"], 52.5);
    }
}
