//! Roster configuration: the skill catalog and the seed employees.
//!
//! Loaded once at startup. In tests, use RosterConfig::builtin().

use crate::{
    employee::EmployeeSeed,
    skill::{Skill, SkillRecord},
    types::{Hours, MAX_WEEKLY_HOURS, RELIABILITY_RANGE},
};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const ROSTER_FILE: &str = "roster.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub skills:    Vec<SkillRecord>,
    pub employees: Vec<EmployeeSeed>,
}

impl RosterConfig {
    /// Load `roster.json` from the data directory and validate it.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/{ROSTER_FILE}");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: RosterConfig = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse {path}"))?;
        config.validate().with_context(|| format!("Invalid roster in {path}"))?;
        Ok(config)
    }

    /// Load from the data directory if a roster file exists there,
    /// otherwise fall back to the built-in roster.
    pub fn load_or_builtin(data_dir: &str) -> anyhow::Result<Self> {
        if Path::new(data_dir).join(ROSTER_FILE).exists() {
            Self::load(data_dir)
        } else {
            log::info!("no {ROSTER_FILE} in {data_dir}; using built-in roster");
            Ok(Self::builtin())
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen_skills = HashSet::new();
        for record in &self.skills {
            if !seen_skills.insert(record.name) {
                bail!("skill {} is listed twice", record.name);
            }
            if record.code.trim().is_empty() {
                bail!("skill {} has an empty code", record.name);
            }
        }
        if let Some(missing) = Skill::ALL.iter().find(|s| !seen_skills.contains(*s)) {
            bail!("skill {missing} has no catalog entry");
        }

        let mut seen_names = HashSet::new();
        for e in &self.employees {
            if e.name.trim().is_empty() {
                bail!("employee with empty name");
            }
            if !seen_names.insert(e.name.as_str()) {
                bail!("employee {} is listed twice", e.name);
            }
            if !RELIABILITY_RANGE.contains(&e.reliability) {
                bail!(
                    "employee {} has reliability {} outside {:?}",
                    e.name, e.reliability, RELIABILITY_RANGE
                );
            }
            if !(0..=MAX_WEEKLY_HOURS).contains(&e.seed_hours) {
                bail!(
                    "employee {} has seed hours {} outside 0..={MAX_WEEKLY_HOURS}",
                    e.name, e.seed_hours
                );
            }
        }
        Ok(())
    }

    /// The default six-skill, twenty-person roster.
    pub fn builtin() -> Self {
        let skills = [
            (Skill::SoftwareDevelopment, "SWD", "#00FF88"),
            (Skill::HardwareEngineering, "HWE", "#FF6B35"),
            (Skill::UiUxDesign,          "UXD", "#B4E4FF"),
            (Skill::DataAnalytics,       "DAT", "#FFD700"),
            (Skill::ProjectManagement,   "PMG", "#DA70D6"),
            (Skill::QualityAssurance,    "QAT", "#87CEEB"),
        ]
        .into_iter()
        .map(|(name, code, color)| SkillRecord {
            name,
            code: code.into(),
            color: color.into(),
        })
        .collect();

        use Skill::*;
        let employees = [
            ("Alex Rivera",     SoftwareDevelopment, 9,  12),
            ("Sarah Chen",      SoftwareDevelopment, 10, 28),
            ("Marcus Johnson",  SoftwareDevelopment, 7,  15),
            ("Emma Wilson",     HardwareEngineering, 8,  22),
            ("David Park",      HardwareEngineering, 9,  8),
            ("Lisa Anderson",   HardwareEngineering, 6,  35),
            ("James Taylor",    UiUxDesign,          10, 18),
            ("Nina Patel",      UiUxDesign,          8,  25),
            ("Ryan Miller",     UiUxDesign,          7,  10),
            ("Sophie Martinez", DataAnalytics,       9,  20),
            ("Kevin Lee",       DataAnalytics,       10, 5),
            ("Rachel Brown",    DataAnalytics,       8,  32),
            ("Tom Zhang",       ProjectManagement,   7,  14),
            ("Maya Singh",      ProjectManagement,   9,  30),
            ("Chris Davis",     ProjectManagement,   8,  16),
            ("Anna Williams",   QualityAssurance,    10, 12),
            ("Brian Moore",     QualityAssurance,    6,  24),
            ("Julia Garcia",    QualityAssurance,    9,  8),
            ("Michael Kim",     SoftwareDevelopment, 8,  20),
            ("Elena Rodriguez", DataAnalytics,       7,  18),
        ]
        .into_iter()
        .map(|(name, expertise, reliability, seed_hours): (&str, Skill, i64, Hours)| EmployeeSeed {
            name: name.into(),
            expertise,
            reliability,
            seed_hours,
        })
        .collect();

        Self { skills, employees }
    }

    /// Catalog only, no employees. Tests build their own roster on top.
    pub fn skills_only() -> Self {
        Self {
            skills: Self::builtin().skills,
            employees: Vec::new(),
        }
    }
}
