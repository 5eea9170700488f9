//! Skill identity and catalog records.
//!
//! Skill identity is a closed set. Display metadata (code, color) lives in
//! the catalog loaded from config, not in the enum.

use crate::error::WorkloadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Hardware Engineering")]
    HardwareEngineering,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[serde(rename = "Project Management")]
    ProjectManagement,
    #[serde(rename = "Quality Assurance")]
    QualityAssurance,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::SoftwareDevelopment,
        Skill::HardwareEngineering,
        Skill::UiUxDesign,
        Skill::DataAnalytics,
        Skill::ProjectManagement,
        Skill::QualityAssurance,
    ];

    /// The display name, also used as the stored key.
    pub fn name(self) -> &'static str {
        match self {
            Skill::SoftwareDevelopment => "Software Development",
            Skill::HardwareEngineering => "Hardware Engineering",
            Skill::UiUxDesign          => "UI/UX Design",
            Skill::DataAnalytics       => "Data Analytics",
            Skill::ProjectManagement   => "Project Management",
            Skill::QualityAssurance    => "Quality Assurance",
        }
    }

    pub fn from_name(name: &str) -> Option<Skill> {
        Skill::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Skill::ALL.iter().map(|s| s.name()).collect();
            WorkloadError::InvalidInput(format!(
                "skill must be one of {known:?}, got {s:?}"
            ))
        })
    }
}

/// One row of the skill catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name:  Skill,
    pub code:  String,
    pub color: String,
}
