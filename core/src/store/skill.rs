use super::{integrity, WorkloadStore};
use crate::{
    error::WorkloadResult,
    skill::{Skill, SkillRecord},
};
use rusqlite::{
    params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use std::collections::HashMap;

impl ToSql for Skill {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.name()))
    }
}

impl FromSql for Skill {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let name = value.as_str()?;
        Skill::from_name(name)
            .ok_or_else(|| FromSqlError::Other(format!("unknown skill {name:?}").into()))
    }
}

impl WorkloadStore {
    // ── Skill catalog ─────────────────────────────────────────────

    pub fn insert_skill(&self, record: &SkillRecord) -> WorkloadResult<()> {
        self.conn.execute(
            "INSERT INTO skill (name, code, color) VALUES (?1, ?2, ?3)",
            params![record.name, record.code, record.color],
        )?;
        Ok(())
    }

    pub fn skill_count(&self) -> WorkloadResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM skill", [], |row| row.get(0))?;
        Ok(count)
    }

    /// All catalog rows, ordered by name.
    pub fn all_skills(&self) -> WorkloadResult<Vec<SkillRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, code, color FROM skill ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            Ok(SkillRecord {
                name: row.get(0)?,
                code: row.get(1)?,
                color: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(integrity)
    }

    /// Catalog keyed by skill, for display enrichment.
    pub fn skill_catalog(&self) -> WorkloadResult<HashMap<Skill, SkillRecord>> {
        Ok(self
            .all_skills()?
            .into_iter()
            .map(|r| (r.name, r))
            .collect())
    }
}
