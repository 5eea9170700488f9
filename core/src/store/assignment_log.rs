//! Store methods for the decision log.

use super::{integrity, WorkloadStore};
use crate::{
    decision_log::{LogEntry, NewLogEntry},
    error::WorkloadResult,
    task::Priority,
};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, types::Type, Row};

fn parse_ts(col: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(e)))
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    let ts: String = row.get(1)?;
    let priority: String = row.get(4)?;
    Ok(LogEntry {
        id: row.get(0)?,
        timestamp: parse_ts(1, &ts)?,
        task_name: row.get(2)?,
        skill: row.get(3)?,
        priority: Priority::normalize(Some(&priority)),
        hours: row.get(5)?,
        success: row.get::<_, i32>(6)? != 0,
        assignee: row.get(7)?,
        score: row.get(8)?,
        eligible_count: row.get::<_, Option<i64>>(9)?.map(|n| n as usize),
        reasons: row.get(10)?,
        failure_message: row.get(11)?,
    })
}

impl WorkloadStore {
    // ── Decision log ──────────────────────────────────────────────

    /// Append one entry. Returns its id.
    pub fn append_log(&self, entry: &NewLogEntry) -> WorkloadResult<i64> {
        self.conn.execute(
            "INSERT INTO assignment_log (
                ts, task_name, skill, priority, hours, success,
                assignee, score, eligible_count, reasons, failure_message
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                entry.task_name,
                entry.skill,
                entry.priority.as_str(),
                entry.hours,
                entry.success as i32,
                entry.assignee,
                entry.score,
                entry.eligible_count.map(|n| n as i64),
                entry.reasons,
                entry.failure_message,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The `limit` most recent entries, newest first.
    pub fn recent_log(&self, limit: usize) -> WorkloadResult<Vec<LogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ts, task_name, skill, priority, hours, success,
                    assignee, score, eligible_count, reasons, failure_message
             FROM assignment_log
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], entry_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(integrity)
    }

    pub fn log_count(&self) -> WorkloadResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM assignment_log", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete every log entry. Returns rows removed.
    pub fn clear_log(&self) -> WorkloadResult<usize> {
        let removed = self.conn.execute("DELETE FROM assignment_log", [])?;
        Ok(removed)
    }
}
