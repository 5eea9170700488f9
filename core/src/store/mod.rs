//! SQLite persistence layer.
//!
//! RULE: Only store/ talks to the database.
//! The engine calls store methods; it never executes SQL directly.

use crate::{
    config::RosterConfig,
    error::{WorkloadError, WorkloadResult},
};
use rusqlite::{Connection, Transaction, TransactionBehavior};

mod assignment_log;
mod employee;
mod skill;

pub struct WorkloadStore {
    conn: Connection,
}

/// Row counts written by a seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub skills:    usize,
    pub employees: usize,
}

impl WorkloadStore {
    pub fn open(path: &str) -> WorkloadResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> WorkloadResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order. Safe to call on every startup.
    pub fn migrate(&self) -> WorkloadResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    /// Run `f` inside one IMMEDIATE transaction.
    ///
    /// Commits only if `f` returns Ok. Any error drops the transaction,
    /// which rolls back every write `f` made. Must not be nested.
    pub fn with_transaction<T>(
        &self,
        f: impl FnOnce(&Self) -> WorkloadResult<T>,
    ) -> WorkloadResult<T> {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)?;
        let out = f(self)?;
        tx.commit()?;
        Ok(out)
    }

    /// Seed the catalog and roster on first run.
    ///
    /// Skills are inserted only when the skill table is empty and employees
    /// only when the employee table is empty, so restarts never duplicate rows
    /// or clobber accumulated hours.
    pub fn seed_if_empty(&self, config: &RosterConfig) -> WorkloadResult<SeedReport> {
        self.with_transaction(|store| {
            let mut report = SeedReport::default();
            if store.skill_count()? == 0 {
                for record in &config.skills {
                    store.insert_skill(record)?;
                    report.skills += 1;
                }
            }
            if store.employee_count()? == 0 {
                for seed in &config.employees {
                    store.insert_employee(seed)?;
                    report.employees += 1;
                }
            }
            Ok(report)
        })
    }
}

/// Convert a column conversion failure into a data-integrity error.
/// Everything else stays a database error.
pub(crate) fn integrity(err: rusqlite::Error) -> WorkloadError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(col, _, inner) => {
            WorkloadError::DataIntegrity(format!("column {col}: {inner}"))
        }
        other => WorkloadError::Database(other),
    }
}
