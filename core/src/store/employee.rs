use super::{integrity, WorkloadStore};
use crate::{
    employee::{Employee, EmployeeSeed},
    error::{WorkloadError, WorkloadResult},
    types::{EmployeeId, Hours},
};
use rusqlite::{params, OptionalExtension, Row};

const EMPLOYEE_COLUMNS: &str =
    "id, name, expertise, reliability, seed_hours, current_hours";

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        expertise: row.get(2)?,
        reliability: row.get(3)?,
        seed_hours: row.get(4)?,
        current_hours: row.get(5)?,
    })
}

impl WorkloadStore {
    // ── Employee ──────────────────────────────────────────────────

    /// Insert a seed employee with current hours at the seed value.
    pub fn insert_employee(&self, seed: &EmployeeSeed) -> WorkloadResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO employee (name, expertise, reliability, seed_hours, current_hours)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![seed.name, seed.expertise, seed.reliability, seed.seed_hours],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn employee_count(&self) -> WorkloadResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employee", [], |row| row.get(0))?;
        Ok(count)
    }

    /// The full roster in ascending id order.
    pub fn all_employees(&self) -> WorkloadResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY id ASC"))?;
        let rows = stmt.query_map([], employee_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(integrity)
    }

    pub fn employee_by_id(&self, id: EmployeeId) -> WorkloadResult<Option<Employee>> {
        self.conn
            .query_row(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?1"),
                params![id],
                employee_from_row,
            )
            .optional()
            .map_err(integrity)
    }

    /// Add `hours` to one employee's current workload.
    pub fn add_hours(&self, id: EmployeeId, hours: Hours) -> WorkloadResult<()> {
        let updated = self.conn.execute(
            "UPDATE employee SET current_hours = current_hours + ?1 WHERE id = ?2",
            params![hours, id],
        )?;
        if updated != 1 {
            return Err(WorkloadError::DataIntegrity(format!(
                "employee {id} vanished during assignment"
            )));
        }
        Ok(())
    }

    /// Restore every employee to their seed hours. Returns rows touched.
    pub fn reset_hours(&self) -> WorkloadResult<usize> {
        let updated = self
            .conn
            .execute("UPDATE employee SET current_hours = seed_hours", [])?;
        Ok(updated)
    }
}
