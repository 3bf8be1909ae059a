use log::debug;
use rust_decimal::Decimal;

use super::Store;
use crate::config::DeletePolicy;
use crate::errors::Result;
use crate::models::department::{Department, NewDepartment};

impl Store {
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(departments)
    }

    /// Sum of the salaries of every employee whose role belongs to the
    /// department. `None` when nobody matches: the sum of an empty set is
    /// undefined, not zero.
    pub async fn total_budget_by_department(&self, department_id: i32) -> Result<Option<Decimal>> {
        let total = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(role.salary) AS total_budget
            FROM employee
            JOIN role ON employee.role_id = role.id
            WHERE role.department_id = $1
            "#,
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn add_department(&self, new_department: &NewDepartment) -> Result<Department> {
        let department = sqlx::query_as::<_, Department>(
            "INSERT INTO department (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new_department.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(department)
    }

    /// Deletes by id, returning the removed row or `None` when nothing matched.
    pub async fn delete_department(&self, department_id: i32) -> Result<Option<Department>> {
        const DELETE: &str = "DELETE FROM department WHERE id = $1 RETURNING id, name";

        if self.delete_policy == DeletePolicy::Restrict {
            let deleted = sqlx::query_as::<_, Department>(DELETE)
                .bind(department_id)
                .fetch_optional(&self.pool)
                .await?;
            return Ok(deleted);
        }

        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query(
            r#"
            UPDATE employee SET manager_id = NULL
            WHERE manager_id IN (
                SELECT e.id FROM employee e
                JOIN role ON e.role_id = role.id
                WHERE role.department_id = $1
            )
            "#,
        )
        .bind(department_id)
        .execute(&mut *tx)
        .await?;

        let employees = sqlx::query(
            "DELETE FROM employee WHERE role_id IN (SELECT id FROM role WHERE department_id = $1)",
        )
        .bind(department_id)
        .execute(&mut *tx)
        .await?;

        let roles = sqlx::query("DELETE FROM role WHERE department_id = $1")
            .bind(department_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query_as::<_, Department>(DELETE)
            .bind(department_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "Cascade delete of department {}: {} reports detached, {} employees and {} roles removed",
            department_id,
            detached.rows_affected(),
            employees.rows_affected(),
            roles.rows_affected()
        );
        Ok(deleted)
    }
}
