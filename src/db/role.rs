use log::debug;

use super::Store;
use crate::config::DeletePolicy;
use crate::errors::Result;
use crate::models::role::{NewRole, Role, RoleView};

const ROLE_COLUMNS: &str = "id, title, salary, department_id";

impl Store {
    /// Roles with their department name. Inner join: a role whose
    /// department no longer exists is left out.
    pub async fn list_roles(&self) -> Result<Vec<RoleView>> {
        let roles = sqlx::query_as::<_, RoleView>(
            r#"
            SELECT role.id, role.title, department.name AS department, role.salary
            FROM role
            JOIN department ON role.department_id = department.id
            ORDER BY role.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }

    pub async fn add_role(&self, new_role: &NewRole) -> Result<Role> {
        let sql = format!(
            "INSERT INTO role (title, salary, department_id) VALUES ($1, $2, $3) RETURNING {}",
            ROLE_COLUMNS
        );
        let role = sqlx::query_as::<_, Role>(&sql)
            .bind(&new_role.title)
            .bind(new_role.salary)
            .bind(new_role.department_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(role)
    }

    pub async fn delete_role(&self, role_id: i32) -> Result<Option<Role>> {
        let delete = format!("DELETE FROM role WHERE id = $1 RETURNING {}", ROLE_COLUMNS);

        if self.delete_policy == DeletePolicy::Restrict {
            let deleted = sqlx::query_as::<_, Role>(&delete)
                .bind(role_id)
                .fetch_optional(&self.pool)
                .await?;
            return Ok(deleted);
        }

        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query(
            "UPDATE employee SET manager_id = NULL WHERE manager_id IN (SELECT id FROM employee WHERE role_id = $1)",
        )
        .bind(role_id)
        .execute(&mut *tx)
        .await?;

        let employees = sqlx::query("DELETE FROM employee WHERE role_id = $1")
            .bind(role_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query_as::<_, Role>(&delete)
            .bind(role_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "Cascade delete of role {}: {} reports detached, {} employees removed",
            role_id,
            detached.rows_affected(),
            employees.rows_affected()
        );
        Ok(deleted)
    }
}
