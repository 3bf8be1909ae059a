use log::debug;

use super::Store;
use crate::config::DeletePolicy;
use crate::errors::Result;
use crate::models::employee::{
    Employee, EmployeeByDepartmentView, EmployeeByManagerView, EmployeeView, NewEmployee,
    UpdateOutcome,
};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, role_id, manager_id";

impl Store {
    /// Every employee with role, department and manager name. The manager
    /// join is a left join so employees without a manager are kept, with
    /// `manager` set to NULL.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeView>> {
        let employees = sqlx::query_as::<_, EmployeeView>(
            r#"
            SELECT e.id, e.first_name, e.last_name, role.title,
                   department.name AS department, role.salary,
                   m.first_name || ' ' || m.last_name AS manager
            FROM employee e
            JOIN role ON e.role_id = role.id
            JOIN department ON role.department_id = department.id
            LEFT JOIN employee m ON e.manager_id = m.id
            ORDER BY e.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    pub async fn list_employees_by_manager(&self, manager_id: i32) -> Result<Vec<EmployeeByManagerView>> {
        let employees = sqlx::query_as::<_, EmployeeByManagerView>(
            r#"
            SELECT e.id, e.first_name, e.last_name, role.title,
                   department.name AS department, role.salary
            FROM employee e
            JOIN role ON e.role_id = role.id
            JOIN department ON role.department_id = department.id
            WHERE e.manager_id = $1
            ORDER BY e.id
            "#,
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    pub async fn list_employees_by_department(
        &self,
        department_id: i32,
    ) -> Result<Vec<EmployeeByDepartmentView>> {
        let employees = sqlx::query_as::<_, EmployeeByDepartmentView>(
            r#"
            SELECT e.id, e.first_name, e.last_name, role.title, role.salary
            FROM employee e
            JOIN role ON e.role_id = role.id
            WHERE role.department_id = $1
            ORDER BY e.id
            "#,
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    pub async fn add_employee(&self, new_employee: &NewEmployee) -> Result<Employee> {
        let sql = format!(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(&new_employee.first_name)
            .bind(&new_employee.last_name)
            .bind(new_employee.role_id)
            .bind(new_employee.manager_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(employee)
    }

    pub async fn update_employee_role(&self, employee_id: i32, role_id: i32) -> Result<UpdateOutcome> {
        let result = sqlx::query("UPDATE employee SET role_id = $1 WHERE id = $2")
            .bind(role_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(UpdateOutcome {
            rows_affected: result.rows_affected(),
        })
    }

    /// Points the employee at a new manager; `None` clears it.
    pub async fn update_employee_manager(
        &self,
        employee_id: i32,
        manager_id: Option<i32>,
    ) -> Result<UpdateOutcome> {
        let result = sqlx::query("UPDATE employee SET manager_id = $1 WHERE id = $2")
            .bind(manager_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(UpdateOutcome {
            rows_affected: result.rows_affected(),
        })
    }

    pub async fn delete_employee(&self, employee_id: i32) -> Result<Option<Employee>> {
        let delete = format!("DELETE FROM employee WHERE id = $1 RETURNING {}", EMPLOYEE_COLUMNS);

        if self.delete_policy == DeletePolicy::Restrict {
            let deleted = sqlx::query_as::<_, Employee>(&delete)
                .bind(employee_id)
                .fetch_optional(&self.pool)
                .await?;
            return Ok(deleted);
        }

        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query("UPDATE employee SET manager_id = NULL WHERE manager_id = $1")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query_as::<_, Employee>(&delete)
            .bind(employee_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "Cascade delete of employee {}: {} reports detached",
            employee_id,
            detached.rows_affected()
        );
        Ok(deleted)
    }
}
