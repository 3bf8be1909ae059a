use log::{debug, warn};

use super::deleted_message;
use crate::db::Store;
use crate::errors::Result;
use crate::models::employee::{NewEmployee, UpdateOutcome};
use crate::utils::{table, to_json};

pub async fn view_employees(store: &Store) -> Result<()> {
    let employees = store.list_employees().await?;
    println!("{}", table::render(&employees, "No employees found."));
    Ok(())
}

pub async fn view_employees_by_manager(store: &Store, manager_id: i32) -> Result<()> {
    let employees = store.list_employees_by_manager(manager_id).await?;
    println!("{}", table::render(&employees, "No employees report to this manager."));
    Ok(())
}

pub async fn view_employees_by_department(store: &Store, department_id: i32) -> Result<()> {
    let employees = store.list_employees_by_department(department_id).await?;
    println!("{}", table::render(&employees, "No employees found in this department."));
    Ok(())
}

pub async fn add_employee(store: &Store, new_employee: &NewEmployee) -> Result<()> {
    let employee = store.add_employee(new_employee).await?;
    debug!("Inserted employee {}", to_json(&employee));
    println!("Employee {} added.", employee.full_name());
    Ok(())
}

pub async fn update_employee_role(store: &Store, employee_id: i32, role_id: i32) -> Result<()> {
    let outcome = store.update_employee_role(employee_id, role_id).await?;
    println!("{}", update_message("role", employee_id, outcome));
    Ok(())
}

pub async fn update_employee_manager(
    store: &Store,
    employee_id: i32,
    manager_id: Option<i32>,
) -> Result<()> {
    let outcome = store.update_employee_manager(employee_id, manager_id).await?;
    println!("{}", update_message("manager", employee_id, outcome));
    Ok(())
}

pub async fn delete_employee(store: &Store, employee_id: i32) -> Result<()> {
    let deleted = store.delete_employee(employee_id).await?;
    if let Some(employee) = &deleted {
        debug!("Deleted employee {}", to_json(employee));
    }
    let name = deleted.as_ref().map(|emp| emp.full_name());
    println!("{}", deleted_message("employee", employee_id, name.as_deref()));
    Ok(())
}

pub fn update_message(field: &str, employee_id: i32, outcome: UpdateOutcome) -> String {
    if outcome.matched() {
        format!("Employee {} updated.", field)
    } else {
        warn!("Update of {} matched no employee with id {}", field, employee_id);
        format!("No employee with id {}; {} unchanged.", employee_id, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_message_confirms_matched_rows() {
        let outcome = UpdateOutcome { rows_affected: 1 };
        assert_eq!(update_message("role", 3, outcome), "Employee role updated.");
    }

    #[test]
    fn update_message_flags_noop_updates() {
        let outcome = UpdateOutcome { rows_affected: 0 };
        assert_eq!(
            update_message("manager", 42, outcome),
            "No employee with id 42; manager unchanged."
        );
    }
}
