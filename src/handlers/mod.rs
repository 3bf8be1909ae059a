pub mod department;
pub mod employee;
pub mod role;

use log::debug;

use crate::db::Store;
use crate::errors::Result;
use crate::menu::Command;

/// Executes one command against the store and prints its result.
pub async fn dispatch(store: &Store, command: Command) -> Result<()> {
    debug!("Dispatching {:?}", command);
    match command {
        Command::ViewDepartments => department::view_departments(store).await,
        Command::ViewRoles => role::view_roles(store).await,
        Command::ViewEmployees => employee::view_employees(store).await,
        Command::AddDepartment(new_department) => department::add_department(store, &new_department).await,
        Command::AddRole(new_role) => role::add_role(store, &new_role).await,
        Command::AddEmployee(new_employee) => employee::add_employee(store, &new_employee).await,
        Command::UpdateEmployeeRole { employee_id, role_id } => {
            employee::update_employee_role(store, employee_id, role_id).await
        }
        Command::UpdateEmployeeManager {
            employee_id,
            manager_id,
        } => employee::update_employee_manager(store, employee_id, manager_id).await,
        Command::ViewEmployeesByManager { manager_id } => {
            employee::view_employees_by_manager(store, manager_id).await
        }
        Command::ViewEmployeesByDepartment { department_id } => {
            employee::view_employees_by_department(store, department_id).await
        }
        Command::ViewDepartmentBudget(department) => department::view_budget(store, &department).await,
        Command::DeleteDepartment { department_id } => {
            department::delete_department(store, department_id).await
        }
        Command::DeleteRole { role_id } => role::delete_role(store, role_id).await,
        Command::DeleteEmployee { employee_id } => employee::delete_employee(store, employee_id).await,
        Command::Exit => {
            println!("Goodbye.");
            Ok(())
        }
    }
}

/// Confirmation for a delete-by-id, which may have matched nothing.
pub fn deleted_message(entity: &str, id: i32, deleted: Option<&str>) -> String {
    match deleted {
        Some(label) => format!("{} {} deleted.", capitalize(entity), label),
        None => format!("No {} with id {}.", entity, id),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
