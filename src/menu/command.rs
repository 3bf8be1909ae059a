use crate::errors::Result;
use crate::models::department::{Department, NewDepartment};
use crate::models::employee::NewEmployee;
use crate::models::role::NewRole;
use crate::utils::validation::{clean_text, parse_salary, validate_payload};

/// One fully decoded menu action with the typed arguments its handler needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment(NewDepartment),
    AddRole(NewRole),
    AddEmployee(NewEmployee),
    UpdateEmployeeRole { employee_id: i32, role_id: i32 },
    UpdateEmployeeManager { employee_id: i32, manager_id: Option<i32> },
    ViewEmployeesByManager { manager_id: i32 },
    ViewEmployeesByDepartment { department_id: i32 },
    ViewDepartmentBudget(Department),
    DeleteDepartment { department_id: i32 },
    DeleteRole { role_id: i32 },
    DeleteEmployee { employee_id: i32 },
    Exit,
}

impl Command {
    pub fn add_department(name: &str) -> Result<Self> {
        let payload = NewDepartment {
            name: clean_text("department name", name)?,
        };
        validate_payload(&payload)?;
        Ok(Command::AddDepartment(payload))
    }

    pub fn add_role(title: &str, salary: &str, department_id: i32) -> Result<Self> {
        let payload = NewRole {
            title: clean_text("role title", title)?,
            salary: parse_salary(salary)?,
            department_id,
        };
        validate_payload(&payload)?;
        Ok(Command::AddRole(payload))
    }

    pub fn add_employee(
        first_name: &str,
        last_name: &str,
        role_id: i32,
        manager_id: Option<i32>,
    ) -> Result<Self> {
        let payload = NewEmployee {
            first_name: clean_text("first name", first_name)?,
            last_name: clean_text("last name", last_name)?,
            role_id,
            manager_id,
        };
        validate_payload(&payload)?;
        Ok(Command::AddEmployee(payload))
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}
