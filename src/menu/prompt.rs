use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use super::command::Command;
use super::MenuAction;
use crate::db::Store;
use crate::errors::Result;
use crate::models::department::Department;
use crate::models::employee::EmployeeView;
use crate::models::role::RoleView;
use crate::utils::validation::{clean_text, parse_salary};

/// A labelled entry of a single-select prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

pub struct Prompter {
    theme: ColorfulTheme,
}

impl Default for Prompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter {
    pub fn action(&self) -> Result<MenuAction> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("What would you like to do?")
            .items(&MenuAction::ALL)
            .default(0)
            .interact()?;
        Ok(MenuAction::ALL[index])
    }

    /// Free text; re-prompts until the input is non-empty and fits the column.
    pub fn text(&self, prompt: &str, field: &'static str) -> Result<String> {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                clean_text(field, input).map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()?;
        Ok(input)
    }

    pub fn salary(&self, prompt: &str) -> Result<String> {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                parse_salary(input).map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()?;
        Ok(input)
    }

    pub fn choose<T: Clone>(&self, prompt: &str, choices: &[Choice<T>]) -> Result<T> {
        let labels: Vec<&str> = choices.iter().map(|choice| choice.label.as_str()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(choices[index].value.clone())
    }
}

pub fn department_choices(departments: &[Department]) -> Vec<Choice<i32>> {
    departments
        .iter()
        .map(|dept| Choice {
            label: dept.name.clone(),
            value: dept.id,
        })
        .collect()
}

pub fn role_choices(roles: &[RoleView]) -> Vec<Choice<i32>> {
    roles
        .iter()
        .map(|role| Choice {
            label: format!("{} ({})", role.title, role.department),
            value: role.id,
        })
        .collect()
}

pub fn employee_choices(employees: &[EmployeeView]) -> Vec<Choice<i32>> {
    employees
        .iter()
        .map(|emp| Choice {
            label: emp.full_name(),
            value: emp.id,
        })
        .collect()
}

/// Candidate managers: "None" first, then everyone except `exclude`.
pub fn manager_choices(employees: &[EmployeeView], exclude: Option<i32>) -> Vec<Choice<Option<i32>>> {
    let mut choices = vec![Choice {
        label: "None".to_string(),
        value: None,
    }];
    choices.extend(
        employees
            .iter()
            .filter(|emp| Some(emp.id) != exclude)
            .map(|emp| Choice {
                label: emp.full_name(),
                value: Some(emp.id),
            }),
    );
    choices
}

fn skip(message: &str) -> Result<Option<Command>> {
    println!("{}", message);
    Ok(None)
}

const NO_DEPARTMENTS: &str = "No departments found. Add a department first.";
const NO_ROLES: &str = "No roles found. Add a role first.";
const NO_EMPLOYEES: &str = "No employees found. Add an employee first.";

/// Collects the input an action needs and decodes it into a [`Command`].
///
/// Selection lists are fetched fresh from the store. Returns `None` when
/// the action cannot proceed because a list it needs is empty.
pub async fn collect(action: MenuAction, store: &Store, prompter: &Prompter) -> Result<Option<Command>> {
    let command = match action {
        MenuAction::ViewDepartments => Command::ViewDepartments,
        MenuAction::ViewRoles => Command::ViewRoles,
        MenuAction::ViewEmployees => Command::ViewEmployees,

        MenuAction::AddDepartment => {
            let name = prompter.text("Enter the department name", "department name")?;
            Command::add_department(&name)?
        }

        MenuAction::AddRole => {
            let departments = store.list_departments().await?;
            if departments.is_empty() {
                return skip(NO_DEPARTMENTS);
            }
            let title = prompter.text("Enter the role title", "role title")?;
            let salary = prompter.salary("Enter the role salary")?;
            let department_id = prompter.choose("Select the department", &department_choices(&departments))?;
            Command::add_role(&title, &salary, department_id)?
        }

        MenuAction::AddEmployee => {
            let roles = store.list_roles().await?;
            if roles.is_empty() {
                return skip(NO_ROLES);
            }
            let employees = store.list_employees().await?;
            let first_name = prompter.text("Enter the employee's first name", "first name")?;
            let last_name = prompter.text("Enter the employee's last name", "last name")?;
            let role_id = prompter.choose("Select the role", &role_choices(&roles))?;
            let manager_id =
                prompter.choose("Select the employee's manager", &manager_choices(&employees, None))?;
            Command::add_employee(&first_name, &last_name, role_id, manager_id)?
        }

        MenuAction::UpdateEmployeeRole => {
            let employees = store.list_employees().await?;
            if employees.is_empty() {
                return skip(NO_EMPLOYEES);
            }
            let employee_id = prompter.choose("Select the employee", &employee_choices(&employees))?;
            let roles = store.list_roles().await?;
            if roles.is_empty() {
                return skip(NO_ROLES);
            }
            let role_id = prompter.choose("Select the new role", &role_choices(&roles))?;
            Command::UpdateEmployeeRole { employee_id, role_id }
        }

        MenuAction::UpdateEmployeeManager => {
            let employees = store.list_employees().await?;
            if employees.is_empty() {
                return skip(NO_EMPLOYEES);
            }
            let employee_id = prompter.choose("Select the employee", &employee_choices(&employees))?;
            let manager_id = prompter.choose(
                "Select the new manager",
                &manager_choices(&employees, Some(employee_id)),
            )?;
            Command::UpdateEmployeeManager {
                employee_id,
                manager_id,
            }
        }

        MenuAction::ViewEmployeesByManager => {
            let employees = store.list_employees().await?;
            if employees.is_empty() {
                return skip(NO_EMPLOYEES);
            }
            let manager_id = prompter.choose("Select a manager", &employee_choices(&employees))?;
            Command::ViewEmployeesByManager { manager_id }
        }

        MenuAction::ViewEmployeesByDepartment => {
            let departments = store.list_departments().await?;
            if departments.is_empty() {
                return skip(NO_DEPARTMENTS);
            }
            let department_id = prompter.choose("Select a department", &department_choices(&departments))?;
            Command::ViewEmployeesByDepartment { department_id }
        }

        MenuAction::ViewDepartmentBudget => {
            let departments = store.list_departments().await?;
            if departments.is_empty() {
                return skip(NO_DEPARTMENTS);
            }
            let choices: Vec<Choice<Department>> = departments
                .into_iter()
                .map(|dept| Choice {
                    label: dept.name.clone(),
                    value: dept,
                })
                .collect();
            Command::ViewDepartmentBudget(prompter.choose("Select a department", &choices)?)
        }

        MenuAction::DeleteDepartment => {
            let departments = store.list_departments().await?;
            if departments.is_empty() {
                return skip(NO_DEPARTMENTS);
            }
            let department_id =
                prompter.choose("Select a department to delete", &department_choices(&departments))?;
            Command::DeleteDepartment { department_id }
        }

        MenuAction::DeleteRole => {
            let roles = store.list_roles().await?;
            if roles.is_empty() {
                return skip(NO_ROLES);
            }
            let role_id = prompter.choose("Select a role to delete", &role_choices(&roles))?;
            Command::DeleteRole { role_id }
        }

        MenuAction::DeleteEmployee => {
            let employees = store.list_employees().await?;
            if employees.is_empty() {
                return skip(NO_EMPLOYEES);
            }
            let employee_id =
                prompter.choose("Select an employee to delete", &employee_choices(&employees))?;
            Command::DeleteEmployee { employee_id }
        }

        MenuAction::Exit => Command::Exit,
    };

    Ok(Some(command))
}
