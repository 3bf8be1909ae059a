//! The interactive menu: a fixed list of actions, a prompt layer that
//! turns an action into a typed [`Command`], and the session loop.

pub mod command;
pub mod prompt;

use std::fmt;

use log::error;

pub use command::Command;
use prompt::Prompter;

use crate::db::Store;
use crate::errors::Result;
use crate::handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    ViewEmployeesByManager,
    ViewEmployeesByDepartment,
    ViewDepartmentBudget,
    DeleteDepartment,
    DeleteRole,
    DeleteEmployee,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 15] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::UpdateEmployeeManager,
        MenuAction::ViewEmployeesByManager,
        MenuAction::ViewEmployeesByDepartment,
        MenuAction::ViewDepartmentBudget,
        MenuAction::DeleteDepartment,
        MenuAction::DeleteRole,
        MenuAction::DeleteEmployee,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update an employee role",
            MenuAction::UpdateEmployeeManager => "Update employee manager",
            MenuAction::ViewEmployeesByManager => "View employees by manager",
            MenuAction::ViewEmployeesByDepartment => "View employees by department",
            MenuAction::ViewDepartmentBudget => "View department budget",
            MenuAction::DeleteDepartment => "Delete a department",
            MenuAction::DeleteRole => "Delete a role",
            MenuAction::DeleteEmployee => "Delete an employee",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingMenuChoice,
    Exit,
}

impl State {
    /// Every command returns to the menu except `Exit`.
    pub fn after(command: &Command) -> State {
        if command.is_exit() {
            State::Exit
        } else {
            State::AwaitingMenuChoice
        }
    }
}

pub struct Session<'a> {
    store: &'a Store,
    prompter: Prompter,
    state: State,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            prompter: Prompter::default(),
            state: State::AwaitingMenuChoice,
        }
    }

    /// Runs until the user picks Exit or an unrecoverable error occurs.
    /// The caller owns the store and is responsible for closing it.
    pub async fn run(&mut self) -> Result<()> {
        while self.state == State::AwaitingMenuChoice {
            let action = self.prompter.action()?;
            self.state = match self.perform(action).await {
                Ok(state) => state,
                Err(err) if err.is_recoverable() => {
                    error!("'{}' failed: {}", action, err);
                    eprintln!("{}", err);
                    State::AwaitingMenuChoice
                }
                Err(err) => return Err(err),
            };
        }
        Ok(())
    }

    async fn perform(&self, action: MenuAction) -> Result<State> {
        let Some(command) = prompt::collect(action, self.store, &self.prompter).await? else {
            return Ok(State::AwaitingMenuChoice);
        };
        let state = State::after(&command);
        handlers::dispatch(self.store, command).await?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_action_once_ending_with_exit() {
        assert_eq!(MenuAction::ALL.len(), 15);
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Exit));
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            assert!(!MenuAction::ALL[i + 1..].contains(action), "{} listed twice", action);
        }
    }

    #[test]
    fn labels_match_menu_wording() {
        assert_eq!(MenuAction::ViewDepartments.to_string(), "View all departments");
        assert_eq!(MenuAction::UpdateEmployeeManager.to_string(), "Update employee manager");
        assert_eq!(MenuAction::ViewDepartmentBudget.to_string(), "View department budget");
    }

    #[test]
    fn exit_is_the_only_terminal_transition() {
        assert_eq!(State::after(&Command::Exit), State::Exit);
        assert_eq!(State::after(&Command::ViewRoles), State::AwaitingMenuChoice);
        assert_eq!(
            State::after(&Command::UpdateEmployeeManager {
                employee_id: 1,
                manager_id: None
            }),
            State::AwaitingMenuChoice
        );
    }
}
