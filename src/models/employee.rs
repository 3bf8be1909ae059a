use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Full employee listing: role, department and manager name resolved.
#[derive(sqlx::FromRow, Tabled, Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
    #[tabled(display_with = "display_manager")]
    pub manager: Option<String>,
}

impl EmployeeView {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(sqlx::FromRow, Tabled, Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeByManagerView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
}

#[derive(sqlx::FromRow, Tabled, Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeByDepartmentView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub salary: Decimal,
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

/// Row count reported by an in-place update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub rows_affected: u64,
}

impl UpdateOutcome {
    pub fn matched(&self) -> bool {
        self.rows_affected > 0
    }
}

fn display_manager(manager: &Option<String>) -> String {
    manager.clone().unwrap_or_else(|| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_manager_renders_as_null() {
        assert_eq!(display_manager(&None), "null");
        assert_eq!(display_manager(&Some("Grace Hopper".into())), "Grace Hopper");
    }

    #[test]
    fn overlong_last_name_fails_validation() {
        let employee = NewEmployee {
            first_name: "Ada".into(),
            last_name: "L".repeat(31),
            role_id: 1,
            manager_id: None,
        };
        let err = employee.validate().unwrap_err();
        assert!(err.field_errors().contains_key("last_name"));
        assert!(!err.field_errors().contains_key("first_name"));
    }

    #[test]
    fn update_outcome_reports_match() {
        assert!(UpdateOutcome { rows_affected: 1 }.matched());
        assert!(!UpdateOutcome { rows_affected: 0 }.matched());
    }
}
