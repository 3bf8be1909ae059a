use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use validator::{Validate, ValidationError};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub title: String,
    pub salary: Decimal,
    pub department_id: i32,
}

/// A role joined with the name of its department.
#[derive(sqlx::FromRow, Tabled, Serialize, Debug, Clone, PartialEq)]
pub struct RoleView {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct NewRole {
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub title: String,
    #[validate(custom = "validate_salary")]
    pub salary: Decimal,
    pub department_id: i32,
}

fn validate_salary(salary: &Decimal) -> Result<(), ValidationError> {
    if salary.is_sign_negative() && !salary.is_zero() {
        let mut err = ValidationError::new("negative_salary");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_salary_fails_validation() {
        let role = NewRole {
            title: "Intern".into(),
            salary: dec!(-1),
            department_id: 1,
        };
        let err = role.validate().unwrap_err();
        assert!(err.field_errors().contains_key("salary"));
    }

    #[test]
    fn zero_salary_is_allowed() {
        let role = NewRole {
            title: "Volunteer".into(),
            salary: dec!(0),
            department_id: 1,
        };
        assert!(role.validate().is_ok());
    }

    #[test]
    fn empty_title_fails_validation() {
        let role = NewRole {
            title: String::new(),
            salary: dec!(60000),
            department_id: 1,
        };
        assert!(role.validate().unwrap_err().field_errors().contains_key("title"));
    }
}
