use std::str::FromStr;

use rust_decimal::Decimal;
use validator::Validate;

use crate::errors::{AppError, Result};

/// Longest name or title the schema accepts (`VARCHAR(30)`).
pub const MAX_TEXT_LEN: usize = 30;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<()> {
    payload.validate().map_err(AppError::from)
}

/// Trimmed free text, rejected when empty or longer than the column allows.
pub fn clean_text(field: &str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(trimmed.to_string())
}

/// Parses a salary such as `60000`, `60000.50` or `60,000`.
pub fn parse_salary(input: &str) -> Result<Decimal> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let salary = Decimal::from_str(&cleaned)
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid salary", input.trim())))?;
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(AppError::Validation("salary must not be negative".to_string()));
    }
    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn clean_text_trims_whitespace() {
        assert_eq!(clean_text("name", "  Engineering ").unwrap(), "Engineering");
    }

    #[test]
    fn clean_text_rejects_blank_input() {
        let err = clean_text("name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "Validation Error: name must not be empty");
    }

    #[test]
    fn clean_text_rejects_overlong_input() {
        assert!(clean_text("title", &"x".repeat(31)).is_err());
        assert!(clean_text("title", &"x".repeat(30)).is_ok());
    }

    #[test]
    fn parse_salary_accepts_plain_and_grouped_numbers() {
        assert_eq!(parse_salary("60000").unwrap(), dec!(60000));
        assert_eq!(parse_salary(" 60,000.50 ").unwrap(), dec!(60000.50));
    }

    #[test]
    fn parse_salary_rejects_garbage_and_negatives() {
        assert!(parse_salary("sixty thousand").is_err());
        assert!(parse_salary("").is_err());
        assert!(parse_salary("-5").is_err());
    }
}
