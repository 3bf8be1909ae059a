use thiserror::Error;
use validator::ValidationErrors;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Foreign Key Violation ({constraint}): {message}")]
    ForeignKeyViolation { constraint: String, message: String },

    #[error("Database Error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Prompt Error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl AppError {
    /// Whether the interactive session can carry on after this error.
    ///
    /// Store and input failures only abort the current action. A broken
    /// terminal, bad configuration or a lost connection end the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Validation(_) | AppError::ForeignKeyViolation { .. } => true,
            AppError::Database(err) => matches!(
                err,
                sqlx::Error::Database(_) | sqlx::Error::RowNotFound | sqlx::Error::ColumnDecode { .. }
            ),
            AppError::Config(_) | AppError::Prompt(_) => false,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return AppError::ForeignKeyViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                    message: db_err.message().to_string(),
                };
            }
        }
        AppError::Database(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let details = err
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let errors = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}: {}", field, errors)
            })
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Validation(details)
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_and_prompt_errors_end_the_session() {
        assert!(!AppError::Config("DB_USER must be set".into()).is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        assert!(!AppError::Prompt(dialoguer::Error::IO(io)).is_recoverable());
    }

    #[test]
    fn constraint_and_input_errors_are_recoverable() {
        assert!(AppError::Validation("name: too long".into()).is_recoverable());
        assert!(AppError::ForeignKeyViolation {
            constraint: "role_department_id_fkey".into(),
            message: "update or delete violates foreign key".into(),
        }
        .is_recoverable());
    }

    #[test]
    fn connection_loss_is_fatal() {
        let err = AppError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, AppError::Database(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn foreign_key_violation_display_names_constraint() {
        let err = AppError::ForeignKeyViolation {
            constraint: "employee_role_id_fkey".into(),
            message: "insert violates foreign key".into(),
        };
        assert_eq!(
            err.to_string(),
            "Foreign Key Violation (employee_role_id_fkey): insert violates foreign key"
        );
    }
}
