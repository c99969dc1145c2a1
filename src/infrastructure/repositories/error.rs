// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

// SQLite names the offending column rather than the constraint.
const UNIQUE_TOOL_SLUG: &str = "tools.slug";
const UNIQUE_POST_SLUG: &str = "posts.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                return if message.contains(UNIQUE_TOOL_SLUG) {
                    DomainError::Conflict("tool slug already exists".into())
                } else if message.contains(UNIQUE_POST_SLUG) {
                    DomainError::Conflict("post slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_check_violation() {
                return DomainError::Validation(format!("check constraint violated: {message}"));
            }

            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
