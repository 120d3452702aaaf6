use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::fields::BEFORE_SAVE_TAG;

/// An error from building, connecting to or writing into the schema
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A text column was rejected, by `before_save` or by the column's
    /// length `CHECK`
    #[error("Validation Error: {0}")]
    Validation(String),
    /// A reference points to a record that does not exist
    #[error("Foreign Key Violation: {0}")]
    ForeignKey(String),
    /// A required reference was left empty
    #[error("Not Null Violation: {0}")]
    NotNull(String),
    /// A setting could not be parsed
    #[error("Config Error: {0}")]
    Config(String),
    /// Any other database error
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for SchemaError {
    fn from(err: DbErr) -> Self {
        if let DbErr::Custom(msg) = &err {
            if let Some(rest) = msg.strip_prefix(BEFORE_SAVE_TAG) {
                return Self::Validation(rest.trim_start().to_owned());
            }
        }
        if let Some(SqlErr::ForeignKeyConstraintViolation(msg)) = err.sql_err() {
            return Self::ForeignKey(msg);
        }
        let msg = err.to_string();
        if msg.contains("FOREIGN KEY constraint failed") || msg.contains("foreign key constraint")
        {
            Self::ForeignKey(msg)
        } else if is_not_null_violation(&msg) {
            Self::NotNull(msg)
        } else if is_check_violation(&msg) {
            Self::Validation(msg)
        } else {
            Self::Db(err)
        }
    }
}

// SQLite, Postgres, then MySQL 1364 and 1048
fn is_not_null_violation(msg: &str) -> bool {
    msg.contains("NOT NULL constraint failed")
        || msg.contains("not-null constraint")
        || msg.contains("doesn't have a default value")
        || msg.contains("cannot be null")
}

// SQLite, Postgres, then MySQL 3819
fn is_check_violation(msg: &str) -> bool {
    msg.contains("CHECK constraint failed")
        || msg.contains("violates check constraint")
        || (msg.contains("Check constraint") && msg.contains("is violated"))
}
