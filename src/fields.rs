//! Column constraints shared by every entity.
//!
//! SQLite accepts any length for `varchar(n)`. The text limit is checked in
//! `before_save`, with a readable message, and again by the length `CHECK`
//! that [`crate::schema`] puts on every text column.

use sea_orm::{ActiveValue, DbErr};

/// Maximum length, in characters, of every text column.
pub const MAX_TEXT_LEN: usize = 255;

/// Prefix of the `DbErr::Custom` message produced by a failed check.
pub const BEFORE_SAVE_TAG: &str = "[before_save]";

/// Reject `value` if it is longer than [`MAX_TEXT_LEN`] characters.
pub fn validate_text(column: &str, value: &str) -> Result<(), DbErr> {
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        Err(DbErr::Custom(format!(
            "{BEFORE_SAVE_TAG} Value of `{column}` is {len} characters long, max is {MAX_TEXT_LEN}"
        )))
    } else {
        Ok(())
    }
}

/// Same as [`validate_text`], for the value held by an active model.
/// Columns left `NotSet` are not checked.
pub fn validate_active_text(column: &str, value: &ActiveValue<String>) -> Result<(), DbErr> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => validate_text(column, v),
        ActiveValue::NotSet => Ok(()),
    }
}
