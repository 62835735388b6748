//! Validation rules for record fields.
//!
//! Pure functions with no side effects. The store repeats the length rules
//! as CHECK constraints, but callers validate before writing so errors come
//! back with field context instead of as constraint failures.

use thiserror::Error;

/// Minimum name length in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum name length in characters.
pub const NAME_MAX_CHARS: usize = 50;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// A field-level rule violation, reported back to the caller synchronously.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    NameEmpty,
    #[error("Name must be between 3 and 50 characters, got {len}")]
    NameLength { len: usize },
    #[error("Name contains invalid characters: '{found}'")]
    NameCharacter { found: char },
    #[error("Description cannot exceed 255 characters, got {len}")]
    DescriptionLength { len: usize },
}

/// Check a record name against the naming rules.
///
/// Blank names (empty or whitespace-only) are rejected first; the length
/// check then counts the untrimmed characters, so surrounding whitespace
/// counts toward the 3..=50 limit.
///
/// # Examples
///
/// ```
/// use card_file_model::validate::validate_name;
///
/// assert!(validate_name("Task A").is_ok());
/// assert!(validate_name("ab").is_err());
/// assert!(validate_name("price: $5").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }

    let len = name.chars().count();
    if len < NAME_MIN_CHARS || len > NAME_MAX_CHARS {
        return Err(ValidationError::NameLength { len });
    }

    if let Some(found) = name.chars().find(|c| !is_allowed_name_char(*c)) {
        return Err(ValidationError::NameCharacter { found });
    }

    Ok(())
}

/// Check an optional description against the length rule.
///
/// A missing or empty description is always valid.
pub fn validate_description(description: Option<&str>) -> Result<(), ValidationError> {
    if let Some(text) = description {
        let len = text.chars().count();
        if len > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionLength { len });
        }
    }
    Ok(())
}

/// Letters, digits, ASCII whitespace, hyphen, dot, and underscore.
fn is_allowed_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || matches!(c, '-' | '.' | '_')
}
