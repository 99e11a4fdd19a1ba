//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen as reasonable UX limits for names, phones and notes;
//! the document store has no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer and product names
pub const MAX_NAME_LEN: usize = 200;

/// Free-text order notes
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Maximum quantity of a single product per order item
pub const MAX_QUANTITY: i32 = 9999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an order item quantity (1..=MAX_QUANTITY).
pub fn validate_quantity(qty: i32, field: &str) -> Result<(), AppError> {
    if qty < 1 {
        return Err(AppError::validation(format!("{field} must be at least 1")));
    }
    if qty > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum of {MAX_QUANTITY}"
        )));
    }
    Ok(())
}
