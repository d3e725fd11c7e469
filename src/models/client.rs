//! Client identity helpers.
//!
//! Clients have no table of their own: rows are grouped by a *client key*,
//! the trimmed, whitespace-collapsed, lower-cased name.

use crate::errors::{AppError, AppResult};

/// Collapse inner whitespace and trim: "  Ana   Maria " → "Ana Maria".
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn client_key(name: &str) -> String {
    normalize_name(name).to_lowercase()
}

/// A name must be non-empty before any row is written.
pub fn validate_name(name: &str) -> AppResult<String> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return Err(AppError::Validation("client name is required".into()));
    }
    Ok(normalized)
}
