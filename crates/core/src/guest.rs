//! Guest display-name generation.

use rand::Rng;

use crate::error::CoreError;

/// Prefix used when the client offers no name hint.
pub const DEFAULT_GUEST_PREFIX: &str = "Guest";

/// Longest accepted name hint, in characters.
pub const MAX_GUEST_HINT_LEN: usize = 24;

/// Generate a guest display name such as `Guest 0007`.
///
/// A non-blank `hint` replaces the `Guest` prefix. The random four-digit
/// suffix is always server-generated.
pub fn generate_guest_name(hint: Option<&str>) -> Result<String, CoreError> {
    let prefix = normalize_hint(hint)?;
    let code: u16 = rand::rng().random_range(0..10_000);
    Ok(format_guest_name(&prefix, code))
}

/// Format a prefix and a code as `<prefix> NNNN`.
pub fn format_guest_name(prefix: &str, code: u16) -> String {
    format!("{prefix} {:04}", code % 10_000)
}

fn normalize_hint(hint: Option<&str>) -> Result<String, CoreError> {
    let trimmed = hint.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(DEFAULT_GUEST_PREFIX.to_string());
    }
    if trimmed.chars().count() > MAX_GUEST_HINT_LEN {
        return Err(CoreError::Validation(format!(
            "Guest name must be at most {MAX_GUEST_HINT_LEN} characters"
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(CoreError::Validation(
            "Guest name must not contain control characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
