//! Validators for user-supplied input
//!
//! Each validator turns raw text into a typed value or a [`ValidationError`]
//! that a prompter can show before asking again.

use std::path::PathBuf;

use url::Url;

use crate::error::ValidationError;

/// Validate a database repository URL
///
/// Accepts absolute `scheme://host/path` forms (including `file:///path`).
/// Rejects empty input, relative input without a scheme, cannot-be-a-base
/// URLs such as `mailto:` and malformed percent-encoding.
pub fn validate_repository_url(input: &str) -> Result<Url, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let invalid = |reason: String| ValidationError::InvalidUrl {
        input: input.to_string(),
        reason,
    };

    // The url crate passes stray '%' through untouched, so check it here
    if let Some(offset) = malformed_percent_encoding(input) {
        return Err(invalid(format!(
            "malformed percent-encoding at byte {offset}"
        )));
    }

    let url = Url::parse(input).map_err(|e| invalid(e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(invalid(format!(
            "'{}:' URLs cannot address a repository",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Find the first '%' that is not followed by two hex digits
fn malformed_percent_encoding(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        if b != b'%' {
            return None;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        (!valid).then_some(i)
    })
}

/// Parse a yes/no answer; empty input means no
pub fn parse_yes_no(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "" | "n" | "no" | "false" | "0" => Ok(false),
        other => Err(ValidationError::InvalidOption(other.to_string())),
    }
}

/// Parse a database path, expanding a leading `~` to the home directory
pub fn parse_database_path(input: &str) -> Result<PathBuf, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return Ok(home);
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Ok(home.join(rest));
        }
    }

    Ok(PathBuf::from(input))
}
