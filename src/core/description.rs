use super::error::{FaturaError, Result};

/// Validate the description of the contracted service or product.
///
/// Missing, empty and whitespace-only descriptions are rejected. A valid
/// description is returned exactly as given, surrounding whitespace included.
pub fn validate_description(raw: Option<&str>) -> Result<&str> {
    match raw {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(FaturaError::InvalidDescription),
    }
}
