//! Application identifier validation.
//!
//! The native layer expects identifiers in reverse domain name format
//! (ex. `com.example.hello-armio`). Validation happens on this side of the
//! boundary so a malformed identifier fails deterministically, before any
//! connection attempt.

use crate::error::{Error, Result};

/// Maximum identifier length accepted by the native layer, in bytes.
pub const MAX_IDENTIFIER_LEN: usize = 255;

/// Validate an application identifier.
///
/// The grammar, matching the native layer's documentation:
///
/// - the empty string is allowed and acts as a wildcard identifier;
/// - otherwise the identifier is `.`-separated segments of alphanumeric
///   ASCII, three or more of them;
/// - `-` and `_` are permitted inside a segment but not adjacent to a `.`
///   (i.e. not at the start or end of a segment), and not at all in the
///   top-level domain (the first segment);
/// - the whole identifier is at most 255 bytes.
pub fn validate_application_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Ok(());
    }

    if identifier.len() > MAX_IDENTIFIER_LEN {
        return Err(Error::invalid_argument(format!(
            "application identifier is {} bytes, limit is {MAX_IDENTIFIER_LEN}",
            identifier.len()
        )));
    }

    let segments: Vec<&str> = identifier.split('.').collect();
    if segments.len() < 3 {
        return Err(Error::invalid_argument(format!(
            "application identifier {identifier:?} has {} segments, at least 3 are required",
            segments.len()
        )));
    }

    for (index, segment) in segments.iter().enumerate() {
        validate_segment(identifier, segment, index == 0)?;
    }

    Ok(())
}

fn validate_segment(identifier: &str, segment: &str, is_top_level: bool) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::invalid_argument(format!(
            "application identifier {identifier:?} contains an empty segment"
        )));
    }

    for (offset, c) in segment.char_indices() {
        match c {
            c if c.is_ascii_alphanumeric() => {}
            '-' | '_' => {
                if is_top_level {
                    return Err(Error::invalid_argument(format!(
                        "application identifier {identifier:?} uses {c:?} in the top-level domain"
                    )));
                }
                if offset == 0 || offset == segment.len() - 1 {
                    return Err(Error::invalid_argument(format!(
                        "application identifier {identifier:?} uses {c:?} adjacent to a period"
                    )));
                }
            }
            _ => {
                return Err(Error::invalid_argument(format!(
                    "application identifier {identifier:?} contains invalid character {c:?}"
                )));
            }
        }
    }

    Ok(())
}
