//! Layout validation.

use crate::layout::{
    is_hyphen_offset, is_variant_digit, UUID_LEN, VARIANT_OFFSET, VERSION_DIGIT, VERSION_OFFSET,
};
use crate::UuidError;

/// Returns true if `s` is a canonical version 4, variant 1 UUID.
///
/// Hex digits are accepted in either case. This is exactly as strict as
/// [`crate::parse`]; it only skips building the value and the error.
pub fn is_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == UUID_LEN
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            _ if is_hyphen_offset(i) => b == b'-',
            VERSION_OFFSET => b == VERSION_DIGIT,
            VARIANT_OFFSET => is_variant_digit(b),
            _ => b.is_ascii_hexdigit(),
        })
}

/// Checks `s` against the layout, reporting the rejected input on failure.
pub(crate) fn check(s: &str) -> Result<(), UuidError> {
    if is_valid(s) {
        Ok(())
    } else {
        tracing::debug!(input = s, len = s.len(), "rejected UUID input");
        Err(UuidError::invalid_format(s))
    }
}
