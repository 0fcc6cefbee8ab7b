//! Canonical text layout shared by the generator and the validator.
//!
//! ```text
//! AAAAAAAA-BBBB-4CCC-VDDD-EEEEEEEEEEEE
//! ```
//!
//! Hyphens sit at fixed offsets, the version digit is always `4`, and the
//! variant digit `V` has its two high bits set to `10` (one of `8`, `9`, `a`,
//! `b`).

/// Length of the canonical text form in bytes.
pub const UUID_LEN: usize = 36;

/// Byte offsets of the four group separators.
pub const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Byte offset of the version digit.
pub const VERSION_OFFSET: usize = 14;

/// Byte offset of the variant digit.
pub const VARIANT_OFFSET: usize = 19;

/// The version digit for random UUIDs.
pub const VERSION_DIGIT: u8 = b'4';

/// The zero UUID: every random bit cleared, version and variant bits kept.
pub const ZERO_UUID: &str = "00000000-0000-4000-8000-000000000000";

pub(crate) const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
pub(crate) const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true if `b` is an allowed variant 1 digit, in either case.
pub(crate) const fn is_variant_digit(b: u8) -> bool {
    matches!(b, b'8' | b'9' | b'a' | b'b' | b'A' | b'B')
}

pub(crate) const fn is_hyphen_offset(i: usize) -> bool {
    matches!(i, 8 | 13 | 18 | 23)
}
