//! # randid-uuid
//!
//! Generation, parsing, and validation of random UUIDs (RFC 4122 version 4,
//! variant 1) in their canonical text form.
//!
//! ## Format
//!
//! `xxxxxxxx-xxxx-4xxx-Yxxx-xxxxxxxxxxxx`
//!
//! - every `x` is a random hex digit
//! - the `4` marks version 4 (random)
//! - `Y` is one of `8`, `9`, `a`, `b`, marking variant 1
//!
//! Generated UUIDs carry 122 random bits drawn from the OS secure random
//! source. Parsing accepts hex digits in either case and keeps the input
//! text exactly as written.
//!
//! ## Operations
//!
//! | fallible    | panicking           | other      |
//! |-------------|---------------------|------------|
//! | [`generate`] | [`generate_or_abort`] | [`zero`]   |
//! | [`parse`]    | [`parse_or_abort`]    | [`is_valid`] |
//!
//! ```
//! let id = randid_uuid::generate()?;
//! assert!(randid_uuid::is_valid(id.as_str()));
//! assert_eq!(randid_uuid::parse(id.as_str())?, id);
//! # Ok::<(), randid_uuid::UuidError>(())
//! ```

mod error;
mod generate;
mod layout;
mod types;
mod validate;

pub use error::UuidError;
pub use generate::{Generator, GeneratorConfig, HexCase, HEX_CASE_ENV};
pub use layout::{HYPHEN_OFFSETS, UUID_LEN, VARIANT_OFFSET, VERSION_OFFSET, ZERO_UUID};
pub use types::UuidV4;
pub use validate::is_valid;

/// Generates a random UUID in lower case.
///
/// Fails with [`UuidError::RandomSource`] if the OS random source cannot
/// supply bytes.
pub fn generate() -> Result<UuidV4, UuidError> {
    Generator::default().generate()
}

/// Generates a random UUID, panicking if the OS random source fails.
#[must_use]
pub fn generate_or_abort() -> UuidV4 {
    Generator::default().generate_or_abort()
}

/// Parses a UUID. See [`UuidV4::parse`].
pub fn parse(s: &str) -> Result<UuidV4, UuidError> {
    UuidV4::parse(s)
}

/// Parses a UUID, panicking on invalid input.
#[must_use]
pub fn parse_or_abort(s: &str) -> UuidV4 {
    UuidV4::parse_or_abort(s)
}

/// Returns the zero UUID, `00000000-0000-4000-8000-000000000000`.
#[must_use]
pub fn zero() -> &'static UuidV4 {
    UuidV4::zero()
}
