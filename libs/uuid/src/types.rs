//! The validated UUID value type.

use std::sync::LazyLock;

use crate::error::or_abort;
use crate::layout::{VARIANT_OFFSET, ZERO_UUID};
use crate::validate::check;
use crate::UuidError;

static ZERO: LazyLock<UuidV4> = LazyLock::new(|| UuidV4::parse_or_abort(ZERO_UUID));

/// A random (version 4, variant 1) UUID in its canonical text form.
///
/// Values can only be built through validating constructors or the
/// generator, so every live `UuidV4` matches the 8-4-4-4-12 layout. Parsed
/// input is kept byte for byte; case is never normalized, and equality
/// compares the text as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UuidV4(String);

impl UuidV4 {
    /// Parses a UUID from a string.
    ///
    /// The string must be exactly 36 bytes with hyphens at offsets 8, 13, 18
    /// and 23, a literal `4` at offset 14, one of `8`, `9`, `a`, `b` (any
    /// case) at offset 19, and hex digits everywhere else.
    pub fn parse(s: &str) -> Result<Self, UuidError> {
        check(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Parses a UUID, panicking if `s` is not valid.
    ///
    /// For call sites where invalid input is a programming error.
    #[must_use]
    pub fn parse_or_abort(s: &str) -> Self {
        or_abort("parse_or_abort", Self::parse(s))
    }

    /// Generates a fresh UUID from the OS random source.
    pub fn generate() -> Result<Self, UuidError> {
        crate::generate()
    }

    /// Generates a fresh UUID, panicking if the random source fails.
    #[must_use]
    pub fn generate_or_abort() -> Self {
        crate::generate_or_abort()
    }

    /// Returns the shared zero UUID, `00000000-0000-4000-8000-000000000000`.
    #[must_use]
    pub fn zero() -> &'static Self {
        &ZERO
    }

    /// Wraps text the caller has already produced in canonical form.
    pub(crate) fn from_canonical(s: String) -> Self {
        debug_assert!(crate::is_valid(&s), "non-canonical UUID: {s}");
        Self(s)
    }

    /// Returns the UUID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the UUID and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if this is the zero UUID.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_UUID
    }

    /// The version number. Always 4.
    #[must_use]
    pub const fn version(&self) -> u8 {
        4
    }

    /// The variant digit as written (`8`, `9`, `a`, `b`, `A` or `B`).
    #[must_use]
    pub fn variant_digit(&self) -> char {
        char::from(self.0.as_bytes()[VARIANT_OFFSET])
    }

    /// Compares two UUIDs ignoring the case of their hex digits.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Default for UuidV4 {
    fn default() -> Self {
        Self::zero().clone()
    }
}

impl std::fmt::Display for UuidV4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UuidV4 {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UuidV4 {
    type Error = UuidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UuidV4 {
    type Error = UuidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        check(&s)?;
        Ok(Self(s))
    }
}

impl From<UuidV4> for String {
    fn from(id: UuidV4) -> Self {
        id.0
    }
}

impl AsRef<str> for UuidV4 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for UuidV4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for UuidV4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
