//! Random UUID generation.
//!
//! Sixteen bytes are drawn from a cryptographically secure source, then the
//! version nibble is forced to `0100` and the two high variant bits to `10`.
//! That leaves 122 random bits, and the variant digit is uniform over
//! `8`, `9`, `a`, `b`.

use std::str::FromStr;

use rand::rngs::OsRng;
use rand::TryCryptoRng;
use serde::Deserialize;

use crate::error::or_abort;
use crate::layout::{is_hyphen_offset, HEX_LOWER, HEX_UPPER, UUID_LEN};
use crate::{UuidError, UuidV4};

/// Environment variable selecting the output case.
pub const HEX_CASE_ENV: &str = "RANDID_HEX_CASE";

/// Letter case used for generated hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

impl HexCase {
    fn alphabet(self) -> &'static [u8; 16] {
        match self {
            HexCase::Lower => HEX_LOWER,
            HexCase::Upper => HEX_UPPER,
        }
    }
}

impl FromStr for HexCase {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(HexCase::Lower),
            "upper" => Ok(HexCase::Upper),
            _ => Err(UuidError::InvalidConfig {
                key: HEX_CASE_ENV,
                value: s.to_string(),
            }),
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Case of the generated hex digits.
    pub case: HexCase,
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, UuidError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UuidError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let case = lookup(HEX_CASE_ENV)
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { case })
    }
}

/// Produces random UUIDs in a fixed case.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a UUID from the OS random source.
    pub fn generate(&self) -> Result<UuidV4, UuidError> {
        self.generate_with(&mut OsRng)
    }

    /// Generates a UUID, panicking if the OS random source fails.
    #[must_use]
    pub fn generate_or_abort(&self) -> UuidV4 {
        or_abort("generate_or_abort", self.generate())
    }

    /// Generates a UUID from `rng`.
    ///
    /// A failing source yields [`UuidError::RandomSource`]; there is no
    /// retry and no fallback source.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<UuidV4, UuidError>
    where
        R: TryCryptoRng,
    {
        let mut bytes = [0u8; 16];
        if let Err(err) = rng.try_fill_bytes(&mut bytes) {
            tracing::error!(error = %err, "secure random source failed");
            return Err(UuidError::random_source(err));
        }

        // version 4
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        // variant 1 (RFC 4122)
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Ok(UuidV4::from_canonical(encode(&bytes, self.config.case)))
    }
}

fn encode(bytes: &[u8; 16], case: HexCase) -> String {
    let hex = case.alphabet();
    let mut s = String::with_capacity(UUID_LEN);
    for &b in bytes {
        if is_hyphen_offset(s.len()) {
            s.push('-');
        }
        s.push(char::from(hex[usize::from(b >> 4)]));
        s.push(char::from(hex[usize::from(b & 0x0f)]));
    }
    s
}
