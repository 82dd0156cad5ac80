//! Strongly-typed value objects used by the search domain.
//!
//! These wrappers enforce the input contracts (postal code patterns, the
//! radius fallback) so that values reaching the request builders can be
//! treated as trusted.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search radius applied when the control is unset or holds a non-numeric
/// value.
pub const DEFAULT_RADIUS_MILES: u32 = 10;

/// US ZIP (five digits) or Canadian forward-sortation pattern, with the
/// optional interior space.
static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{5}|[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d)$").expect("postal code pattern")
});

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided postal code matches neither the US nor the Canadian pattern.
    #[error("invalid postal code")]
    InvalidPostalCode,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Validated US or Canadian postal code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Trims and validates a postal code string.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if POSTAL_CODE_RE.is_match(&trimmed) {
            Ok(Self(trimmed))
        } else {
            Err(TypeConstraintError::InvalidPostalCode)
        }
    }

    /// Borrow the postal code as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PostalCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

/// Search radius in miles. Absent or non-numeric control values fall back to
/// [`DEFAULT_RADIUS_MILES`] instead of failing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RadiusMiles(u32);

impl RadiusMiles {
    pub fn new(miles: u32) -> Self {
        Self(miles)
    }

    /// Parses a raw control value, falling back to the default radius when
    /// the value is empty, the `"null"` placeholder, or not a number.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse().map(Self).unwrap_or_default()
    }

    /// Returns the radius as a plain mile count.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for RadiusMiles {
    fn default() -> Self {
        Self(DEFAULT_RADIUS_MILES)
    }
}

impl Display for RadiusMiles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RadiusMiles> for u32 {
    fn from(value: RadiusMiles) -> Self {
        value.0
    }
}
