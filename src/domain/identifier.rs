//! Identifier value object.

use super::errors::ValidationError;
use std::fmt;

/// A non-blank identifier destined for a URL path segment.
///
/// Network ids, dex ids and on-chain addresses all go through this type so
/// that an empty value is rejected before a request is built.
///
/// # Example
///
/// ```
/// use dexpaprika::domain::Identifier;
///
/// let id = Identifier::new("network", "ethereum").unwrap();
/// assert_eq!(id.as_str(), "ethereum");
/// assert!(Identifier::new("network", "  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create a new Identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Blank` naming `param` if nothing is left.
    pub fn new(param: &'static str, value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Blank { param });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, safe to splice into a path.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
