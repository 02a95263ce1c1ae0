//! Domain validation errors.

use std::fmt;

/// Errors raised while validating request parameters, before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identifier or query string is empty.
    Blank { param: &'static str },

    /// A numeric parameter falls outside its accepted range.
    OutOfRange {
        param: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A parameter value is not one of the accepted choices.
    InvalidChoice {
        param: &'static str,
        value: String,
        valid: &'static [&'static str],
    },

    /// Two related parameters contradict each other.
    InvalidRange { param: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Blank { param }
            | Self::OutOfRange { param, .. }
            | Self::InvalidChoice { param, .. }
            | Self::InvalidRange { param, .. } => param,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank { param } => write!(f, "{} is required and cannot be empty", param),
            Self::OutOfRange {
                param,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be between {} and {}, got {}",
                param, min, max, value
            ),
            Self::InvalidChoice {
                param,
                value,
                valid,
            } => write!(
                f,
                "Invalid {} '{}'; expected one of: {}",
                param,
                value,
                valid.join(", ")
            ),
            Self::InvalidRange { param, reason } => write!(f, "Invalid {}: {}", param, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_parameter_and_range() {
        let err = ValidationError::OutOfRange {
            param: "limit",
            value: 500,
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "limit must be between 1 and 100, got 500");
        assert_eq!(err.param(), "limit");
    }

    #[test]
    fn test_display_lists_choices() {
        let err = ValidationError::InvalidChoice {
            param: "sort",
            value: "bogus".to_string(),
            valid: &["asc", "desc"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid sort 'bogus'; expected one of: asc, desc"
        );
    }
}
