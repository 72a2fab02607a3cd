//! Size specifications and the sizes exported to the layout engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::CoerceError;

/// The token that asks the layout engine to pick a size itself.
pub const AUTO_TOKEN: &str = "auto";

/// A caller-supplied size, before validation.
///
/// `Text` holds anything written as a string: `"100"`, `"50%"`, or the
/// [`AUTO_TOKEN`], which is treated exactly like [`SizeSpec::Auto`].
#[derive(Clone, Debug, PartialEq)]
pub enum SizeSpec {
    Auto,
    Number(f64),
    Text(String),
}

impl SizeSpec {
    /// Narrows a dynamic value to a size specification.
    ///
    /// Strings and numbers are accepted as-is (string content is checked later
    /// by [`parse_size`](crate::parsers::parse_size)). Null, booleans, arrays
    /// and objects are rejected with [`CoerceError::InvalidSize`].
    pub fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::String(s) if s == AUTO_TOKEN => Ok(SizeSpec::Auto),
            Value::String(s) => Ok(SizeSpec::Text(s.clone())),
            Value::Number(n) => n
                .as_f64()
                .map(SizeSpec::Number)
                .ok_or_else(|| CoerceError::invalid_size(value)),
            _ => Err(CoerceError::invalid_size(value)),
        }
    }
}

impl From<f64> for SizeSpec {
    fn from(value: f64) -> Self {
        SizeSpec::Number(value)
    }
}

impl From<i64> for SizeSpec {
    fn from(value: i64) -> Self {
        SizeSpec::Number(value as f64)
    }
}

impl From<&str> for SizeSpec {
    fn from(value: &str) -> Self {
        if value == AUTO_TOKEN {
            SizeSpec::Auto
        } else {
            SizeSpec::Text(value.to_string())
        }
    }
}

impl From<String> for SizeSpec {
    fn from(value: String) -> Self {
        if value == AUTO_TOKEN {
            SizeSpec::Auto
        } else {
            SizeSpec::Text(value)
        }
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Auto => write!(f, "{:?}", AUTO_TOKEN),
            SizeSpec::Number(n) => write!(f, "{}", n),
            SizeSpec::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// A validated size, ready for the layout engine.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum ExportSize {
    /// Let the layout engine decide.
    #[default]
    Auto,
    /// Absolute measurement in points.
    Points(f64),
    /// Share of a reference dimension; 0.5 means 50%. Not clamped.
    Fraction(f64),
}

impl fmt::Display for ExportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportSize::Auto => write!(f, "auto"),
            ExportSize::Points(v) => write!(f, "points {}", v),
            ExportSize::Fraction(v) => write!(f, "fraction {}", v),
        }
    }
}

impl std::str::FromStr for ExportSize {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parsers::parse_size(&SizeSpec::from(s))
    }
}
