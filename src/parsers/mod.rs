//! Coercion of caller-supplied layout values.
//!
//! Every function here is pure: it reads its arguments, allocates a fresh
//! result, and reports invalid input as a [`CoerceError`] without logging or
//! recovering. Callers decide what a failure means.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::CoerceError;
use crate::model::{
    Axis, ExportSize, Kind, LayoutExpr, NodeId, SizeSpec, ValueKind, AUTO_TOKEN,
};

/// A non-negative decimal number with an optional trailing percent sign.
///
/// Digits are ASCII only, and nothing may follow the number or the `%`,
/// not even a newline.
static SIZE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)(%)?$").expect("Invalid size regex")
});

/// Converts a size specification into an [`ExportSize`].
///
/// - [`SizeSpec::Auto`] (or the text `"auto"`) becomes [`ExportSize::Auto`].
/// - A number becomes [`ExportSize::Points`]; negative numbers are allowed.
/// - Text must be a plain ASCII decimal such as `"12.5"` (points) or
///   `"12.5%"`, which becomes [`ExportSize::Fraction`] of `0.125`. Signs,
///   whitespace, exponents, non-ASCII digits and values too large for `f64`
///   are rejected.
pub fn parse_size(spec: &SizeSpec) -> Result<ExportSize, CoerceError> {
    match spec {
        SizeSpec::Auto => Ok(ExportSize::Auto),
        SizeSpec::Text(text) if text == AUTO_TOKEN => Ok(ExportSize::Auto),
        SizeSpec::Number(n) => Ok(ExportSize::Points(*n)),
        SizeSpec::Text(text) => {
            parse_size_text(text).ok_or_else(|| CoerceError::invalid_size(spec))
        }
    }
}

/// Like [`parse_size`], starting from a dynamic value.
pub fn parse_size_value(value: &Value) -> Result<ExportSize, CoerceError> {
    parse_size(&SizeSpec::from_value(value)?)
}

fn parse_size_text(text: &str) -> Option<ExportSize> {
    let caps = SIZE_REGEX.captures(text)?;
    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    // Overlong digit strings parse to infinity.
    if !number.is_finite() {
        return None;
    }
    if caps.get(2).is_some() {
        Some(ExportSize::Fraction(number / 100.0))
    } else {
        Some(ExportSize::Points(number))
    }
}

/// Converts an optional offset into a position relative to `parent_id`.
///
/// `null` means "no position" and yields `Ok(None)`. A number `n` yields
/// `x(parent) + n` when `is_x` is set and `y(parent) + n` otherwise. Anything
/// else, numeric strings included, is rejected.
pub fn parse_position(
    parent_id: NodeId,
    value: &Value,
    is_x: bool,
) -> Result<Option<LayoutExpr>, CoerceError> {
    anchored_offset(parent_id, value, Axis::from_is_x(is_x))
}

/// Vertical counterpart of [`parse_position`] without an axis flag.
///
/// Note: this anchors to the parent's **X** coordinate, not Y. Use
/// [`parse_position`] with `is_x = false` for a Y anchor.
// TODO: switch to Axis::Y once the front end confirms which axis it expects.
pub fn parse_position_y(
    parent_id: NodeId,
    value: &Value,
) -> Result<Option<LayoutExpr>, CoerceError> {
    anchored_offset(parent_id, value, Axis::X)
}

fn anchored_offset(
    parent_id: NodeId,
    value: &Value,
    axis: Axis,
) -> Result<Option<LayoutExpr>, CoerceError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let offset = n
                .as_f64()
                .ok_or_else(|| CoerceError::invalid_position(value))?;
            Ok(Some(
                LayoutExpr::axis(parent_id, axis) + LayoutExpr::const_value(offset),
            ))
        }
        _ => Err(CoerceError::invalid_position(value)),
    }
}

/// Narrows `value` to `T`, failing with [`CoerceError::TypeMismatch`] when
/// its kind is not `T::KIND`, and with [`CoerceError::OutOfRange`] when the
/// kind matches but `T` cannot hold the value (e.g. `u64::MAX` as `i64`).
pub fn check_type<T: ValueKind>(value: &Value) -> Result<T, CoerceError> {
    T::from_value(value).ok_or_else(|| {
        let actual = Kind::of(value);
        if actual == T::KIND {
            CoerceError::OutOfRange {
                kind: actual,
                value: value.to_string(),
            }
        } else {
            CoerceError::TypeMismatch {
                expected: T::KIND,
                actual,
            }
        }
    })
}

/// [`check_type`] for booleans. `1` and `"true"` are not booleans.
pub fn check_type_bool(value: &Value) -> Result<bool, CoerceError> {
    check_type::<bool>(value)
}
