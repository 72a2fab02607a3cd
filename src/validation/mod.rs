//! Validation of box arguments.
//!
//! A box on a slide is described by keyword arguments (`x`, `y`, `width`,
//! `height`, ...). This module runs each argument through its coercion and
//! collects every failure into a [`ValidationReport`], instead of stopping at
//! the first bad argument like the single-value parsers do.

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoerceError;
use crate::model::{ExportSize, LayoutExpr, NodeId};
use crate::parsers::{check_type, check_type_bool, parse_position, parse_size_value};

/// Argument names understood by [`validate_box_args`], in the order they are
/// checked.
pub const BOX_ARGUMENTS: [&str; 8] = [
    "x", "y", "width", "height", "row", "reverse", "z_level", "name",
];

/// Coerced geometry and flags of one box.
///
/// Fields whose argument was missing or invalid hold their default.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoxGeometry {
    pub x: Option<LayoutExpr>,
    pub y: Option<LayoutExpr>,
    pub width: ExportSize,
    pub height: ExportSize,
    pub row: bool,
    pub reverse: bool,
    pub z_level: Option<i64>,
    pub name: String,
}

/// Coerces box arguments relative to `parent`, reporting every problem.
///
/// Invalid arguments are reported as errors and leave the field at its
/// default. Unrecognised argument names are reported as warnings.
pub fn validate_box_args(
    parent: NodeId,
    args: &Map<String, Value>,
) -> (BoxGeometry, ValidationReport) {
    let (geometry, failures) = coerce_each(parent, args);
    let mut report = ValidationReport::new();

    for (name, err) in failures {
        report.add(ValidationIssue::error(
            issue_code(&err),
            err.to_string(),
            IssueContext::argument(name),
        ));
    }

    for name in args.keys() {
        if !BOX_ARGUMENTS.contains(&name.as_str()) {
            report.add(ValidationIssue::warning(
                IssueCode::UnknownArgument,
                format!("Unknown argument '{}'", name),
                IssueContext::argument(name.as_str()),
            ));
        }
    }

    tracing::debug!(
        parent = %parent,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated box arguments"
    );

    (geometry, report)
}

/// Coerces box arguments relative to `parent`, failing on the first invalid
/// argument. Unknown argument names are ignored.
pub fn coerce_box_args(
    parent: NodeId,
    args: &Map<String, Value>,
) -> Result<BoxGeometry, CoerceError> {
    let (geometry, failures) = coerce_each(parent, args);
    match failures.into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(geometry),
    }
}

fn coerce_each(
    parent: NodeId,
    args: &Map<String, Value>,
) -> (BoxGeometry, Vec<(&'static str, CoerceError)>) {
    let mut geometry = BoxGeometry::default();
    let mut failures = Vec::new();

    for name in BOX_ARGUMENTS {
        let Some(value) = args.get(name) else {
            continue;
        };
        tracing::trace!(argument = name, %value, "coercing box argument");

        let result = match name {
            "x" => parse_position(parent, value, true).map(|x| geometry.x = x),
            "y" => parse_position(parent, value, false).map(|y| geometry.y = y),
            "width" => parse_size_value(value).map(|w| geometry.width = w),
            "height" => parse_size_value(value).map(|h| geometry.height = h),
            "row" => check_type_bool(value).map(|r| geometry.row = r),
            "reverse" => check_type_bool(value).map(|r| geometry.reverse = r),
            "z_level" => check_type::<i64>(value).map(|z| geometry.z_level = Some(z)),
            "name" => check_type::<String>(value).map(|n| geometry.name = n),
            _ => Ok(()),
        };

        if let Err(err) = result {
            failures.push((name, err));
        }
    }

    (geometry, failures)
}

fn issue_code(err: &CoerceError) -> IssueCode {
    match err {
        CoerceError::InvalidSize(_) => IssueCode::InvalidSize,
        CoerceError::InvalidPosition(_) => IssueCode::InvalidPosition,
        CoerceError::OutOfRange { .. } => IssueCode::OutOfRange,
        _ => IssueCode::TypeMismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn empty_args_use_defaults() {
        let (geometry, report) = validate_box_args(NodeId(1), &Map::new());
        assert!(report.is_clean());
        assert_eq!(geometry, BoxGeometry::default());
        assert_eq!(geometry.width, ExportSize::Auto);
    }

    #[test]
    fn valid_args_are_coerced() {
        let parent = NodeId(2);
        let (geometry, report) = validate_box_args(
            parent,
            &args(json!({
                "x": 10,
                "y": 20.5,
                "width": "50%",
                "height": 100,
                "row": true,
                "z_level": -1,
                "name": "title"
            })),
        );
        assert!(report.is_clean(), "{report}");
        assert_eq!(
            geometry.x,
            Some(LayoutExpr::x(parent) + LayoutExpr::const_value(10.0))
        );
        assert_eq!(
            geometry.y,
            Some(LayoutExpr::y(parent) + LayoutExpr::const_value(20.5))
        );
        assert_eq!(geometry.width, ExportSize::Fraction(0.5));
        assert_eq!(geometry.height, ExportSize::Points(100.0));
        assert!(geometry.row);
        assert!(!geometry.reverse);
        assert_eq!(geometry.z_level, Some(-1));
        assert_eq!(geometry.name, "title");
    }

    #[test]
    fn every_invalid_argument_is_reported() {
        let (geometry, report) = validate_box_args(
            NodeId(1),
            &args(json!({
                "x": "3",
                "width": "wide",
                "row": 1,
                "z_level": 1.5
            })),
        );
        assert_eq!(report.error_count(), 4);
        assert_eq!(report.warning_count(), 0);

        let codes: Vec<IssueCode> = report.issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                IssueCode::InvalidPosition,
                IssueCode::InvalidSize,
                IssueCode::TypeMismatch,
                IssueCode::TypeMismatch,
            ]
        );
        assert_eq!(report.issues[0].context, IssueContext::argument("x"));

        // Failed fields keep their defaults.
        assert_eq!(geometry.x, None);
        assert_eq!(geometry.width, ExportSize::Auto);
        assert!(!geometry.row);
        assert_eq!(geometry.z_level, None);
    }

    #[test]
    fn oversized_z_level_is_out_of_range() {
        let (geometry, report) =
            validate_box_args(NodeId(1), &args(json!({"z_level": u64::MAX})));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.issues[0].code, IssueCode::OutOfRange);
        assert_eq!(report.issues[0].context, IssueContext::argument("z_level"));
        assert_eq!(geometry.z_level, None);
    }

    #[test]
    fn unknown_arguments_are_warnings() {
        let (_, report) = validate_box_args(NodeId(1), &args(json!({"widht": 10, "x": 1})));
        assert!(report.is_ok());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.issues[0].code, IssueCode::UnknownArgument);
        assert!(report.to_string().contains("argument 'widht'"));
    }

    #[test]
    fn null_position_means_unset() {
        let (geometry, report) = validate_box_args(NodeId(1), &args(json!({"x": null})));
        assert!(report.is_clean());
        assert_eq!(geometry.x, None);
    }

    #[test]
    fn coerce_box_args_fails_on_first_error() {
        let err = coerce_box_args(NodeId(1), &args(json!({"height": "x", "row": "yes"})))
            .unwrap_err();
        assert!(matches!(err, CoerceError::InvalidSize(_)));

        let geometry = coerce_box_args(NodeId(1), &args(json!({"height": "25%", "extra": 1})))
            .unwrap();
        assert_eq!(geometry.height, ExportSize::Fraction(0.25));
    }
}
