use layout_coerce::model::{ExportSize, LayoutExpr, NodeId, SizeSpec};
use layout_coerce::parsers::{
    check_type_bool, parse_position, parse_position_y, parse_size, parse_size_value,
};
use layout_coerce::CoerceError;
use proptest::prelude::*;
use serde_json::Value;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn numbers_are_points(n in -1e9f64..1e9) {
        prop_assert_eq!(parse_size(&SizeSpec::from(n)).unwrap(), ExportSize::Points(n));
    }

    #[test]
    fn integers_are_points(n in any::<i32>()) {
        let size = parse_size_value(&Value::from(n)).unwrap();
        prop_assert_eq!(size, ExportSize::Points(n as f64));
    }

    #[test]
    fn integer_percentages_are_fractions(n in 0u32..100_000) {
        let size = parse_size(&SizeSpec::from(format!("{n}%"))).unwrap();
        prop_assert_eq!(size, ExportSize::Fraction(n as f64 / 100.0));
    }

    #[test]
    fn size_text_follows_the_pattern(
        (text, number, percent) in proptest_helpers::arb_size_text()
    ) {
        let size = parse_size(&SizeSpec::from(text.as_str())).unwrap();
        match size {
            ExportSize::Fraction(v) => {
                prop_assert!(percent);
                prop_assert!(proptest_helpers::approx_eq(
                    v,
                    number / 100.0,
                    proptest_helpers::EPS_FRACTION
                ));
            }
            ExportSize::Points(v) => {
                prop_assert!(!percent);
                prop_assert_eq!(v, number);
            }
            ExportSize::Auto => prop_assert!(false, "{} parsed as auto", text),
        }
    }

    #[test]
    fn signed_size_text_is_rejected(n in 0u32..10_000, sign in "[-+]") {
        let err = parse_size(&SizeSpec::from(format!("{sign}{n}"))).unwrap_err();
        prop_assert!(matches!(err, CoerceError::InvalidSize(_)));
    }

    #[test]
    fn numeric_positions_anchor_to_parent(
        id in any::<u32>(),
        value in proptest_helpers::arb_number(),
        is_x in any::<bool>(),
    ) {
        let parent = NodeId::new(id);
        let offset = value.as_f64().unwrap();
        let anchor = if is_x { LayoutExpr::x(parent) } else { LayoutExpr::y(parent) };

        let expr = parse_position(parent, &value, is_x).unwrap();
        prop_assert_eq!(expr, Some(anchor + LayoutExpr::const_value(offset)));

        let legacy = parse_position_y(parent, &value).unwrap();
        prop_assert_eq!(legacy, Some(LayoutExpr::x(parent) + LayoutExpr::const_value(offset)));
    }

    #[test]
    fn non_numeric_positions_are_rejected(
        value in proptest_helpers::arb_non_numeric(),
        is_x in any::<bool>(),
    ) {
        let err = parse_position(NodeId::new(1), &value, is_x).unwrap_err();
        prop_assert!(matches!(err, CoerceError::InvalidPosition(_)));
    }

    #[test]
    fn numbers_are_never_bools(value in proptest_helpers::arb_number()) {
        let err = check_type_bool(&value).unwrap_err();
        prop_assert!(matches!(err, CoerceError::TypeMismatch { .. }), "{}", err);
    }
}
