#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use serde_json::{Map, Value};

pub const EPS_FRACTION: f64 = 1e-12;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A finite number as a JSON value, either integral or real.
pub fn arb_number() -> BoxedStrategy<Value> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        (-1e6f64..1e6).prop_map(Value::from),
    ]
    .boxed()
}

/// Any JSON value that is neither null nor a number.
pub fn arb_non_numeric() -> BoxedStrategy<Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        "[a-z0-9%.]{0,8}".prop_map(Value::String),
        Just(Value::Array(vec![Value::from(1)])),
        Just(Value::Object(Map::new())),
    ]
    .boxed()
}

/// Text that matches the size pattern: digits, optional fraction, optional `%`.
/// Returns the text and the number it spells.
pub fn arb_size_text() -> BoxedStrategy<(String, f64, bool)> {
    ("[0-9]{1,6}", proptest::option::of("[0-9]{1,4}"), any::<bool>())
        .prop_map(|(int, frac, percent)| {
            let mut text = int;
            if let Some(frac) = frac {
                text.push('.');
                text.push_str(&frac);
            }
            let number: f64 = text.parse().expect("generated digits parse");
            if percent {
                text.push('%');
            }
            (text, number, percent)
        })
        .boxed()
}

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * a.abs().max(b.abs()).max(1.0)
}
