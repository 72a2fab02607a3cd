//! Fuzz target for box argument validation.
//!
//! Arbitrary bytes are decoded as JSON; objects are run through the box
//! validator, which must never panic.

#![no_main]

use layout_coerce::model::NodeId;
use layout_coerce::validation::validate_box_args;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(serde_json::Value::Object(args)) = serde_json::from_slice(data) else {
        return;
    };

    let _ = validate_box_args(NodeId::new(0), &args);
});
