//! Fuzz target for size specification parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 strings to the size parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use layout_coerce::model::SizeSpec;
use layout_coerce::parsers::parse_size;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_size(&SizeSpec::from(text));
});
