#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(token) = std::str::from_utf8(data) {
        // Resolution must never panic and must agree with validation
        let resolved = calc_console::resolve(token);
        assert_eq!(resolved.is_some(), calc_console::is_valid_operator(token));
    }
});
