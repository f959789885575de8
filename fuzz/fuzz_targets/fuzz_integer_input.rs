#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Integer parsing - this should never panic
        let _ = calc_console::parse_integer(text);
    }
});
