#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs. Anything accepted must print back.
        if let Ok(number) = docnum::DocumentNumber::parse(s) {
            let text = number.to_string();
            assert_eq!(docnum::DocumentNumber::parse(&text).ok(), Some(number));
        }
    }
});
