#![no_main]

use docnum::{DocumentType, Year, allocate_next_in_year};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let listing: Vec<&str> = text.split('\n').collect();
    let Ok(year) = Year::new(2025) else {
        return;
    };
    for t in DocumentType::ALL {
        // Must never panic, and never propose sequence 0.
        let next = allocate_next_in_year(t, year, &listing);
        assert!(!next.sequence().is_zero());
    }
});
