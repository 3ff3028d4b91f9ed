#![no_main]

use energycode::ean::validate_ean;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let r = validate_ean(s);
        assert_eq!(r.is_valid, r.errors.is_empty());
    }
});
