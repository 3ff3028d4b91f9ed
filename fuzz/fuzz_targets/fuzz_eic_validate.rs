#![no_main]

use energycode::Validator;
use energycode::eic::{EicValidator, validate_eic};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let strict = validate_eic(s);
        assert_eq!(strict.is_valid, strict.errors.is_empty());
        let lenient = EicValidator::lenient().validate(s);
        if strict.is_valid {
            assert!(lenient.is_valid);
        }
    }
});
