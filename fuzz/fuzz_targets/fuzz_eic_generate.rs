#![no_main]

use energycode::eic::{generate_eic, validate_eic};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, '|');
        let office = parts.next().unwrap_or_default();
        let entity = parts.next().unwrap_or_default();
        let individual = parts.next();
        // Errors are fine; anything generated must validate.
        if let Ok(g) = generate_eic(office, entity, individual) {
            assert!(validate_eic(&g.code).is_valid, "{}", g.code);
        }
    }
});
