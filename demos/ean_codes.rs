use energycode::ean::*;

fn main() {
    // ── 1. Validate codes of each format ──────────────────────────────
    println!("=== EAN Validation ===\n");

    let codes = [
        "96385074",       // EAN-8
        "4006381333931",  // EAN-13
        "00012345678905", // EAN-14
        "4006381333937",  // wrong check digit
        "400638133393",   // 12 digits
        "400638133393A",  // letter
    ];

    for code in &codes {
        let result = validate_ean(code);
        let format = result
            .components
            .as_ref()
            .map_or("-".to_string(), |c| c.format.to_string());
        match result.summary() {
            None => println!("  {code} => valid ({format})"),
            Some(summary) => println!("  {code} => INVALID ({format}): {summary}"),
        }
    }

    // ── 2. Generation from data digits ────────────────────────────────
    println!("\n=== Generation ===\n");
    for (data, format) in [
        ("400638133393", EanFormat::Ean13),
        ("1234567", EanFormat::Ean13),
        ("9638507", EanFormat::Ean8),
        ("1234567890", EanFormat::Ean14),
    ] {
        match generate_ean(Some(data), format) {
            Ok(g) => println!("  {data:>13} as {format:<6} => {}", g.code),
            Err(e) => println!("  {data:>13} as {format:<6} => {e}"),
        }
    }

    // ── 3. Random batch ───────────────────────────────────────────────
    println!("\n=== Random EAN-13 Batch ===\n");
    match generate_ean_bulk(EanFormat::Ean13, 5) {
        Ok(batch) => batch.codes.iter().for_each(|c| println!("  {c}")),
        Err(e) => println!("  batch failed: {e}"),
    }
}
