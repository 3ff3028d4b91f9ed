use energycode::Validator;
use energycode::eic::*;

fn main() {
    // ── 1. Validate known codes ───────────────────────────────────────
    println!("=== EIC Validation ===\n");

    let codes = [
        "27XGOEPS0000001I",
        "10YCZ0CEPS00000P",
        "27XGOEPS0000001J", // wrong check character
        "99QGOEPS0000001D", // unknown office and entity type
        "27XGOEPS000001Z",  // 15 characters
    ];

    for code in &codes {
        let result = validate_eic(code);
        if let Some(summary) = result.summary() {
            println!("  {code} => INVALID: {summary}");
        } else if let Some(c) = &result.components {
            println!(
                "  {code} => valid (office={}, type={}, id={})",
                c.office_id, c.entity_type, c.individual_id
            );
        }
    }

    // ── 2. Lenient input ──────────────────────────────────────────────
    println!("\n=== Lenient Validation ===\n");
    let lenient = EicValidator::lenient();
    let pasted = "27x-goeps-0000001-i";
    let result = lenient.validate(pasted);
    println!("  {pasted} => {} (as {})", result.is_valid, result.code);

    // ── 3. Check characters ───────────────────────────────────────────
    println!("\n=== Check Characters ===\n");
    for base in ["27XGOEPS0000001", "10YCZ0CEPS00000", "10YELC8PM3804GR"] {
        match compute_eic_check_digit(base) {
            Ok(check) => println!("  {base} + {check}"),
            Err(e) => println!("  {base}: {e}"),
        }
    }

    // ── 4. Generation ─────────────────────────────────────────────────
    println!("\n=== Generation ===\n");
    match generate_eic("10", "Y", Some("CZ0CEPS00000")) {
        Ok(g) => println!("  explicit: {}", g.code),
        Err(e) => println!("  explicit failed: {e}"),
    }
    match generate_eic("27", "X", None) {
        Ok(g) => println!("  random:   {}", g.code),
        Err(e) => println!("  random failed: {e}"),
    }
    match generate_eic_bulk("X1", "Z", 5) {
        Ok(batch) => {
            println!("  batch of {}:", batch.count);
            for code in &batch.codes {
                println!("    {code}");
            }
        }
        Err(e) => println!("  batch failed: {e}"),
    }

    // ── 5. Reference tables ───────────────────────────────────────────
    println!("\n=== Entity Types ===\n");
    for entity in EntityType::all().filter(|e| !e.code().is_ascii_digit()) {
        println!("  {entity}  {}", entity.description());
    }
    println!("\n  {} office identifiers recognised", OfficeId::all().count());
}
