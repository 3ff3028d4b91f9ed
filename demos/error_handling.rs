use energycode::ean::{EanFormat, EanGenerator, generate_ean};
use energycode::eic::{EicGenerator, generate_eic, validate_eic};
use energycode::{GenerateError, IssueKind, ParameterError};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=energycode=debug shows the library's own diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── 1. Validation never fails: issues come back as data ───────────
    println!("=== Validation Issues ===");
    let result = validate_eic("99QGOEP$0000001I");
    for issue in &result.errors {
        let tag = match issue.kind {
            IssueKind::Structural => "structure",
            IssueKind::UnknownFieldValue => "unknown",
            IssueKind::CheckDigitMismatch => "check",
        };
        println!("  [{tag}] {issue}");
    }
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{json}");
    }

    // ── 2. Parameter errors from generation ───────────────────────────
    println!("\n=== Parameter Errors ===");
    let attempts: [Result<String, GenerateError>; 4] = [
        generate_eic("00", "X", None).map(|g| g.code),
        generate_eic("27", "Q", None).map(|g| g.code),
        generate_eic("27", "X", Some("GOEPS")).map(|g| g.code),
        generate_ean(Some("123456789012345"), EanFormat::Ean13).map(|g| g.code),
    ];
    for attempt in attempts {
        match attempt {
            Ok(code) => println!("  unexpected success: {code}"),
            Err(GenerateError::Parameter(ParameterError::UnknownOfficeId(id))) => {
                println!("  office '{id}' is not recognised");
            }
            Err(e) => println!("  {e}"),
        }
    }

    // ── 3. Bulk limits ────────────────────────────────────────────────
    println!("\n=== Bulk Limits ===");
    match EicGenerator::new().generate_bulk("10", "Y", 500) {
        Ok(batch) => println!("  got {} codes", batch.count),
        Err(e) => println!("  default limit: {e}"),
    }
    match EicGenerator::new().with_max_bulk(500).generate_bulk("10", "Y", 500) {
        Ok(batch) => println!("  raised limit: got {} codes", batch.count),
        Err(e) => println!("  raised limit: {e}"),
    }

    // ── 4. Attempt budget ─────────────────────────────────────────────
    println!("\n=== Attempt Budget ===");
    // one draw per code: any collision ends the batch
    match EanGenerator::new()
        .with_max_bulk(1000)
        .with_max_attempts(1)
        .generate_bulk(EanFormat::Ean8, 1000)
    {
        Ok(batch) => println!("  EAN-8 batch of {} without a collision", batch.count),
        Err(GenerateError::Exhausted {
            requested,
            generated,
            attempts,
        }) => println!("  exhausted: {generated}/{requested} after {attempts} attempts"),
        Err(e) => println!("  {e}"),
    }
}
