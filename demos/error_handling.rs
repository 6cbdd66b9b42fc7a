use chrono::NaiveDate;
use fatura::core::*;

fn main() {
    // Thursday, 21/09/2023
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2023, 9, 21).unwrap());
    let factory = InvoiceFactory::new(clock);

    // ── 1. Fail-fast construction: only the first broken rule ────────
    println!("=== create() ===");
    let attempts = [
        ("7111291700012", "28/09/2023", "moveis planejados", "1500"),
        ("71112917000126", "24/09/2023", "moveis planejados", "1500"),
        ("71112917000126", "31/02/2023", "moveis planejados", "1500"),
        ("71112917000126", "28/09/2023", "   ", "1500"),
        ("71112917000126", "28/09/2023", "moveis planejados", "-5"),
        ("71112917000126", "28/09/2023", "moveis planejados", "1500"),
    ];
    for (tax_id, due, description, amount) in attempts {
        match factory.create(1, tax_id, due, description, amount) {
            Ok(inv) => println!("  ok: {} due {}", inv.formatted_amount(), inv.due_date()),
            Err(FaturaError::InvalidDueDate) => {
                println!("  due date {due:?} rejected (invalid, past, or Sunday)")
            }
            Err(e) => println!("  {} rejected: {}", e.field(), e),
        }
    }

    // ── 2. Collect-all report ─────────────────────────────────────────
    println!("\n=== validate() ===");
    let report = InvoiceBuilder::new(2)
        .tax_id("00000000000000")
        .due_date("20/09/2023")
        .amount("abc")
        .validate(factory.clock());
    println!("  Found {} validation errors:", report.len());
    for e in &report {
        println!("  - {}", e);
    }

    // ── 3. Date comparison on malformed input ─────────────────────────
    println!("\n=== is_on_or_after() ===");
    match is_on_or_after("21/09/2023", "99/99/2023") {
        Ok(ordered) => println!("  ordered: {ordered}"),
        Err(e) => println!("  parse error: {}", e),
    }
}
