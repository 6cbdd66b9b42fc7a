#![no_main]

use chrono::NaiveDate;
use fatura::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Fields separated by '|': tax id, due date, description, amount
    let mut fields = s.splitn(4, '|');
    let tax_id = fields.next().unwrap_or("");
    let due = fields.next().unwrap_or("");
    let description = fields.next().unwrap_or("");
    let amount = fields.next().unwrap_or("");

    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2023, 9, 21).unwrap());
    let builder = InvoiceBuilder::new(1)
        .tax_id(tax_id)
        .due_date(due)
        .description(description)
        .amount(amount);

    // Must not panic, and the report must agree with the fail-fast path.
    let report = builder.validate(&clock);
    match builder.build(&clock) {
        Ok(inv) => {
            assert!(report.is_empty());
            assert!(inv.days_until_due() >= 0);
        }
        Err(err) => assert_eq!(report[0], ValidationError::from(err)),
    }
});
