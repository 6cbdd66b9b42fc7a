use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::format_amount;
use super::dates::CalendarDate;

/// A validated invoice (fatura).
///
/// Every field is checked before the value exists and none can change
/// afterwards, so holding an `Invoice` means holding one that satisfies all
/// rules:
///
/// - `tax_id` is a CNPJ with correct check digits,
/// - `issue_date` is the clock's date at the moment of construction,
/// - `due_date` is on or after `issue_date` and not a Sunday,
/// - `description` is not blank,
/// - `amount` is strictly positive.
///
/// Instances are produced by [`InvoiceBuilder`](super::InvoiceBuilder) and
/// [`InvoiceFactory`](super::InvoiceFactory) only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    number: i32,
    tax_id: String,
    issue_date: CalendarDate,
    due_date: CalendarDate,
    description: String,
    amount: Decimal,
}

impl Invoice {
    pub(crate) fn new_unchecked(
        number: i32,
        tax_id: String,
        issue_date: CalendarDate,
        due_date: CalendarDate,
        description: String,
        amount: Decimal,
    ) -> Self {
        Self {
            number,
            tax_id,
            issue_date,
            due_date,
            description,
            amount,
        }
    }

    /// Caller-supplied invoice number. Not checked for uniqueness.
    pub fn number(&self) -> i32 {
        self.number
    }

    /// CNPJ of the contracted party, unformatted (14 digits).
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Date the invoice was created, taken from the clock.
    pub fn issue_date(&self) -> CalendarDate {
        self.issue_date
    }

    /// Payment deadline; on or after the issue date, never a Sunday.
    pub fn due_date(&self) -> CalendarDate {
        self.due_date
    }

    /// Service description exactly as supplied, surrounding whitespace included.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Invoice amount, strictly positive, with the scale it was written in.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount rendered as `#,##0.00` for display.
    pub fn formatted_amount(&self) -> String {
        format_amount(&self.amount)
    }

    /// Days between issue and due date; never negative.
    pub fn days_until_due(&self) -> i64 {
        self.issue_date.days_until(&self.due_date)
    }
}
