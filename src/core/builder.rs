use tracing::{debug, info};

use super::amount::{format_amount, validate_amount};
use super::clock::{Clock, SystemClock};
use super::cnpj::validate_cnpj;
use super::dates::CalendarDate;
use super::description::validate_description;
use super::error::{FaturaError, Result, ValidationError};
use super::types::Invoice;

/// Builder collecting the raw, unvalidated fields of an invoice.
///
/// Nothing is checked until [`build`](Self::build); a field that is never set
/// is treated as missing and fails its rule.
///
/// ```
/// use chrono::NaiveDate;
/// use fatura::core::*;
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2023, 9, 21).unwrap());
///
/// let invoice = InvoiceBuilder::new(42)
///     .tax_id("71112917000126")
///     .due_date("28/09/2023")
///     .description("moveis planejados")
///     .amount("1000.59")
///     .build(&clock)
///     .unwrap();
///
/// assert_eq!(invoice.number(), 42);
/// assert_eq!(invoice.formatted_amount(), "1,000.59");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvoiceBuilder {
    number: i32,
    tax_id: Option<String>,
    due_date: Option<String>,
    description: Option<String>,
    amount: Option<String>,
}

impl InvoiceBuilder {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// CNPJ of the contracted party, 14 digits without punctuation.
    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    /// Due date as `dd/mm/yyyy`.
    pub fn due_date(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(date.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Amount as a decimal string, e.g. `"1500"` or `"1500.59"`.
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Validate every field in order and build the invoice.
    ///
    /// The rules run as tax id, due date, description, amount; the first one
    /// that fails is returned and no invoice is created. The issue date is
    /// taken from `clock` once, before the due date is checked against it.
    #[tracing::instrument(level = "debug", skip_all, fields(number = self.number))]
    pub fn build<C: Clock + ?Sized>(self, clock: &C) -> Result<Invoice> {
        let tax_id = check_tax_id(self.tax_id.as_deref()).inspect_err(log_rejection)?;
        debug!(stage = "tax_id_checked");

        let issue_date = CalendarDate::from(clock.today());
        let due_date =
            check_due_date(self.due_date.as_deref(), issue_date).inspect_err(log_rejection)?;
        debug!(stage = "due_date_checked", %issue_date, %due_date);

        let description =
            validate_description(self.description.as_deref()).inspect_err(log_rejection)?;
        debug!(stage = "description_checked");

        let amount = validate_amount(self.amount.as_deref()).inspect_err(log_rejection)?;
        debug!(stage = "amount_checked");

        info!(
            number = self.number,
            %due_date,
            amount = %format_amount(&amount),
            "invoice created"
        );
        Ok(Invoice::new_unchecked(
            self.number,
            tax_id.to_owned(),
            issue_date,
            due_date,
            description.to_owned(),
            amount,
        ))
    }

    /// Run every rule and report all violations, in pipeline order.
    ///
    /// Unlike [`build`](Self::build), this does not stop at the first failure.
    /// An empty list means `build` with the same clock would succeed.
    pub fn validate<C: Clock + ?Sized>(&self, clock: &C) -> Vec<ValidationError> {
        let issue_date = CalendarDate::from(clock.today());
        [
            check_tax_id(self.tax_id.as_deref()).err(),
            check_due_date(self.due_date.as_deref(), issue_date).err(),
            validate_description(self.description.as_deref()).err(),
            validate_amount(self.amount.as_deref()).err(),
        ]
        .into_iter()
        .flatten()
        .map(ValidationError::from)
        .collect()
    }
}

fn log_rejection(err: &FaturaError) {
    debug!(field = err.field(), rule = err.rule(), error = %err, "invoice rejected");
}

fn check_tax_id(raw: Option<&str>) -> Result<&str> {
    validate_cnpj(raw.ok_or(FaturaError::InvalidTaxId)?)
}

/// The due date must parse, must not precede `issue_date`, and must not be a Sunday.
fn check_due_date(raw: Option<&str>, issue_date: CalendarDate) -> Result<CalendarDate> {
    let due_date: CalendarDate = raw
        .ok_or(FaturaError::InvalidDueDate)?
        .parse()
        .map_err(|_| FaturaError::InvalidDueDate)?;
    if issue_date.days_until(&due_date) < 0 || due_date.is_sunday() {
        return Err(FaturaError::InvalidDueDate);
    }
    Ok(due_date)
}

/// Creates invoices stamped with the date reported by its [`Clock`].
///
/// The factory holds no state besides the clock; each call to
/// [`create`](Self::create) is independent.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFactory<C = SystemClock> {
    clock: C,
}

impl<C: Clock> InvoiceFactory<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validate the raw fields and create an invoice.
    ///
    /// See [`InvoiceBuilder::build`] for the order in which rules are checked.
    pub fn create(
        &self,
        number: i32,
        tax_id: &str,
        due_date: &str,
        description: &str,
        amount: &str,
    ) -> Result<Invoice> {
        InvoiceBuilder::new(number)
            .tax_id(tax_id)
            .due_date(due_date)
            .description(description)
            .amount(amount)
            .build(&self.clock)
    }
}

/// Create an invoice issued today according to the system clock.
pub fn create_invoice(
    number: i32,
    tax_id: &str,
    due_date: &str,
    description: &str,
    amount: &str,
) -> Result<Invoice> {
    InvoiceFactory::new(SystemClock).create(number, tax_id, due_date, description, amount)
}
