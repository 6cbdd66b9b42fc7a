//! # fatura
//!
//! Validated construction of invoices (faturas) from raw, user-supplied fields.
//!
//! An [`Invoice`](crate::core::Invoice) can only come into existence through
//! [`InvoiceBuilder`](crate::core::InvoiceBuilder) or
//! [`InvoiceFactory`](crate::core::InvoiceFactory), which check the raw fields
//! in a fixed order and report the first rule that fails:
//!
//! 1. the contracted party's CNPJ passes the two-stage mod-11 checksum,
//! 2. the due date is a real `dd/mm/yyyy` date, not before today and not a Sunday,
//! 3. the description is not blank,
//! 4. the amount is a decimal strictly greater than zero.
//!
//! The issue date is always "today" as reported by an injectable [`Clock`](crate::core::Clock).
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fatura::core::*;
//! use rust_decimal_macros::dec;
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2023, 9, 21).unwrap());
//! let factory = InvoiceFactory::new(clock);
//!
//! let invoice = factory
//!     .create(1, "71112917000126", "28/09/2023", "moveis planejados", "1500")
//!     .unwrap();
//!
//! assert_eq!(invoice.issue_date().to_string(), "21/09/2023");
//! assert_eq!(invoice.amount(), dec!(1500));
//!
//! let err = factory
//!     .create(1, "7111291700012", "28/09/2023", "moveis planejados", "1500")
//!     .unwrap_err();
//! assert_eq!(err, FaturaError::InvalidTaxId);
//! assert_eq!(err.to_string(), "CNPJ invalido");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice type, validators, builder and factory |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
