//! Core invoice type, validation rules, and construction.
//!
//! Each rule lives in its own module and is usable on its own; the
//! [`InvoiceBuilder`] and [`InvoiceFactory`] compose them into the single
//! validated construction path.

mod amount;
mod builder;
mod clock;
pub mod cnpj;
mod dates;
mod description;
mod error;
mod types;

pub use amount::*;
pub use builder::*;
pub use clock::*;
pub use cnpj::{
    cnpj_check_digits, format_cnpj, is_valid_cnpj, strip_cnpj_punctuation, validate_cnpj,
};
pub use dates::*;
pub use description::*;
pub use error::*;
pub use types::*;
