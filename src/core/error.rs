use thiserror::Error;

/// Errors that can occur during invoice construction.
///
/// The `Display` text of each variant is a fixed message meant both for the
/// end user and for programmatic matching; it never changes between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum FaturaError {
    /// The CNPJ has the wrong length, non-digit characters, a repeated-digit
    /// sequence, or a wrong check digit.
    #[error("CNPJ invalido")]
    InvalidTaxId,

    /// The due date is missing, malformed, earlier than the issue date, or a Sunday.
    #[error("Data de vencimento invalida")]
    InvalidDueDate,

    /// The description is missing or blank.
    #[error("Descricao do servico invalido")]
    InvalidDescription,

    /// The amount is missing, not a decimal number, or not strictly positive.
    #[error("Valor invalido")]
    InvalidAmount,

    /// A date string handed to a date comparison could not be parsed.
    ///
    /// Raised by [`is_on_or_after`](super::is_on_or_after); the invoice
    /// builder reports it as [`FaturaError::InvalidDueDate`].
    #[error("Data invalida")]
    InvalidDate,
}

impl FaturaError {
    /// Name of the invoice field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidTaxId => "tax_id",
            Self::InvalidDueDate | Self::InvalidDate => "due_date",
            Self::InvalidDescription => "description",
            Self::InvalidAmount => "amount",
        }
    }

    /// Rule identifier used in validation reports.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::InvalidTaxId => "R-01",
            Self::InvalidDueDate | Self::InvalidDate => "R-02",
            Self::InvalidDescription => "R-03",
            Self::InvalidAmount => "R-04",
        }
    }
}

/// Convenience alias for results carrying a [`FaturaError`].
pub type Result<T> = std::result::Result<T, FaturaError>;

/// One violated rule in a validation report.
///
/// Built from a [`FaturaError`]; the message is its `Display` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "due_date").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID, `R-01` (tax id) to `R-04` (amount).
    pub rule: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.field, self.message)
    }
}

impl From<FaturaError> for ValidationError {
    fn from(err: FaturaError) -> Self {
        Self {
            field: err.field().to_owned(),
            message: err.to_string(),
            rule: err.rule().to_owned(),
        }
    }
}
