use thiserror::Error;

/// Errors raised while parsing, configuring or advancing document numbers.
///
/// Allocation itself never fails: malformed existing numbers are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumberingError {
    /// Input is not a document number of the form `PREFIX-YYYY-SEQ`.
    #[error("invalid document number {input:?}: {reason}")]
    Parse {
        /// The rejected input, as given.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Name or prefix does not belong to any known document type.
    #[error("unknown document type: {0:?}")]
    UnknownDocumentType(String),

    /// Year cannot be written with exactly four digits.
    #[error("year {0} does not have four digits")]
    InvalidYear(i32),

    /// A sequence may only move forward in time.
    #[error("new year {requested} must be greater than current year {current}")]
    YearNotAdvancing {
        /// Year the sequence is currently numbering.
        current: i32,
        /// Year the caller asked to advance to.
        requested: i32,
    },
}

impl NumberingError {
    pub(crate) fn parse(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }
}
