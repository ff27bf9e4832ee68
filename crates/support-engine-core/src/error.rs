use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid loan amount {amount}: must be greater than zero")]
    InvalidLoanAmount { amount: Decimal },

    #[error("Invalid loan term {months} months: must be between 1 and {max} months")]
    InvalidTerm { months: u32, max: u32 },

    #[error("Invalid bank rate {rate}%: must be between 0% and 100%")]
    InvalidBankRate { rate: Decimal },

    #[error("Invalid subsidy rate {rate}%: must not be negative")]
    InvalidSubsidyRate { rate: Decimal },

    #[error("Subsidy rate {subsidy_rate}% exceeds bank rate {bank_rate}%")]
    SubsidyExceedsBankRate {
        subsidy_rate: Decimal,
        bank_rate: Decimal,
    },

    #[error("Program rates are not configured: missing {missing}")]
    MissingProgramRates { missing: String },

    #[error("Loan amount {amount} is below the program minimum of {minimum}")]
    BelowMinimumLoanAmount { amount: Decimal, minimum: Decimal },

    #[error("Loan amount {amount} is above the program maximum of {maximum}")]
    AboveMaximumLoanAmount { amount: Decimal, maximum: Decimal },

    #[error("Loan term of {months} months exceeds the program maximum of {maximum} months")]
    TermExceedsMaximum { months: u32, maximum: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl EngineError {
    /// Stable machine-readable code for callers that branch on the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidLoanAmount { .. } => "invalid_loan_amount",
            EngineError::InvalidTerm { .. } => "invalid_term",
            EngineError::InvalidBankRate { .. } => "invalid_bank_rate",
            EngineError::InvalidSubsidyRate { .. } => "invalid_subsidy_rate",
            EngineError::SubsidyExceedsBankRate { .. } => "subsidy_exceeds_bank_rate",
            EngineError::MissingProgramRates { .. } => "missing_program_rates",
            EngineError::BelowMinimumLoanAmount { .. } => "below_minimum_loan_amount",
            EngineError::AboveMaximumLoanAmount { .. } => "above_maximum_loan_amount",
            EngineError::TermExceedsMaximum { .. } => "term_exceeds_maximum",
            EngineError::SerializationError(_) => "serialization_error",
        }
    }

    /// True for the input-validation kinds raised by the bare calculator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidLoanAmount { .. }
                | EngineError::InvalidTerm { .. }
                | EngineError::InvalidBankRate { .. }
                | EngineError::InvalidSubsidyRate { .. }
                | EngineError::SubsidyExceedsBankRate { .. }
        )
    }

    /// True for the kinds raised while applying a program's own limits.
    pub fn is_program_bound(&self) -> bool {
        matches!(
            self,
            EngineError::MissingProgramRates { .. }
                | EngineError::BelowMinimumLoanAmount { .. }
                | EngineError::AboveMaximumLoanAmount { .. }
                | EngineError::TermExceedsMaximum { .. }
        )
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::SerializationError(e.to_string())
    }
}
