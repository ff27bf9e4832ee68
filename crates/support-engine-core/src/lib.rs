pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "matching")]
pub mod matching;

#[cfg(feature = "subsidy")]
pub mod subsidy;

pub use error::EngineError;
pub use types::*;

/// Standard result type for all engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Longest loan term the calculator accepts, in months.
pub const MAX_TERM_MONTHS: u32 = 360;
