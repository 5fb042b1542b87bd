use strum::IntoStaticStr;
use thiserror::Error;

/// Why a candidate was rejected. Only the first failing check is reported.
#[derive(Debug, PartialEq, Eq, Clone, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NhsNumberError {
    #[error("The candidate is empty")]
    Empty,

    #[error("Expected 10 characters once separators are removed, found {length}")]
    InvalidLength { length: usize },

    #[error("Non-digit character {character:?} at position {position}")]
    NonDigit { position: usize, character: char },

    #[error("The prefix {prefix} is outside of the allocated ranges")]
    PrefixOutOfRange { prefix: u32 },

    #[error("The prefix has no valid check digit")]
    UndefinedCheckDigit,

    #[error("Expected check digit {expected}, found {provided}")]
    CheckDigitMismatch { expected: u8, provided: u8 },
}

impl NhsNumberError {
    /// Stable name of the failure, used as the `reason` metric label.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}
