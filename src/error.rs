use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A sequence was constructed from, or concatenated with, something that
    /// cannot produce pairs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Element key is not scalar: {0}")]
    InvalidKey(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A strict numeric reduction found a value that is neither an integer nor
    /// a float.
    #[error("Sequence contains a non-numeric value: {0}")]
    NonNumericValue(String),

    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

impl Error {
    pub fn new_invalid_input<'a>(message: impl Into<Cow<'a, str>>) -> Self {
        Error::InvalidInput(message.into().into_owned())
    }

    pub fn new_invalid_key<'a>(message: impl Into<Cow<'a, str>>) -> Self {
        Error::InvalidKey(message.into().into_owned())
    }

    pub fn new_invalid_range<'a>(message: impl Into<Cow<'a, str>>) -> Self {
        Error::InvalidRange(message.into().into_owned())
    }

    pub fn new_non_numeric_value<'a>(message: impl Into<Cow<'a, str>>) -> Self {
        Error::NonNumericValue(message.into().into_owned())
    }

    pub fn new_contract_violation<'a>(message: impl Into<Cow<'a, str>>) -> Self {
        Error::ContractViolation(message.into().into_owned())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
