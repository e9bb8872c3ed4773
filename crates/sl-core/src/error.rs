use thiserror::Error;

pub type SlResult<T> = Result<T, SlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlError {
    #[error("Invalid argument: {what} (got {value}, minimum {min})")]
    InvalidArg {
        what: &'static str,
        value: u64,
        min: u64,
    },

    #[error("Value too large: {what} ({value})")]
    Overflow { what: &'static str, value: u64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
