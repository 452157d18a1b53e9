//! Error type shared by the generator core and the CLI.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Every character class toggle was off.
    #[error("Select at least one character type.")]
    NoClassSelected,

    #[error("Password length must be a whole number.")]
    LengthNotWhole(String),

    #[error("Choose a length between {min} and {max} characters.")]
    LengthOutOfRange { length: i64, min: usize, max: usize },

    /// A canned random value fell outside [0, 1).
    #[error("Random value {0} is outside [0, 1)")]
    OutOfUnitRange(f64),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Failed to write passwords: {0}")]
    Write(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Write(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
