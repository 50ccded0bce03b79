use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseIntError>;

/// Outcome of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The digit run fit the target type and the output value was written.
    Ok,
    /// No digit run was found at all (empty input, bare sign, `-` on an unsigned target, or a
    /// leading byte that is neither a digit nor a permitted sign).
    InvalidArgument,
    /// A digit run was found, but its value does not fit the target type.
    OutOfRange,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::InvalidArgument => "invalid_argument",
            Status::OutOfRange => "out_of_range",
        }
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Result`-flavoured view of a failed [`crate::FromCharsResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIntError {
    #[error("no decimal digits found at offset {offset}")]
    InvalidArgument { offset: usize },

    #[error("decimal literal of {consumed} bytes does not fit the target type")]
    OutOfRange { consumed: usize },
}

impl ParseIntError {
    pub fn status(&self) -> Status {
        match self {
            ParseIntError::InvalidArgument { .. } => Status::InvalidArgument,
            ParseIntError::OutOfRange { .. } => Status::OutOfRange,
        }
    }
}
