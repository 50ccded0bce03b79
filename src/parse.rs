use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::err::{ParseIntError, Result, Status};
use crate::integer::FromDecimal;
use crate::{scalar, swar, validate};

/// Outcome of a conversion: how far the parser got, and whether the value was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FromCharsResult {
    /// Offset of the first byte not regarded as part of the literal.
    ///
    /// `0` for [`Status::InvalidArgument`]; the end of the full digit run otherwise, even when
    /// the literal did not fit.
    pub consumed: usize,
    pub status: Status,
}

impl FromCharsResult {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// The unconsumed remainder of `input`.
    #[inline]
    pub fn rest<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.consumed..]
    }

    /// Returns the consumed length on success.
    pub fn into_result(self) -> Result<usize> {
        match self.status {
            Status::Ok => Ok(self.consumed),
            Status::InvalidArgument => Err(ParseIntError::InvalidArgument {
                offset: self.consumed,
            }),
            Status::OutOfRange => Err(ParseIntError::OutOfRange {
                consumed: self.consumed,
            }),
        }
    }
}

/// A strategy for consuming a run of ASCII digits.
///
/// Implementations must consume exactly the maximal digit run starting at `pos`, fold it into
/// `acc` as `acc = acc * 10 + digit` (wrapping), and return the offset one past the run.
pub trait DigitScanner {
    const NAME: &'static str;

    fn scan(input: &[u8], pos: usize, acc: &mut u64) -> usize;
}

/// One byte per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scalar;

/// Four bytes per step where possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swar;

impl DigitScanner for Scalar {
    const NAME: &'static str = "scalar";

    #[inline(always)]
    fn scan(input: &[u8], pos: usize, acc: &mut u64) -> usize {
        scalar::scan_digits(input, pos, acc)
    }
}

impl DigitScanner for Swar {
    const NAME: &'static str = "swar";

    #[inline(always)]
    fn scan(input: &[u8], pos: usize, acc: &mut u64) -> usize {
        swar::scan_digits(input, pos, acc)
    }
}

/// Runtime choice of scanner, for callers that pick one dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Scalar,
    #[default]
    Swar,
}

impl Strategy {
    #[inline]
    pub fn from_chars<T: FromDecimal>(self, input: &[u8], value: &mut T) -> FromCharsResult {
        match self {
            Strategy::Scalar => from_chars_with::<Scalar, T>(input, value),
            Strategy::Swar => from_chars_with::<Swar, T>(input, value),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Scalar => Scalar::NAME,
            Strategy::Swar => Swar::NAME,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "scalar" => Ok(Strategy::Scalar),
            "swar" => Ok(Strategy::Swar),
            other => Err(format!("unknown scanner `{}`", other)),
        }
    }
}

/// Convert the decimal literal at the start of `input` into `value`, using scanner `S`.
///
/// `value` is written only when the returned status is [`Status::Ok`].
#[inline]
pub fn from_chars_with<S: DigitScanner, T: FromDecimal>(
    input: &[u8],
    value: &mut T,
) -> FromCharsResult {
    let negative = T::SIGNED && input.first() == Some(&b'-');
    let start = usize::from(negative);

    let mut acc = 0u64;
    let end = S::scan(input, start, &mut acc);
    let digit_count = end - start;

    match validate::check::<T>(acc, digit_count, negative, input.get(start).copied()) {
        Status::Ok => {
            *value = T::from_magnitude(acc, negative);
            FromCharsResult {
                consumed: end,
                status: Status::Ok,
            }
        }
        Status::InvalidArgument => {
            trace!("{}: no digits in {} byte input", S::NAME, input.len());
            FromCharsResult {
                consumed: 0,
                status: Status::InvalidArgument,
            }
        }
        Status::OutOfRange => {
            trace!("{}: {} digit literal out of range", S::NAME, digit_count);
            FromCharsResult {
                consumed: end,
                status: Status::OutOfRange,
            }
        }
    }
}

/// Convert the decimal literal at the start of `input` one byte at a time.
#[inline]
pub fn from_chars<T: FromDecimal>(input: &[u8], value: &mut T) -> FromCharsResult {
    from_chars_with::<Scalar, T>(input, value)
}

/// Convert the decimal literal at the start of `input`, four digits at a time where possible.
///
/// Always agrees with [`from_chars`].
#[inline]
pub fn from_chars_swar<T: FromDecimal>(input: &[u8], value: &mut T) -> FromCharsResult {
    from_chars_with::<Swar, T>(input, value)
}

fn parse_with<S: DigitScanner, T: FromDecimal + Default>(input: &[u8]) -> Result<(T, usize)> {
    let mut value = T::default();
    let consumed = from_chars_with::<S, T>(input, &mut value).into_result()?;
    Ok((value, consumed))
}

/// Parse the leading literal of `input`, returning the value and the number of bytes consumed.
///
/// Trailing bytes after the digit run are not an error; compare the consumed length with
/// `input.len()` to require a full match.
pub fn parse<T: FromDecimal + Default>(input: &[u8]) -> Result<(T, usize)> {
    parse_with::<Scalar, T>(input)
}

/// Same as [`parse`], using the SWAR scanner.
pub fn parse_swar<T: FromDecimal + Default>(input: &[u8]) -> Result<(T, usize)> {
    parse_with::<Swar, T>(input)
}
