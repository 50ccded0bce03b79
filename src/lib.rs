#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod err;
mod integer;
mod parse;
pub mod scalar;
pub mod swar;
mod validate;

pub use crate::err::{ParseIntError, Result, Status};
pub use crate::integer::FromDecimal;
pub use crate::parse::{
    DigitScanner, FromCharsResult, Scalar, Strategy, Swar, from_chars, from_chars_swar,
    from_chars_with, parse, parse_swar,
};
