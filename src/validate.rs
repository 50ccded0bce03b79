//! Range validation of a scanned digit run.

use crate::bounds::U64_MAX_DIGITS;
use crate::err::Status;
use crate::integer::FromDecimal;

/// Decide whether a scanned run fits `T`.
///
/// - `magnitude` is the (possibly wrapped) 64-bit accumulator.
/// - `digit_count` is the length of the digit run.
/// - `leading` is the first digit of the run, if any.
///
/// A 20-digit run is the only case where `magnitude` may have wrapped and still be compared.
/// Only `u64` (and 64-bit `usize`) get there; every other type is cut off by its digit bound.
/// Such a literal can only fit if it starts with `1` and the wrapped accumulator landed in the
/// upper half of the `u64` range.
#[inline(always)]
pub(crate) fn check<T: FromDecimal>(
    magnitude: u64,
    digit_count: usize,
    negative: bool,
    leading: Option<u8>,
) -> Status {
    if digit_count == 0 {
        return Status::InvalidArgument;
    }
    if digit_count > T::MAX_DIGITS {
        return Status::OutOfRange;
    }

    if T::SIGNED {
        // Negative values reach one further than positive ones.
        if magnitude > T::MAX_MAGNITUDE + u64::from(negative) {
            return Status::OutOfRange;
        }
    } else {
        if magnitude > T::MAX_MAGNITUDE {
            return Status::OutOfRange;
        }
        if digit_count == U64_MAX_DIGITS
            && (leading != Some(b'1') || magnitude <= i64::MAX as u64)
        {
            return Status::OutOfRange;
        }
    }

    Status::Ok
}
