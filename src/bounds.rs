//! Upper bounds on the number of decimal digits a target type can hold.
//!
//! The digit-count check runs before any magnitude comparison. It rejects inputs that are
//! obviously too long while the 64-bit accumulator is still known not to have wrapped, except
//! for 20-digit `u64` literals (see [`crate::validate`]).

/// Maximum digits of a `bool` target (`0` or `1`).
pub const BOOL_MAX_DIGITS: usize = 1;

/// Maximum digits of `u64::MAX` (`18446744073709551615`).
pub const U64_MAX_DIGITS: usize = 20;

/// Maximum number of decimal digits any value of an integer of `width_bytes` bytes can have.
///
/// | width | signed | unsigned |
/// |-------|--------|----------|
/// | 1     | 3      | 3        |
/// | 2     | 5      | 5        |
/// | 4     | 10     | 10       |
/// | 8     | 19     | 20       |
///
/// Panics (a compile error in const context) for any other width.
pub const fn max_digit_count(width_bytes: usize, signed: bool) -> usize {
    match width_bytes {
        1 => 3,
        2 => 5,
        4 => 10,
        8 if signed => 19,
        8 => U64_MAX_DIGITS,
        _ => panic!("unsupported integer width"),
    }
}
