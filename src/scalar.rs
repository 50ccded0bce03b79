//! Scalar digit scanner.
//!
//! Consumes one byte per step. This is the reference behavior the SWAR scanner must match
//! exactly, and its tail loop.

/// Fold one ASCII byte into `acc` if it is a decimal digit.
///
/// The accumulation wraps silently; callers bound the digit count before trusting `acc`.
#[inline(always)]
pub(crate) fn parse_digit(byte: u8, acc: &mut u64) -> bool {
    let digit = byte.wrapping_sub(b'0');
    if digit > 9 {
        return false;
    }
    *acc = acc.wrapping_mul(10).wrapping_add(u64::from(digit));
    true
}

/// Consume the maximal digit run of `input` starting at `pos`, folding it into `acc`.
///
/// Returns the offset of the first byte that is not a digit (or `input.len()`).
#[inline]
pub fn scan_digits(input: &[u8], pos: usize, acc: &mut u64) -> usize {
    let mut p = pos;
    while let Some(&byte) = input.get(p) {
        if !parse_digit(byte, acc) {
            break;
        }
        p += 1;
    }
    p
}
