//! SWAR ("SIMD within a register") digit scanner.
//!
//! Strategy:
//! - While at least 4 bytes remain, load them as one `u32` and test all four lanes for ASCII
//!   digits with a couple of masked operations.
//! - If they are all digits, fold them into a `0..=9999` value with two staged multiplies and
//!   apply `acc = acc * 10000 + folded`.
//! - Anything else (short tail, a window with a non-digit) goes through the scalar scanner,
//!   which stops at the exact byte where the run ends.
//!
//! Byte order: windows are always loaded **little-endian**, so the first input byte sits in the
//! least significant lane regardless of the host. The lane arithmetic below depends on that and
//! on nothing else.

use byteorder::{ByteOrder, LittleEndian};

use crate::scalar;

const ASCII_ZEROS: u32 = 0x3030_3030;
const HIGH_NIBBLES: u32 = 0xF0F0_F0F0;

/// Load a 4-byte window with the first byte in the low lane.
#[inline(always)]
pub(crate) fn load4(window: &[u8]) -> u32 {
    LittleEndian::read_u32(window)
}

/// True if every lane of `word` is an ASCII digit (`0x30..=0x39`).
///
/// The high-nibble test pins each lane to `0x30..=0x3F`; adding 6 then pushes exactly
/// `0x3A..=0x3F` into bit 6. No lane can carry into its neighbour once the first test passed.
#[inline(always)]
pub(crate) fn is_digit4(word: u32) -> bool {
    (word & HIGH_NIBBLES) == ASCII_ZEROS && (word.wrapping_add(0x0606_0606) & 0x4040_4040) == 0
}

/// Fold four little-endian digit lanes `d0 d1 d2 d3` into `d0*1000 + d1*100 + d2*10 + d3`.
///
/// Requires `is_digit4(word)`.
#[inline(always)]
pub(crate) fn fold4(word: u32) -> u32 {
    let digits = word.wrapping_sub(ASCII_ZEROS);

    // Pair up lanes: `x * (10 * 256 + 1)` leaves `10 * lo + hi` in byte 1 of each half.
    let lo_pair = (digits & 0xFFFF).wrapping_mul(2561);
    let hi_pair = (digits >> 16).wrapping_mul(2561);
    let pairs = ((lo_pair & 0xFF00) >> 8) | ((hi_pair & 0xFF00) << 8);

    // `pairs * (100 * 65536 + 1)` leaves `100 * lo + hi` in the upper half.
    (pairs.wrapping_mul(6_553_601) >> 16) & 0xFFFF
}

/// Consume the maximal digit run of `input` starting at `pos`, folding it into `acc`.
///
/// Observably identical to [`scalar::scan_digits`]: same returned offset, same (wrapping)
/// accumulator value.
#[inline]
pub fn scan_digits(input: &[u8], pos: usize, acc: &mut u64) -> usize {
    let mut p = pos;
    while let Some(window) = input.get(p..).and_then(|rest| rest.get(..4)) {
        let word = load4(window);
        if !is_digit4(word) {
            break;
        }
        *acc = acc.wrapping_mul(10_000).wrapping_add(u64::from(fold4(word)));
        p += 4;
    }

    scalar::scan_digits(input, p, acc)
}
