//! Target type descriptors.
//!
//! Every supported output type carries its signedness, digit bound and maximum magnitude as
//! associated constants, so the parse core is monomorphized per type and all range checks fold
//! to constants.

use crate::bounds::{BOOL_MAX_DIGITS, max_digit_count};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width type that can be produced from a decimal literal.
///
/// This trait is sealed; it is implemented for the primitive integers up to 64 bits and `bool`.
pub trait FromDecimal: Copy + sealed::Sealed {
    /// Whether a leading `-` is accepted.
    const SIGNED: bool;
    /// Maximum number of decimal digits a value of this type can have.
    const MAX_DIGITS: usize;
    /// The type's maximum value, widened to `u64`.
    const MAX_MAGNITUDE: u64;

    /// Produce the output value from an already validated magnitude.
    ///
    /// For signed types, `negative` applies two's-complement negation (`!magnitude + 1`)
    /// before narrowing. The caller guarantees the magnitude is in range.
    fn from_magnitude(magnitude: u64, negative: bool) -> Self;
}

macro_rules! impl_signed {
    ($($ty:ty)+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromDecimal for $ty {
                const SIGNED: bool = true;
                const MAX_DIGITS: usize = max_digit_count(size_of::<$ty>(), true);
                const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;

                #[inline(always)]
                fn from_magnitude(magnitude: u64, negative: bool) -> Self {
                    if negative {
                        (!magnitude).wrapping_add(1) as $ty
                    } else {
                        magnitude as $ty
                    }
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty)+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromDecimal for $ty {
                const SIGNED: bool = false;
                const MAX_DIGITS: usize = max_digit_count(size_of::<$ty>(), false);
                const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;

                #[inline(always)]
                fn from_magnitude(magnitude: u64, _negative: bool) -> Self {
                    magnitude as $ty
                }
            }
        )+
    };
}

impl_signed!(i8 i16 i32 i64 isize);
impl_unsigned!(u8 u16 u32 u64 usize);

impl sealed::Sealed for bool {}

impl FromDecimal for bool {
    const SIGNED: bool = false;
    const MAX_DIGITS: usize = BOOL_MAX_DIGITS;
    const MAX_MAGNITUDE: u64 = 1;

    #[inline(always)]
    fn from_magnitude(magnitude: u64, _negative: bool) -> Self {
        magnitude != 0
    }
}
