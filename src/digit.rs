/// A place value of [`BigInt`][crate::BigInt]. Only the low [`DIGIT_BITS`] bits are used.
///
/// The radix is fixed (independent of the architecture) so that two 7-bit
/// bytes pack exactly into one digit, and the key text format stays portable.
pub type Digit = u32;

/// Multiple [`Digit`]s, least significant first.
pub type Digits = [Digit];

/// Unsigned type wide enough for a product of two digits plus carries.
pub(crate) type DoubleDigit = u64;
/// Signed type wide enough for a digit minus a digit product, used for borrows.
pub(crate) type SignedDoubleDigit = i64;

/// Bits per digit.
pub const DIGIT_BITS: u32 = 14;

/// $R = 2^{14} = 16384 = 128 \cdot 128$
pub const RADIX: Digit = 1 << DIGIT_BITS;

/// Largest number of decimal places needed to print a digit (`16383`).
pub const DECIMAL_PLACES: usize = 5;

/// Split a digit-sized accumulator into (digit, carry).
#[inline]
pub(crate) fn split(acc: DoubleDigit) -> (Digit, DoubleDigit) {
    ((acc % RADIX as DoubleDigit) as Digit, acc / RADIX as DoubleDigit)
}
