use crate::digit::{split, Digit, DoubleDigit};
use crate::{BigInt, Result};

/// Add with carry.
#[inline]
pub(crate) fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let (lo, carry) = split(*acc);
    *acc = carry;
    lo
}

/// `dst = a + b`, schoolbook.
///
/// `dst` is grown to `max(a.len(), b.len()) + 1` digits, to fit a possible carry.
pub fn add(dst: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
    let len = a.len().max(b.len());
    dst.grow(len + 1)?;
    dst.set_zero();

    let slots = dst.slots_mut();
    let mut carry = 0;
    for (i, slot) in slots[..len].iter_mut().enumerate() {
        *slot = adc(a.digit(i), b.digit(i), &mut carry);
    }
    slots[len] = carry as Digit;

    dst.normalize();
    Ok(())
}
