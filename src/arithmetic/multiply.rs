use crate::digit::{split, Digit, DoubleDigit};
use crate::{BigInt, Result};

/// `dst = a * b`, operand-scanning schoolbook multiplication.
///
/// `dst` is grown to `a.len() + b.len()` digits.
pub fn multiply(dst: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
    dst.grow(a.len() + b.len())?;
    dst.set_zero();

    let slots = dst.slots_mut();
    for (i, &x) in a.digits().iter().enumerate() {
        let mut carry: DoubleDigit = 0;
        for (j, &y) in b.digits().iter().enumerate() {
            let acc = slots[i + j] as DoubleDigit + x as DoubleDigit * y as DoubleDigit + carry;
            let (digit, next) = split(acc);
            slots[i + j] = digit;
            carry = next;
        }
        // (R - 1) + (R - 1)^2 + (R - 1) < R^2, so the carry is a digit
        slots[i + b.len()] = carry as Digit;
    }

    dst.normalize();
    Ok(())
}

/// `number *= factor`, for a single digit factor.
pub(crate) fn mul_assign_digit(number: &mut BigInt, factor: Digit) -> Result<()> {
    let l = number.len();
    number.grow(l + 1)?;
    let slots = number.slots_mut();
    let mut carry: DoubleDigit = 0;
    for slot in slots[..l].iter_mut() {
        let (digit, next) = split(*slot as DoubleDigit * factor as DoubleDigit + carry);
        *slot = digit;
        carry = next;
    }
    slots[l] = carry as Digit;
    number.normalize();
    Ok(())
}
