use alloc::vec::Vec;
use core::cmp::Ordering;

use super::multiply::mul_assign_digit;
use crate::digit::{Digit, DoubleDigit, SignedDoubleDigit, RADIX};
use crate::{BigInt, Error, Result};

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub(crate) fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    let x = hi as DoubleDigit * RADIX as DoubleDigit + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    debug_assert!(q < RADIX as DoubleDigit);
    let r = x % divisor;

    (q as Digit, r as Digit)
}

/// Divides `number` in-place by the non-zero digit `divisor`, returning the remainder.
pub(crate) fn div_rem_assign_digit(number: &mut BigInt, divisor: Digit) -> Digit {
    debug_assert!(divisor != 0 && divisor < RADIX);
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    let l = number.len();
    for digit in number.slots_mut()[..l].iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    number.normalize();
    remainder
}

/// Long division: `quotient = a / b`, and `a` becomes the remainder `a % b`.
///
/// Quotient digits are produced from most to least significant. Each one is
/// estimated from the two leading digits of the current remainder window over
/// the leading digit of the divisor, then decremented until subtracting that
/// multiple of the divisor leaves no negative digit in the window.
///
/// Both operands are first scaled by $f = \lfloor R / (b_{top} + 1) \rfloor$, which
/// makes the leading divisor digit at least $R/2$; then every estimate is at most
/// two too large (Knuth, TAOCP vol 2 section 4.3.1, algorithm D). The remainder
/// is scaled back at the end. The scratch window is sized to the divisor.
///
/// Fails for `b = 0`, leaving `a` untouched.
pub fn divide_in_place(quotient: &mut BigInt, a: &mut BigInt, b: &BigInt) -> Result<()> {
    let top = b.leading_digit().ok_or(Error::DivisionByZero)?;

    if a.compare(b) == Ordering::Less {
        quotient.set_zero();
        return Ok(());
    }

    let n = b.len();
    if n == 1 {
        quotient.assign(a)?;
        let remainder = div_rem_assign_digit(quotient, top);
        a.assign_u64(remainder as u64)?;
        return Ok(());
    }

    let factor = RADIX / (top + 1);
    let mut v = BigInt::with_capacity(n + 1)?;
    v.assign(b)?;
    mul_assign_digit(&mut v, factor)?;
    debug_assert_eq!(v.len(), n);

    let m = a.len();
    // the scaled dividend may take one more digit
    a.grow(m + 1)?;
    mul_assign_digit(a, factor)?;

    quotient.grow(m - n + 1)?;
    quotient.set_zero();

    let mut window: Vec<SignedDoubleDigit> = Vec::new();
    window.try_reserve_exact(n + 1)?;
    window.resize(n + 1, 0);

    let v = v.digits();
    let v_top = v[n - 1] as DoubleDigit;
    let u = a.slots_mut();
    let q = quotient.slots_mut();

    for j in (0..=(m - n)).rev() {
        let x = u[j + n] as DoubleDigit * RADIX as DoubleDigit + u[j + n - 1] as DoubleDigit;
        let mut estimate = (x / v_top).min(RADIX as DoubleDigit - 1);

        while !subtract_multiple(&mut window, &u[j..=(j + n)], v, estimate) {
            // if the estimate is too large, decrease it by 1
            estimate -= 1;
        }

        for (slot, &digit) in u[j..=(j + n)].iter_mut().zip(window.iter()) {
            *slot = digit as Digit;
        }
        q[j] = estimate as Digit;
    }

    a.normalize();
    quotient.normalize();

    let rest = div_rem_assign_digit(a, factor);
    debug_assert_eq!(rest, 0);
    Ok(())
}

/// `window = u - estimate * v` with borrows, where `u` has one digit more than `v`.
///
/// Returns false if the result is negative, i.e., the estimate was too large.
fn subtract_multiple(
    window: &mut [SignedDoubleDigit],
    u: &[Digit],
    v: &[Digit],
    estimate: DoubleDigit,
) -> bool {
    let radix = RADIX as SignedDoubleDigit;
    let estimate = estimate as SignedDoubleDigit;
    let n = v.len();

    let mut borrow: SignedDoubleDigit = 0;
    for i in 0..n {
        let t = u[i] as SignedDoubleDigit - estimate * v[i] as SignedDoubleDigit + borrow;
        window[i] = t.rem_euclid(radix);
        // borrow from the next place
        borrow = t.div_euclid(radix);
    }
    window[n] = u[n] as SignedDoubleDigit + borrow;
    window[n] >= 0
}

/// Quotient and remainder of `a / b`, without touching `a`.
pub fn divmod(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt)> {
    let mut remainder = BigInt::with_capacity(a.len() + 1)?;
    remainder.assign(a)?;
    let mut quotient = BigInt::zero();
    divide_in_place(&mut quotient, &mut remainder, b)?;
    Ok((quotient, remainder))
}

/// `dst = a mod b`, working on a copy of `a` held in `dst`.
pub fn modulo(dst: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
    dst.assign(a)?;
    let mut quotient = BigInt::zero();
    divide_in_place(&mut quotient, dst, b)
}
