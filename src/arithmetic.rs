//! Kernel arithmetic on [`BigInt`]: signed increment, addition,
//! multiplication and long division.
//!
//! The free functions write into a caller-owned destination, growing it as
//! needed; the borrow checker rules out aliasing a destination with an input.
//! The methods on [`BigInt`] are allocating conveniences on top.
//!
//! Division is the only operation mutating an input: [`divide_in_place`]
//! turns the dividend into the remainder. [`divmod`] and [`modulo`] copy first.

use core::ops::Deref;

use ref_cast::{ref_cast_custom, RefCastCustom};

use crate::{BigInt, Error, Result};

mod add;
mod divide;
mod increment;
mod multiply;

pub use add::add;
pub use divide::{divide_in_place, divmod, modulo};
pub use multiply::multiply;
pub(crate) use divide::div_rem_assign_digit;

/// Non-zero odd integer, e.g. the lower argument of the Jacobi symbol.
///
/// A transparent view, so checked references can be handed out without copying.
/// The only ways in are [`BigInt::as_odd`] and `TryFrom`:
///
/// ```compile_fail
/// use ref_cast::RefCast;
/// let even = rsa_radix::BigInt::from_u64(4)?;
/// let _ = rsa_radix::Odd::ref_cast(&even);
/// # Ok::<(), rsa_radix::Error>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Odd(BigInt);

impl Deref for Odd {
    type Target = BigInt;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<BigInt> for Odd {
    type Error = BigInt;
    /// Enforces odd parity, handing back the number otherwise.
    fn try_from(n: BigInt) -> core::result::Result<Self, BigInt> {
        if n.is_odd() {
            Ok(Odd(n))
        } else {
            Err(n)
        }
    }
}

impl Odd {
    /// Caller checks that `n` is odd.
    #[ref_cast_custom]
    pub(crate) fn from_ref_unchecked(n: &BigInt) -> &Self;

    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl BigInt {
    /// View as [`Odd`], if it is.
    pub fn as_odd(&self) -> Option<&Odd> {
        self.is_odd().then(|| Odd::from_ref_unchecked(self))
    }

    pub fn sum(&self, summand: &BigInt) -> Result<BigInt> {
        let mut sum = BigInt::zero();
        add(&mut sum, self, summand)?;
        Ok(sum)
    }

    pub fn product(&self, factor: &BigInt) -> Result<BigInt> {
        let mut product = BigInt::zero();
        multiply(&mut product, self, factor)?;
        Ok(product)
    }

    /// Quotient and remainder, leaving `self` alone.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        divmod(self, divisor)
    }

    /// The canonical representative of `self` modulo `modulus`.
    pub fn reduce(&self, modulus: &BigInt) -> Result<BigInt> {
        let mut remainder = BigInt::zero();
        modulo(&mut remainder, self, modulus)?;
        Ok(remainder)
    }

    /// Exact halving helper for callers that know the divisor is a digit.
    pub(crate) fn div_rem_digit(&self, divisor: crate::Digit) -> Result<(BigInt, crate::Digit)> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        let mut quotient = BigInt::with_capacity(self.len())?;
        quotient.assign(self)?;
        let remainder = div_rem_assign_digit(&mut quotient, divisor);
        Ok((quotient, remainder))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::digit::{Digit, RADIX};
    use proptest::prelude::*;

    pub const M: Digit = RADIX - 1;
    pub const N1: Digit = RADIX - 1;
    pub const N2: Digit = RADIX - 2;

    pub fn big(digits: &[Digit]) -> BigInt {
        BigInt::from_digits(digits).unwrap()
    }

    pub fn small(n: u64) -> BigInt {
        BigInt::from_u64(n).unwrap()
    }

    pub const SUM_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[], &[], &[]),
        (&[], &[1], &[1]),
        (&[1], &[1], &[2]),
        (&[1], &[1, 1], &[2, 1]),
        (&[1], &[N1], &[0, 1]),
        (&[1], &[N1, N1], &[0, 0, 1]),
        (&[N1, N1], &[N1, N1], &[N2, N1, 1]),
        (&[1, 1, 1], &[N1, N1], &[0, 1, 2]),
        (&[2, 2, 1], &[N1, N2], &[1, 1, 2]),
    ];

    pub const MUL_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[], &[], &[]),
        (&[], &[1], &[]),
        (&[2], &[], &[]),
        (&[1], &[1], &[1]),
        (&[2], &[3], &[6]),
        (&[1], &[1, 1, 1], &[1, 1, 1]),
        (&[1, 2, 3], &[3], &[3, 6, 9]),
        (&[1, 1, 1], &[N1], &[N1, N1, N1]),
        (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
        (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
        (&[N1], &[N1], &[1, N2]),
        (&[N1, N1], &[N1], &[1, N1, N2]),
        (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
        (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
        (&[M / 2 + 1], &[2], &[0, 1]),
        (&[0, M / 2 + 1], &[2], &[0, 0, 1]),
        (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
        (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
        (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
        (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
        (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
    ];

    pub const DIV_REM_QUADRUPLES: &[(&[Digit], &[Digit], &[Digit], &[Digit])] = &[
        (&[1], &[2], &[], &[1]),
        (&[3], &[2], &[1], &[1]),
        (&[1, 1], &[2], &[M / 2 + 1], &[1]),
        (&[1, 1, 1], &[2], &[M / 2 + 1, M / 2 + 1], &[1]),
        (&[0, 1], &[N1], &[1], &[1]),
        (&[N1, N1], &[N2], &[2, 1], &[3]),
        (&[5, 0, 0, 1], &[0, 0, 1], &[0, 1], &[5]),
        (&[7, 7], &[7, 7], &[1], &[]),
        (&[7, 7], &[8, 7], &[], &[7, 7]),
    ];

    #[test]
    fn test_add() {
        for &(a, b, c) in SUM_TRIPLES {
            let (a, b, c) = (big(a), big(b), big(c));
            assert_eq!(a.sum(&b).unwrap(), c);
            assert_eq!(b.sum(&a).unwrap(), c);
        }
    }

    #[test]
    fn test_mul() {
        for &(a, b, c) in MUL_TRIPLES {
            let (a, b, c) = (big(a), big(b), big(c));
            assert_eq!(a.product(&b).unwrap(), c);
            assert_eq!(b.product(&a).unwrap(), c);
        }
    }

    #[test]
    fn test_div_rem() {
        for &(a_vec, b_vec, c_vec) in MUL_TRIPLES {
            let (a, b, c) = (big(a_vec), big(b_vec), big(c_vec));
            if !a.is_zero() {
                assert_eq!(c.div_rem(&a).unwrap(), (b.clone(), BigInt::zero()));
            }
            if !b.is_zero() {
                assert_eq!(c.div_rem(&b).unwrap(), (a.clone(), BigInt::zero()));
            }
        }

        for &(a, b, c, d) in DIV_REM_QUADRUPLES {
            let (a, b, c, d) = (big(a), big(b), big(c), big(d));
            assert_eq!(a.div_rem(&b).unwrap(), (c, d));
        }
    }

    #[test]
    fn divide_turns_dividend_into_remainder() {
        let mut a = small(1_000_000_007);
        let b = small(65537);
        let mut q = BigInt::zero();
        divide_in_place(&mut q, &mut a, &b).unwrap();
        assert_eq!(q, small(1_000_000_007 / 65537));
        assert_eq!(a, small(1_000_000_007 % 65537));
    }

    #[test]
    fn divide_by_zero() {
        let mut a = small(5);
        let mut q = BigInt::zero();
        assert_eq!(divide_in_place(&mut q, &mut a, &BigInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(small(5).reduce(&BigInt::zero()), Err(Error::DivisionByZero));
        // the dividend is untouched on failure
        assert_eq!(a, small(5));
    }

    #[test]
    fn modulo_leaves_input() {
        let a = big(&[3, 9, 27, 81]);
        let b = big(&[11, 13]);
        let mut r = BigInt::zero();
        modulo(&mut r, &a, &b).unwrap();
        assert_eq!(a, big(&[3, 9, 27, 81]));
        assert!(r < b);
        let (q, r2) = a.div_rem(&b).unwrap();
        assert_eq!(r, r2);
        assert_eq!(q.product(&b).unwrap().sum(&r).unwrap(), a);
    }

    #[test]
    fn divide_with_small_leading_divisor_digit() {
        // leading digit 1 exercises the normalization path
        let a = big(&[N1, N1, N1, N1, N1, N1]);
        let b = big(&[N1, 0, 1]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r < b);
        assert_eq!(q.product(&b).unwrap().sum(&r).unwrap(), a);
    }

    #[test]
    fn odd_view() {
        assert!(small(4).as_odd().is_none());
        let seven = small(7);
        let odd = seven.as_odd().unwrap();
        assert_eq!(**odd, small(7));
        assert!(Odd::try_from(small(0)).is_err());
        assert_eq!(Odd::try_from(small(9)).ok().map(Odd::into_inner), Some(small(9)));
    }

    fn any_big() -> impl Strategy<Value = BigInt> {
        proptest::collection::vec(0..RADIX, 0..8).prop_map(|digits| big(&digits))
    }

    proptest! {
        #[test]
        fn add_commutes(a in any_big(), b in any_big()) {
            prop_assert_eq!(a.sum(&b).unwrap(), b.sum(&a).unwrap());
        }

        #[test]
        fn add_associates(a in any_big(), b in any_big(), c in any_big()) {
            let left = a.sum(&b).unwrap().sum(&c).unwrap();
            let right = a.sum(&b.sum(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_commutes(a in any_big(), b in any_big()) {
            prop_assert_eq!(a.product(&b).unwrap(), b.product(&a).unwrap());
        }

        #[test]
        fn compare_reflexive(a in any_big()) {
            prop_assert_eq!(a.compare(&a), core::cmp::Ordering::Equal);
        }

        #[test]
        fn division_contract(a in any_big(), b in any_big()) {
            prop_assume!(!b.is_zero());
            let original = a.clone();
            let mut remainder = a;
            let mut quotient = BigInt::zero();
            divide_in_place(&mut quotient, &mut remainder, &b).unwrap();
            prop_assert!(remainder < b);
            let recombined = quotient.product(&b).unwrap().sum(&remainder).unwrap();
            prop_assert_eq!(recombined, original);
        }

        #[test]
        fn matches_native(a in 0u64..(1 << 40), b in 1u64..(1 << 24)) {
            let (q, r) = small(a).div_rem(&small(b)).unwrap();
            prop_assert_eq!(q.to_u64(), Some(a / b));
            prop_assert_eq!(r.to_u64(), Some(a % b));
            prop_assert_eq!(small(a).product(&small(b)).unwrap().to_u64(), Some(a * b));
            prop_assert_eq!(small(a).sum(&small(b)).unwrap().to_u64(), Some(a + b));
        }
    }
}
