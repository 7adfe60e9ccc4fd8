use crate::digit::{split, DoubleDigit, SignedDoubleDigit, RADIX};
use crate::{BigInt, Error, Result};

impl BigInt {
    /// Add a small signed `delta`, propagating the carry (or borrow) digit by digit.
    ///
    /// Grows by a digit on carry-out, shrinks the length when the top digit
    /// is borrowed away. Magnitudes are non-negative: a decrement below zero
    /// fails with [`Error::Underflow`] and leaves `self` unchanged.
    pub fn increment(&mut self, delta: i32) -> Result<()> {
        let magnitude = delta.unsigned_abs() as DoubleDigit;
        if delta >= 0 {
            self.carry_in(magnitude)
        } else {
            self.borrow_out(magnitude)
        }
    }

    fn carry_in(&mut self, mut carry: DoubleDigit) -> Result<()> {
        if carry == 0 {
            return Ok(());
        }
        // |delta| < 2^31 spans at most three digits, plus one for carry-out
        self.grow(self.len().max(3) + 1)?;
        let slots = self.slots_mut();
        let mut i = 0;
        while carry > 0 {
            let (digit, next) = split(slots[i] as DoubleDigit + carry);
            slots[i] = digit;
            carry = next;
            i += 1;
        }
        self.normalize();
        Ok(())
    }

    fn borrow_out(&mut self, borrow: DoubleDigit) -> Result<()> {
        // to_u64 is None only for values above u64::MAX, which cover any borrow
        if self.to_u64().map_or(false, |value| value < borrow) {
            return Err(Error::Underflow);
        }
        let radix = RADIX as SignedDoubleDigit;
        let slots = self.slots_mut();
        let mut borrow = borrow as SignedDoubleDigit;
        let mut i = 0;
        while borrow > 0 {
            let t = slots[i] as SignedDoubleDigit - borrow;
            slots[i] = t.rem_euclid(radix) as crate::Digit;
            borrow = -t.div_euclid(radix);
            i += 1;
        }
        self.normalize();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::arithmetic::test::{big, small, N1};
    use crate::{BigInt, Error};

    #[test]
    fn carry_extends_length() {
        let mut n = big(&[N1]);
        n.increment(1).unwrap();
        assert_eq!(n, big(&[0, 1]));

        let mut n = big(&[N1, N1]);
        n.increment(2).unwrap();
        assert_eq!(n, big(&[1, 0, 1]));
    }

    #[test]
    fn borrow_shrinks_length() {
        let mut n = big(&[0, 1]);
        n.increment(-1).unwrap();
        assert_eq!(n, big(&[N1]));
        assert_eq!(n.len(), 1);

        let mut n = big(&[1, 0, 1]);
        n.increment(-2).unwrap();
        assert_eq!(n, big(&[N1, N1]));
    }

    #[test]
    fn increments_from_zero() {
        let mut n = BigInt::zero();
        n.increment(15).unwrap();
        assert_eq!(n, small(15));
        n.increment(-15).unwrap();
        assert!(n.is_zero());
    }

    #[test]
    fn large_deltas() {
        let mut n = small(1 << 40);
        n.increment(i32::MAX).unwrap();
        assert_eq!(n.to_u64(), Some((1 << 40) + i32::MAX as u64));
        n.increment(i32::MIN).unwrap();
        assert_eq!(n.to_u64(), Some((1 << 40) - 1));
    }

    #[test]
    fn no_sign_crossing() {
        let mut n = small(1);
        assert_eq!(n.increment(-2), Err(Error::Underflow));
        assert_eq!(n, small(1));

        let mut zero = BigInt::zero();
        assert_eq!(zero.increment(-1), Err(Error::Underflow));
    }
}
