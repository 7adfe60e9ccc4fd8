use core::{cmp::Ordering, fmt, ops::Deref, str::FromStr};

use zeroize::Zeroize;

use super::BigInt;
use crate::digit::{Digit, DECIMAL_PLACES};
use crate::{Error, Result};

impl Deref for BigInt {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        self.digits()
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for BigInt {}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl TryFrom<i64> for BigInt {
    type Error = Error;
    fn try_from(value: i64) -> Result<Self> {
        let mut n = BigInt::zero();
        n.assign_small(value)?;
        Ok(n)
    }
}

/// Zeroes every slot, not just the significant ones.
impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.digits.as_mut_slice().zeroize();
        self.len = 0;
    }
}

/// Most significant digit first, each as five decimal places, separated by dashes.
///
/// Zero prints as a single group.
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "{:0width$}", 0, width = DECIMAL_PLACES);
        }
        for (i, digit) in self.digits().iter().rev().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:0width$}", digit, width = DECIMAL_PLACES)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl FromStr for BigInt {
    type Err = Error;
    fn from_str(text: &str) -> Result<Self> {
        crate::text::parse(text)
    }
}
