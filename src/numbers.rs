use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::digit::{split, Digit, DoubleDigit, RADIX};
use crate::{Error, Result};

mod trait_implementations;

/// Unsigned integer of variable length, in radix $R = 2^{14}$.
///
/// Internal representation as little-endian digits. The buffer holds
/// `capacity()` digit slots, of which the first `len()` are significant:
///
/// - every digit lies in `[0, R)`
/// - `len()` is minimal, i.e. all digits at or above it are zero
/// - zero has length 0
///
/// Capacity grows on demand and never shrinks. Growth goes through
/// `try_reserve`, so running out of memory is an [`Error::OutOfMemory`]
/// instead of an abort.
#[derive(Clone, Default)]
pub struct BigInt {
    digits: Vec<Digit>,
    len: usize,
}

// c'tors and such
impl BigInt {
    /// Zero, without any allocated digits.
    pub const fn zero() -> Self {
        Self { digits: Vec::new(), len: 0 }
    }

    /// Zero, with `capacity` (zero-filled) digit slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut n = Self::zero();
        n.grow(capacity)?;
        Ok(n)
    }

    /// From little-endian digits, which must each be below the radix.
    pub fn from_digits(digits: &[Digit]) -> Result<Self> {
        if digits.iter().any(|&digit| digit >= RADIX) {
            return Err(Error::MalformedInteger("digit exceeds radix"));
        }
        let mut n = Self::with_capacity(digits.len())?;
        n.digits[..digits.len()].copy_from_slice(digits);
        n.normalize();
        Ok(n)
    }

    /// Like `clone`, but reporting allocation failure.
    pub fn try_clone(&self) -> Result<Self> {
        let mut n = Self::with_capacity(self.len)?;
        n.assign(self)?;
        Ok(n)
    }

    pub fn from_u64(value: u64) -> Result<Self> {
        let mut n = Self::zero();
        n.assign_u64(value)?;
        Ok(n)
    }

    /// Number of significant digits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated digit slots.
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// The significant digits, least significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.len]
    }

    /// Digit at place `i`, zero beyond the significant digits.
    pub fn digit(&self, i: usize) -> Digit {
        self.digits().get(i).copied().unwrap_or(0)
    }

    pub fn leading_digit(&self) -> Option<Digit> {
        self.digits().last().copied()
    }

    /// All digit slots, including the zero ones above `len()`.
    ///
    /// Callers writing here must [`normalize`](Self::normalize) afterwards.
    pub(crate) fn slots_mut(&mut self) -> &mut [Digit] {
        &mut self.digits
    }

    /// Ensure at least `capacity` digit slots.
    pub fn grow(&mut self, capacity: usize) -> Result<()> {
        let current = self.digits.len();
        if capacity > current {
            self.digits.try_reserve_exact(capacity - current)?;
            self.digits.resize(capacity, 0);
        }
        Ok(())
    }

    /// Recompute the length as the index of the highest non-zero digit plus one.
    pub fn normalize(&mut self) {
        self.len = self.digits.iter()
            .rposition(|&digit| digit != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Zero all slots, keeping the capacity.
    pub fn set_zero(&mut self) {
        self.digits.fill(0);
        self.len = 0;
    }

    /// Copy the magnitude of `src`, growing (never shrinking) the capacity.
    pub fn assign(&mut self, src: &BigInt) -> Result<()> {
        self.grow(src.len)?;
        self.set_zero();
        self.digits[..src.len].copy_from_slice(src.digits());
        self.len = src.len;
        Ok(())
    }

    /// Decompose a native integer into digits.
    ///
    /// Only non-negative values have a representation.
    pub fn assign_small(&mut self, value: i64) -> Result<()> {
        if value < 0 {
            return Err(Error::NegativeValue);
        }
        self.assign_u64(value as u64)
    }

    pub(crate) fn assign_u64(&mut self, value: u64) -> Result<()> {
        // 64 bits need at most five 14-bit digits
        self.grow(5)?;
        self.set_zero();
        let mut rest = value as DoubleDigit;
        let mut i = 0;
        while rest > 0 {
            let (digit, carry) = split(rest);
            self.digits[i] = digit;
            rest = carry;
            i += 1;
        }
        self.len = i;
        Ok(())
    }

    /// The value as a native integer, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits().iter().rev().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(RADIX as u64)?.checked_add(digit as u64)
        })
    }
}

/// Predicates
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    pub fn is_one(&self) -> bool {
        self.len == 1 && self.digits[0] == 1
    }

    /// The radix is even, so parity is the parity of the lowest digit.
    pub fn is_even(&self) -> bool {
        self.digit(0) % 2 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Three-way comparison of magnitudes, scanning down from the
    /// highest significant place of either operand.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        let top = self.len.max(other.len);
        for i in (0..top).rev() {
            match self.digit(i).cmp(&other.digit(i)) {
                Ordering::Equal => {}
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}
