//! Random integers from an injected generator.
//!
//! Nothing here owns global state: callers pass any [`RngCore`], and
//! [`seeded`] gives a reproducible one.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::digit::{Digit, RADIX};
use crate::{BigInt, Error, Result};

/// Deterministic generator for a seed, e.g. for reproducible key generation.
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

fn random_digit<R: RngCore + ?Sized>(rng: &mut R) -> Digit {
    // RADIX divides 2^32, so this is unbiased
    rng.next_u32() % RADIX
}

/// Uniform random digits in the lowest `digits` places, bumped to 1 if all came out zero.
pub fn random_digits<R: RngCore + ?Sized>(rng: &mut R, digits: usize) -> Result<BigInt> {
    let mut n = BigInt::with_capacity(digits.max(1))?;
    for slot in n.slots_mut()[..digits].iter_mut() {
        *slot = random_digit(rng);
    }
    n.normalize();
    if n.is_zero() {
        n.slots_mut()[0] = 1;
        n.normalize();
    }
    Ok(n)
}

/// Exactly `digits` significant digits, i.e. a non-zero leading digit.
pub fn random_with_length<R: RngCore + ?Sized>(rng: &mut R, digits: usize) -> Result<BigInt> {
    let mut n = random_digits(rng, digits)?;
    if digits > 0 {
        n.slots_mut()[digits - 1] = 1 + rng.next_u32() % (RADIX - 1);
        n.normalize();
    }
    Ok(n)
}

/// In `[1, bound)`, the way primality witnesses are drawn.
///
/// Random digits of the bound's length, reduced modulo the bound, with 0 mapped to 1.
/// Slightly biased, which does not matter for witnesses.
pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigInt) -> Result<BigInt> {
    if bound.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let mut n = random_digits(rng, bound.len())?.reduce(bound)?;
    if n.is_zero() {
        n.assign_u64(1)?;
    }
    Ok(n)
}
