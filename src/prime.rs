//! Probable primes, by the Solovay–Strassen test.
//!
//! A composite odd $n$ passes a single round for at most half of the
//! witnesses $a \in [1, n)$, so $k$ rounds leave an error probability
//! of at most $2^{-k}$.

use core::ops::Deref;

use rand_core::RngCore;
use tracing::{debug, trace, warn};

use crate::number_theory::{jacobi, mod_exp};
use crate::random::{random_below, random_with_length};
use crate::{BigInt, Error, Odd, Result};

/// A number that passed [`is_probable_prime`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prime(BigInt);

impl Deref for Prime {
    type Target = BigInt;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Prime {
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

/// Run `witnesses` rounds of Solovay–Strassen on `candidate`.
///
/// Each round draws $a \in [1, n)$ and checks
/// $a^{(n-1)/2} \equiv (a / n) \pmod n$ with a non-zero symbol.
/// One is not prime. Zero rounds accept anything else.
pub fn is_probable_prime<R: RngCore + ?Sized>(
    candidate: &Odd,
    witnesses: usize,
    rng: &mut R,
) -> Result<bool> {
    if candidate.is_one() {
        return Ok(false);
    }

    let mut minus_one = candidate.try_clone()?;
    minus_one.increment(-1)?;
    let (half, _) = minus_one.div_rem_digit(2)?;

    for round in 0..witnesses {
        let a = random_below(rng, candidate)?;
        let symbol = jacobi(&a, candidate)?;
        if symbol == 0 {
            trace!(round, "witness shares a factor");
            return Ok(false);
        }
        let power = mod_exp(&a, &half, candidate)?;
        let agrees = match symbol {
            1 => power.is_one(),
            _ => power == minus_one,
        };
        if !agrees {
            trace!(round, "witness disagrees with its Jacobi symbol");
            return Ok(false);
        }
    }

    Ok(true)
}

/// Search upwards in steps of two from a random odd number with exactly
/// `digits` digits, testing at most `max_candidates` of them.
///
/// The search may carry into one more digit than asked for.
pub fn random_prime<R: RngCore + ?Sized>(
    rng: &mut R,
    digits: usize,
    witnesses: usize,
    max_candidates: usize,
) -> Result<Prime> {
    let mut candidate = random_with_length(rng, digits)?;
    if candidate.is_even() {
        candidate.increment(1)?;
    }
    if candidate.is_one() {
        candidate.increment(2)?;
    }

    for tried in 0..max_candidates {
        // odd by construction, and stepping by two keeps it so
        let odd = Odd::from_ref_unchecked(&candidate);
        if is_probable_prime(odd, witnesses, rng)? {
            debug!(digits = candidate.len(), tried, "found probable prime");
            return Ok(Prime(candidate));
        }
        candidate.increment(2)?;
    }

    warn!(digits, max_candidates, "no probable prime found");
    Err(Error::PrimeSearchExhausted { candidates: max_candidates })
}
