//! RSA keys.
//!
//! Textbook RSA over [`BigInt`]: primes $p \neq q$, modulus $n = pq$,
//! public exponent $e$ coprime to $\varphi = (p-1)(q-1)$ and private
//! exponent $d = e^{-1} \bmod \varphi$. There is no padding; messages are
//! cut into blocks by the [`codec`](crate::codec).
//!
//! The private exponent is found by a linear search for the multiplier
//! $k$ with $e \mid k\varphi + 1$, so key generation is $O(e)$ divisions.

use core::fmt;

use rand_core::RngCore;
use tracing::debug;
use zeroize::Zeroize;

use crate::arithmetic::{divide_in_place, modulo, multiply};
use crate::error::Context;
use crate::number_theory::is_coprime;
use crate::prime::random_prime;
use crate::random::seeded;
use crate::{BigInt, Error, Result, Step};

/// Parameters of key generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Digits of each prime (the modulus gets about twice as many).
    pub prime_digits: usize,
    /// Solovay–Strassen rounds per prime candidate.
    pub witnesses: usize,
    /// Candidates tested per prime before giving up.
    pub max_candidates: usize,
    /// Where the search for an odd public exponent starts.
    pub first_public_exponent: u32,
}

impl Config {
    pub fn of<R: Rsa>() -> Self {
        Config {
            prime_digits: R::PRIME_DIGITS,
            witnesses: 100,
            max_candidates: 100_000,
            first_public_exponent: 15,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::of::<Rsa336>()
    }
}

/// The RSA cryptosystem at some prime size. Sealed trait to avoid experiments.
pub trait Rsa: sealed::Rsa {
    const PRIME_DIGITS: usize;
}

mod sealed {
    pub trait Rsa {}
    impl Rsa for super::Rsa112 {}
    impl Rsa for super::Rsa336 {}
}

/// Primes of 4 digits, i.e. at most 56 bits each. For tests and demos.
pub struct Rsa112;
impl Rsa for Rsa112 {
    const PRIME_DIGITS: usize = 4;
}

/// Primes of 12 digits, i.e. about 50 decimal places each.
pub struct Rsa336;
impl Rsa for Rsa336 {
    const PRIME_DIGITS: usize = 12;
}

/// RSA public key $(e, n)$.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    pub(crate) e: BigInt,
    pub(crate) n: BigInt,
}

impl PublicKey {
    pub fn new(e: BigInt, n: BigInt) -> Result<Self> {
        if e.is_zero() {
            return Err(Error::MalformedKey("exponent is zero"));
        }
        if n.is_zero() {
            return Err(Error::MalformedKey("modulus is zero"));
        }
        Ok(PublicKey { e, n })
    }

    pub fn exponent(&self) -> &BigInt {
        &self.e
    }

    pub fn modulus(&self) -> &BigInt {
        &self.n
    }
}

/// RSA private key $(d, n)$.
///
/// The exponent is wiped on drop.
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKey {
    pub(crate) d: BigInt,
    pub(crate) n: BigInt,
}

impl PrivateKey {
    pub fn new(d: BigInt, n: BigInt) -> Result<Self> {
        if d.is_zero() {
            return Err(Error::MalformedKey("exponent is zero"));
        }
        if n.is_zero() {
            return Err(Error::MalformedKey("modulus is zero"));
        }
        Ok(PrivateKey { d, n })
    }

    pub fn exponent(&self) -> &BigInt {
        &self.d
    }

    pub fn modulus(&self) -> &BigInt {
        &self.n
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

/// Both halves of a key, plus the primes they came from.
///
/// The primes and $d$ are wiped on drop.
pub struct KeyPair {
    p: BigInt,
    q: BigInt,
    n: BigInt,
    e: BigInt,
    d: BigInt,
}

impl KeyPair {
    /// Draw two distinct primes from `rng` and derive the key from them.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R, config: &Config) -> Result<Self> {
        let prime = |rng: &mut R| {
            random_prime(rng, config.prime_digits, config.witnesses, config.max_candidates)
        };

        let p = prime(&mut *rng).during(Step::PrimeP)?;
        let mut q = prime(&mut *rng).during(Step::PrimeQ)?;
        while q == p {
            debug!("p and q collided, drawing q again");
            q = prime(&mut *rng).during(Step::PrimeQ)?;
        }

        Self::from_primes_with(p.into_inner(), q.into_inner(), config.first_public_exponent)
    }

    /// [`generate`](Self::generate) with the default [`Config`], from a seeded generator.
    pub fn generate_seeded(seed: u64) -> Result<Self> {
        Self::generate(&mut seeded(seed), &Config::default())
    }

    /// Derive the key from given primes, searching $e$ from 15 upwards.
    ///
    /// The primes are trusted, not tested.
    pub fn from_primes(p: BigInt, q: BigInt) -> Result<Self> {
        Self::from_primes_with(p, q, Config::default().first_public_exponent)
    }

    pub fn from_primes_with(p: BigInt, q: BigInt, first_public_exponent: u32) -> Result<Self> {
        if p == q {
            return Err(Error::EqualPrimes);
        }

        let n = p.product(&q).during(Step::Modulus)?;
        let totient = totient(&p, &q).during(Step::Totient)?;
        let e = public_exponent(&totient, first_public_exponent).during(Step::PublicExponent)?;
        let d = private_exponent(&totient, &e).during(Step::PrivateExponent)?;

        debug!(n_digits = n.len(), e = %e, "derived key pair");
        Ok(KeyPair { p, q, n, e, d })
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        Ok(PublicKey { e: self.e.try_clone()?, n: self.n.try_clone()? })
    }

    pub fn private_key(&self) -> Result<PrivateKey> {
        Ok(PrivateKey { d: self.d.try_clone()?, n: self.n.try_clone()? })
    }

    /// Both halves, dropping (and wiping) the primes.
    pub fn into_keys(self) -> Result<(PublicKey, PrivateKey)> {
        Ok((self.public_key()?, self.private_key()?))
    }

    pub fn modulus(&self) -> &BigInt {
        &self.n
    }

    pub fn public_exponent(&self) -> &BigInt {
        &self.e
    }

    pub fn private_exponent(&self) -> &BigInt {
        &self.d
    }

    /// Digits per plaintext block, one fewer than the modulus has.
    pub fn block_digits(&self) -> usize {
        self.n.len().saturating_sub(1)
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.d.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

/// Generate a key pair with the default [`Config`] from a seeded
/// (reproducible, not secure) generator.
pub fn generate_key_pair(seed: u64) -> Result<(PublicKey, PrivateKey)> {
    KeyPair::generate_seeded(seed)?.into_keys()
}

/// $(p - 1)(q - 1)$
fn totient(p: &BigInt, q: &BigInt) -> Result<BigInt> {
    let mut p_minus_one = p.try_clone()?;
    p_minus_one.increment(-1)?;
    let mut q_minus_one = q.try_clone()?;
    q_minus_one.increment(-1)?;
    let product = p_minus_one.product(&q_minus_one);
    p_minus_one.zeroize();
    q_minus_one.zeroize();
    product
}

/// The first odd value from `first` on that is coprime to the totient.
fn public_exponent(totient: &BigInt, first: u32) -> Result<BigInt> {
    // nothing is coprime to zero, e.g. for p = 1
    if totient.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let mut e = BigInt::from_u64(first as u64 | 1)?;
    while !is_coprime(totient, &e)? {
        e.increment(2)?;
    }
    Ok(e)
}

/// $d = (k\varphi + 1) / e$ for the least $k \geq 1$ making this exact.
fn private_exponent(totient: &BigInt, e: &BigInt) -> Result<BigInt> {
    let mut k = BigInt::zero();
    let mut candidate = BigInt::zero();
    let mut remainder = BigInt::zero();
    loop {
        k.increment(1)?;
        multiply(&mut candidate, &k, totient)?;
        candidate.increment(1)?;
        modulo(&mut remainder, &candidate, e)?;
        if remainder.is_zero() {
            break;
        }
    }
    debug!(k = %k, "found private exponent multiplier");

    let mut d = BigInt::zero();
    divide_in_place(&mut d, &mut candidate, e)?;
    candidate.zeroize();
    Ok(d)
}
