//! Coprimality, the Jacobi symbol and modular exponentiation.

use alloc::vec::Vec;

use crate::arithmetic::{divide_in_place, div_rem_assign_digit, modulo, multiply};
use crate::digit::DIGIT_BITS;
use crate::{BigInt, Error, Odd, Result};

/// Whether $\gcd(a, b) = 1$, by Euclid's algorithm.
///
/// Note $\gcd(a, 0) = a$, so `(1, 0)` is coprime while `(0, 0)` is not.
pub fn is_coprime(a: &BigInt, b: &BigInt) -> Result<bool> {
    let mut w0 = a.try_clone()?;
    let mut w1 = b.try_clone()?;
    let mut quotient = BigInt::zero();

    while !w1.is_zero() && !w1.is_one() {
        // w0 becomes w0 mod w1
        divide_in_place(&mut quotient, &mut w0, &w1)?;
        core::mem::swap(&mut w0, &mut w1);
    }

    Ok(w1.is_one() || w0.is_one())
}

/// The Jacobi symbol $(a / n)$, one of -1, 0 or 1.
///
/// Strips factors of two from `a` using $(2/n) = (-1)^{(n^2-1)/8}$,
/// then flips to $(n \bmod a / a)$ by quadratic reciprocity.
/// For `n = 1` the symbol is 1, whatever `a` is.
pub fn jacobi(a: &BigInt, n: &Odd) -> Result<i8> {
    jacobi_owned(a.try_clone()?, n.try_clone()?)
}

fn jacobi_owned(mut a: BigInt, n: BigInt) -> Result<i8> {
    if n.is_one() {
        return Ok(1);
    }

    // the radix is a multiple of 8, so residues mod 8 sit in the lowest digit
    let n_mod_8 = n.digit(0) % 8;
    let mut sign = 1;
    while !a.is_zero() && a.is_even() {
        div_rem_assign_digit(&mut a, 2);
        if n_mod_8 == 3 || n_mod_8 == 5 {
            sign = -sign;
        }
    }

    if a.is_zero() {
        return Ok(0);
    }
    if a.is_one() {
        return Ok(sign);
    }

    if a.digit(0) % 4 == 3 && n_mod_8 % 4 == 3 {
        sign = -sign;
    }
    let reduced = n.reduce(&a)?;
    Ok(sign * jacobi_owned(reduced, a)?)
}

/// $base^{exponent} \bmod modulus$, by left-to-right square-and-multiply.
///
/// The exponent's bits are peeled off by repeated halving, then consumed
/// from the most significant end. Every intermediate product is reduced,
/// so no value exceeds twice the modulus length.
pub fn mod_exp(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    if modulus.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let mut bits: Vec<bool> = Vec::new();
    bits.try_reserve_exact(exponent.len() * DIGIT_BITS as usize)?;
    let mut rest = exponent.try_clone()?;
    while !rest.is_zero() {
        bits.push(div_rem_assign_digit(&mut rest, 2) == 1);
    }

    let base = base.reduce(modulus)?;
    // 1 mod 1 is 0
    let mut acc = BigInt::from_u64(1)?.reduce(modulus)?;
    let mut scratch = BigInt::with_capacity(2 * modulus.len())?;

    for &bit in bits.iter().rev() {
        multiply(&mut scratch, &acc, &acc)?;
        modulo(&mut acc, &scratch, modulus)?;
        if bit {
            multiply(&mut scratch, &acc, &base)?;
            modulo(&mut acc, &scratch, modulus)?;
        }
    }

    Ok(acc)
}
