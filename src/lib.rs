#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! Textbook RSA on a small multiple precision kernel.
//!
//! Integers are [`BigInt`]s: little-endian digits in radix $R = 2^{14}$,
//! chosen so that two 7-bit bytes pack into exactly one digit. On top of the
//! kernel ([`arithmetic`]) sit [`number_theory`] (coprimality, Jacobi symbol,
//! modular exponentiation), Solovay–Strassen [`prime`] search, [`KeyPair`]
//! generation and the block [`codec`].
//!
//! ```
//! let (public, private) = rsa_radix::KeyPair::generate(
//!     &mut rsa_radix::seeded(7),
//!     &rsa_radix::Config::of::<rsa_radix::Rsa112>(),
//! )?.into_keys()?;
//!
//! let ciphertext = public.encrypt(b"yamnord")?;
//! assert_eq!(private.decrypt(&ciphertext)?, b"yamnord");
//! # Ok::<(), rsa_radix::Error>(())
//! ```
//!
//! None of this is constant time and there is no padding. [`seeded`]
//! generators are reproducible, not secure.

extern crate alloc;

mod digit;
pub use digit::{Digit, Digits, DIGIT_BITS, RADIX};
mod error;
pub use error::{Error, Result, Step};
mod numbers;
pub use numbers::BigInt;

pub mod arithmetic;
pub use arithmetic::Odd;
pub mod number_theory;
pub mod random;
pub use random::seeded;
pub mod prime;
pub use prime::Prime;

mod key;
pub use key::{generate_key_pair, Config, KeyPair, PrivateKey, PublicKey, Rsa, Rsa112, Rsa336};
pub mod codec;
pub mod text;

#[cfg(test)]
mod fixtures;
