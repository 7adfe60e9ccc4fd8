//! Key file text format.
//!
//! An integer is its digits, most significant first, each as five decimal
//! places, joined by dashes and ended by a newline:
//!
//! ```text
//! 00007-00042
//! ```
//!
//! A key is two such lines, the exponent ($e$ or $d$) then the modulus $n$.
//! Reading and writing files is left to the caller.

use alloc::string::String;

use crate::digit::{Digit, DECIMAL_PLACES, RADIX};
use crate::{BigInt, Error, PrivateKey, PublicKey, Result};

/// The integer as one line of text, newline included.
///
/// Unlike the rest of the crate, this allocates infallibly: running out of
/// memory here aborts.
pub fn serialize(n: &BigInt) -> String {
    alloc::format!("{}\n", n)
}

/// Inverse of [`serialize`]. The newline is optional, leading zero groups are allowed.
pub fn deserialize(text: &str) -> Result<BigInt> {
    parse(text)
}

pub(crate) fn parse(text: &str) -> Result<BigInt> {
    let line = text.strip_suffix('\n').unwrap_or(text);
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Err(Error::MalformedInteger("empty"));
    }

    let groups = line.split('-').count();
    let mut n = BigInt::with_capacity(groups)?;
    for (i, group) in line.split('-').enumerate() {
        let digit = parse_group(group)?;
        n.slots_mut()[groups - 1 - i] = digit;
    }
    n.normalize();
    Ok(n)
}

fn parse_group(group: &str) -> Result<Digit> {
    if group.len() != DECIMAL_PLACES || !group.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::MalformedInteger("group is not five decimal places"));
    }
    let digit = group.bytes().fold(0, |acc, byte| 10 * acc + (byte - b'0') as Digit);
    if digit >= RADIX {
        return Err(Error::MalformedInteger("group exceeds radix"));
    }
    Ok(digit)
}

/// Exactly two integer lines; a final newline is optional.
fn parse_key(text: &str) -> Result<(BigInt, BigInt)> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut lines = text.split('\n');
    let (exponent, modulus) = match (lines.next(), lines.next(), lines.next()) {
        (Some(exponent), Some(modulus), None) => (exponent, modulus),
        _ => return Err(Error::MalformedKey("expected two lines")),
    };
    Ok((parse(exponent)?, parse(modulus)?))
}

impl BigInt {
    pub fn to_text(&self) -> String {
        serialize(self)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        parse(text)
    }
}

impl PublicKey {
    /// $e$ then $n$, one line each.
    pub fn to_text(&self) -> String {
        let mut text = serialize(&self.e);
        text.push_str(&serialize(&self.n));
        text
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let (e, n) = parse_key(text)?;
        PublicKey::new(e, n)
    }
}

impl PrivateKey {
    /// $d$ then $n$, one line each.
    pub fn to_text(&self) -> String {
        let mut text = serialize(&self.d);
        text.push_str(&serialize(&self.n));
        text
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let (d, n) = parse_key(text)?;
        PrivateKey::new(d, n)
    }
}
