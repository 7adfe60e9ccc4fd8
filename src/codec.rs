//! Byte blocks to big integers and back, and the block pipeline.
//!
//! Two 7-bit bytes fit one digit exactly, as `low + 128 * high`. A plaintext
//! block uses one digit fewer than the modulus, so its value is below $n$.
//! A ciphertext block uses the full width of the modulus:
//!
//! ```text
//! plain block:   2 * (len(n) - 1) bytes
//! cipher block:  2 * len(n) bytes
//! ```
//!
//! Ciphertext is the concatenation of fixed-width blocks, without delimiters
//! or a length prefix. The last plaintext block may be short; its packing
//! zeros come back as trailing zero bytes on decryption.

use alloc::vec::Vec;

use tracing::debug;

use crate::digit::{Digit, RADIX};
use crate::error::Context;
use crate::number_theory::mod_exp;
use crate::{BigInt, Error, PrivateKey, PublicKey, Result, Step};

/// Bytes are 7-bit, i.e. below this.
pub const MAX_CHAR: u8 = 128;

/// Block widths derived from a modulus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockLayout {
    /// Digits per plaintext block.
    pub block_digits: usize,
    pub plain_block_bytes: usize,
    pub cipher_block_bytes: usize,
}

impl BlockLayout {
    pub fn for_modulus(n: &BigInt) -> Result<Self> {
        if n.len() < 2 {
            return Err(Error::ModulusTooSmall);
        }
        let block_digits = n.len() - 1;
        Ok(BlockLayout {
            block_digits,
            plain_block_bytes: 2 * block_digits,
            cipher_block_bytes: 2 * n.len(),
        })
    }

    /// Ciphertext length for a plaintext of `len` bytes.
    pub fn ciphertext_len(&self, len: usize) -> usize {
        let blocks = (len + self.plain_block_bytes - 1) / self.plain_block_bytes;
        blocks * self.cipher_block_bytes
    }
}

/// Pack bytes two to a digit, the first of each pair low.
///
/// An odd trailing byte gets a zero high half. `offset` is where `bytes`
/// start in the whole message, for error reporting.
pub fn pack_block(bytes: &[u8], offset: usize) -> Result<BigInt> {
    if let Some(i) = bytes.iter().position(|&byte| byte >= MAX_CHAR) {
        return Err(Error::NonAsciiPlaintext { offset: offset + i, byte: bytes[i] });
    }

    let mut n = BigInt::with_capacity((bytes.len() + 1) / 2)?;
    for (slot, pair) in n.slots_mut().iter_mut().zip(bytes.chunks(2)) {
        let low = pair[0] as Digit;
        let high = pair.get(1).copied().unwrap_or(0) as Digit;
        *slot = low + MAX_CHAR as Digit * high;
    }
    n.normalize();
    Ok(n)
}

/// Append `2 * digits` bytes, zero-extending above the significant digits.
pub fn unpack_block(n: &BigInt, digits: usize, out: &mut Vec<u8>) -> Result<()> {
    if n.len() > digits {
        return Err(Error::BlockTooLarge);
    }
    out.try_reserve(2 * digits)?;
    for i in 0..digits {
        let digit = n.digit(i);
        debug_assert!(digit < RADIX);
        out.push((digit % MAX_CHAR as Digit) as u8);
        out.push((digit / MAX_CHAR as Digit) as u8);
    }
    Ok(())
}

impl PublicKey {
    pub fn layout(&self) -> Result<BlockLayout> {
        BlockLayout::for_modulus(&self.n)
    }

    /// $m^e \bmod n$, for $m < n$.
    pub fn encrypt_block(&self, m: &BigInt) -> Result<BigInt> {
        if *m >= self.n {
            return Err(Error::BlockTooLarge);
        }
        mod_exp(m, &self.e, &self.n)
    }

    /// Encrypt 7-bit bytes block by block.
    ///
    /// Empty input gives empty output. Any failing block fails the whole message.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let layout = self.layout()?;
        let mut ciphertext = Vec::new();
        ciphertext.try_reserve_exact(layout.ciphertext_len(plaintext.len()))?;

        for (i, chunk) in plaintext.chunks(layout.plain_block_bytes).enumerate() {
            self.encrypt_chunk(chunk, i * layout.plain_block_bytes, &layout, &mut ciphertext)
                .during(Step::EncryptBlock(i))?;
        }

        let blocks = ciphertext.len() / layout.cipher_block_bytes;
        debug!(bytes = plaintext.len(), blocks, "encrypted");
        Ok(ciphertext)
    }

    fn encrypt_chunk(&self, chunk: &[u8], offset: usize, layout: &BlockLayout, out: &mut Vec<u8>) -> Result<()> {
        let m = pack_block(chunk, offset)?;
        let c = self.encrypt_block(&m)?;
        unpack_block(&c, layout.block_digits + 1, out)
    }
}

impl PrivateKey {
    pub fn layout(&self) -> Result<BlockLayout> {
        BlockLayout::for_modulus(&self.n)
    }

    /// $c^d \bmod n$, for $c < n$.
    pub fn decrypt_block(&self, c: &BigInt) -> Result<BigInt> {
        if *c >= self.n {
            return Err(Error::BlockTooLarge);
        }
        mod_exp(c, &self.d, &self.n)
    }

    /// Decrypt, dropping the trailing zero bytes of the last block.
    ///
    /// Those are packing zeros, unless the plaintext itself ended in zero
    /// bytes; use [`decrypt_exact`](Self::decrypt_exact) when the length is known.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let layout = self.layout()?;
        let mut plaintext = self.decrypt_blocks(ciphertext, &layout)?;
        let last_block = plaintext.len().saturating_sub(layout.plain_block_bytes);
        while plaintext.len() > last_block && plaintext.last() == Some(&0) {
            plaintext.pop();
        }
        Ok(plaintext)
    }

    /// Decrypt a message known to be `len` bytes long.
    pub fn decrypt_exact(&self, ciphertext: &[u8], len: usize) -> Result<Vec<u8>> {
        let layout = self.layout()?;
        let mut plaintext = self.decrypt_blocks(ciphertext, &layout)?;
        if len > plaintext.len() || layout.ciphertext_len(len) != ciphertext.len() {
            return Err(Error::MalformedCiphertext("length does not match the block count"));
        }
        plaintext.truncate(len);
        Ok(plaintext)
    }

    fn decrypt_blocks(&self, ciphertext: &[u8], layout: &BlockLayout) -> Result<Vec<u8>> {
        if ciphertext.len() % layout.cipher_block_bytes != 0 {
            return Err(Error::MalformedCiphertext("length is not a multiple of the block width"));
        }
        let blocks = ciphertext.len() / layout.cipher_block_bytes;
        let mut plaintext = Vec::new();
        plaintext.try_reserve_exact(blocks * layout.plain_block_bytes)?;

        for (i, chunk) in ciphertext.chunks(layout.cipher_block_bytes).enumerate() {
            self.decrypt_chunk(chunk, layout, &mut plaintext)
                .during(Step::DecryptBlock(i))?;
        }

        debug!(bytes = ciphertext.len(), blocks, "decrypted");
        Ok(plaintext)
    }

    fn decrypt_chunk(&self, chunk: &[u8], layout: &BlockLayout, out: &mut Vec<u8>) -> Result<()> {
        if chunk.iter().any(|&byte| byte >= MAX_CHAR) {
            return Err(Error::MalformedCiphertext("byte exceeds 7 bits"));
        }
        let c = pack_block(chunk, 0)?;
        let m = self.decrypt_block(&c)?;
        unpack_block(&m, layout.block_digits, out)
    }
}
