//! Test helpers.

use rand_core::{impls, Error, RngCore};

/// Not a random number generator: yields `start, start + 1, ...`, or
/// the same value forever when built with [`stuck`](CountingRng::stuck).
pub struct CountingRng(pub u32);

impl CountingRng {
    pub fn stuck(value: u32) -> Stuck {
        Stuck(value)
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.0;
        self.0 = self.0.wrapping_add(1);
        value
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub struct Stuck(u32);

impl Stuck {
    /// Zeros for the first `draws` words, then whatever `inner` yields.
    pub fn zeros_then<R: RngCore>(draws: usize, inner: R) -> ZerosThen<R> {
        ZerosThen { left: draws, inner }
    }
}

impl RngCore for Stuck {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub struct ZerosThen<R> {
    left: usize,
    inner: R,
}

impl<R: RngCore> RngCore for ZerosThen<R> {
    fn next_u32(&mut self) -> u32 {
        if self.left > 0 {
            self.left -= 1;
            0
        } else {
            self.inner.next_u32()
        }
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
