//! Seeded randomness for generator re-presentations.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Seeded random source used when rewriting a generator presentation.
///
/// Substream seeds hash `(master_seed, substream)` with SipHash-1-3 under
/// zero keys, so a seed reproduces the same sequence on every platform.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    inner: StdRng,
}

impl RngHandle {
    /// Creates a handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle for substream `substream` of `master_seed`.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Returns the seed the handle was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws an index in `0..bound`. Panics when `bound` is zero.
    pub fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "cannot draw an index from an empty range");
        (self.inner.next_u64() % bound as u64) as usize
    }

    /// Draws an ordered pair of distinct indices in `0..bound`. Panics when `bound < 2`.
    pub fn distinct_pair(&mut self, bound: usize) -> (usize, usize) {
        assert!(bound >= 2, "distinct pair needs at least two indices, got {bound}");
        let first = self.index(bound);
        let offset = 1 + self.index(bound - 1);
        (first, (first + offset) % bound)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Derives the seed of substream `substream` from `master_seed`.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    for word in [master_seed, substream] {
        hasher.write_u64(word);
    }
    hasher.finish()
}
