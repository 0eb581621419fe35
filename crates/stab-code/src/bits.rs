use std::fmt;

use stab_core::{CodeError, ErrorInfo};

const WORD_BITS: usize = 64;

/// Fixed-length vector over GF(2) packed into 64-bit words.
///
/// Bits past `len` in the last word are always zero, so word-wise equality and
/// ordering agree with bit-wise equality and ordering.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitVector {
    len: usize,
    words: Vec<u64>,
}

impl BitVector {
    /// Creates an all-zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            len,
            words: vec![0u64; len.div_ceil(WORD_BITS)],
        }
    }

    /// Creates a vector from a slice of booleans.
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut vector = Self::zeros(bits.len());
        for (idx, &bit) in bits.iter().enumerate() {
            if bit {
                vector.set(idx, true);
            }
        }
        vector
    }

    /// Creates a vector of length `len` with the listed positions set.
    pub fn from_indices(len: usize, indices: &[usize]) -> Result<Self, CodeError> {
        let mut vector = Self::zeros(len);
        for &idx in indices {
            if idx >= len {
                let info = ErrorInfo::new("bit-index-out-of-range", "bit index exceeds vector length")
                    .with_context("index", idx.to_string())
                    .with_context("len", len.to_string());
                return Err(CodeError::DimensionMismatch(info));
            }
            vector.set(idx, true);
        }
        Ok(vector)
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the vector has no bits at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads bit `idx`. Panics when out of range.
    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < self.len, "bit index {idx} out of range {}", self.len);
        (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1
    }

    /// Writes bit `idx`. Panics when out of range.
    pub fn set(&mut self, idx: usize, value: bool) {
        assert!(idx < self.len, "bit index {idx} out of range {}", self.len);
        let mask = 1u64 << (idx % WORD_BITS);
        if value {
            self.words[idx / WORD_BITS] |= mask;
        } else {
            self.words[idx / WORD_BITS] &= !mask;
        }
    }

    /// Returns true when every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns the position of the lowest set bit.
    pub fn first_one(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|&(_, &word)| word != 0)
            .map(|(bucket, word)| bucket * WORD_BITS + word.trailing_zeros() as usize)
    }

    /// Iterates over the positions of set bits in increasing order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(bucket, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let offset = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(bucket * WORD_BITS + offset)
            })
        })
    }

    /// Adds `other` into `self` (bitwise XOR). Panics on unequal lengths.
    pub fn xor_assign(&mut self, other: &BitVector) {
        assert_eq!(self.len, other.len, "xor of bit vectors with unequal lengths");
        for (lhs, rhs) in self.words.iter_mut().zip(&other.words) {
            *lhs ^= rhs;
        }
    }

    /// Returns the GF(2) dot product (parity of the bitwise AND). Panics on unequal lengths.
    pub fn dot(&self, other: &BitVector) -> bool {
        assert_eq!(self.len, other.len, "dot product of bit vectors with unequal lengths");
        let ones: u32 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(lhs, rhs)| (lhs & rhs).count_ones())
            .sum();
        ones % 2 == 1
    }

    /// Concatenates two vectors as `[head | tail]`.
    pub fn concat(head: &BitVector, tail: &BitVector) -> Self {
        let mut out = Self::zeros(head.len + tail.len);
        for idx in head.ones() {
            out.set(idx, true);
        }
        for idx in tail.ones() {
            out.set(head.len + idx, true);
        }
        out
    }

    /// Copies the bits in `start..end` into a new vector.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        assert!(start <= end && end <= self.len, "invalid slice {start}..{end}");
        let mut out = Self::zeros(end - start);
        for idx in self.ones().skip_while(|&idx| idx < start) {
            if idx >= end {
                break;
            }
            out.set(idx - start, true);
        }
        out
    }

    /// Returns the vector extended by one trailing bit.
    pub fn with_trailing(&self, bit: bool) -> Self {
        let mut out = Self::zeros(self.len + 1);
        for idx in self.ones() {
            out.set(idx, true);
        }
        out.set(self.len, bit);
        out
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector(")?;
        for idx in 0..self.len {
            write!(f, "{}", if self.get(idx) { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}
