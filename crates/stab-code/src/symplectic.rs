//! Symplectic vector space of Pauli operators.
//!
//! A word on `n` qubits is the length-`2n` vector `[x | z]`; two words commute
//! exactly when their symplectic inner product vanishes.

use stab_core::{CodeError, ErrorInfo};

use crate::bits::BitVector;
use crate::gf2::Echelon;
use crate::pauli::PauliWord;

/// Length-`2n` vector `[x | z]` representing a Pauli operator up to phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymplecticVector {
    num_qubits: usize,
    bits: BitVector,
}

impl SymplecticVector {
    /// Concatenates x and z rows of equal length.
    pub fn from_parts(x: &BitVector, z: &BitVector) -> Self {
        assert_eq!(x.len(), z.len(), "x and z rows of unequal length");
        Self {
            num_qubits: x.len(),
            bits: BitVector::concat(x, z),
        }
    }

    /// Wraps a raw length-`2n` bit vector.
    pub fn from_bits(bits: BitVector) -> Result<Self, CodeError> {
        if bits.len() % 2 != 0 {
            let info = ErrorInfo::new("odd-symplectic-length", "symplectic vectors have even length")
                .with_context("len", bits.len().to_string());
            return Err(CodeError::DimensionMismatch(info));
        }
        Ok(Self {
            num_qubits: bits.len() / 2,
            bits,
        })
    }

    /// Returns `n`, half the vector length.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns the concatenated bits.
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// Returns the x half.
    pub fn x_part(&self) -> BitVector {
        self.bits.slice(0, self.num_qubits)
    }

    /// Returns the z half.
    pub fn z_part(&self) -> BitVector {
        self.bits.slice(self.num_qubits, 2 * self.num_qubits)
    }

    /// Returns true for the identity operator.
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// Adds `other` in place (operator product up to phase).
    pub fn add_assign(&mut self, other: &SymplecticVector) {
        self.bits.xor_assign(&other.bits);
    }

    /// Returns the image under `J`, which swaps the x and z halves.
    pub fn swapped(&self) -> BitVector {
        BitVector::concat(&self.z_part(), &self.x_part())
    }

    /// Converts the vector back to a Pauli word.
    pub fn to_word(&self) -> PauliWord {
        PauliWord::from_symplectic(self)
    }
}

/// Computes `(a.x · b.z + a.z · b.x) mod 2`.
///
/// `false` means the operators commute, `true` that they anticommute. Vectors
/// on different qubit counts are a [`CodeError::DimensionMismatch`].
pub fn inner_product(a: &SymplecticVector, b: &SymplecticVector) -> Result<bool, CodeError> {
    if a.num_qubits != b.num_qubits {
        return Err(CodeError::dimension_mismatch(
            "symplectic inner product",
            a.num_qubits,
            b.num_qubits,
        ));
    }
    Ok(parity(a, b))
}

/// Symplectic inner product evaluated directly on the x/z rows of two words.
pub fn word_inner_product(a: &PauliWord, b: &PauliWord) -> Result<bool, CodeError> {
    if a.num_qubits() != b.num_qubits() {
        return Err(CodeError::dimension_mismatch(
            "symplectic inner product",
            a.num_qubits(),
            b.num_qubits(),
        ));
    }
    Ok(word_parity(a, b))
}

pub(crate) fn word_parity(a: &PauliWord, b: &PauliWord) -> bool {
    a.x_bits().dot(b.z_bits()) ^ a.z_bits().dot(b.x_bits())
}

// Both vectors must have the same length.
fn parity(a: &SymplecticVector, b: &SymplecticVector) -> bool {
    let n = a.num_qubits;
    let mut parity = false;
    for idx in a.bits.ones() {
        let partner = if idx < n { idx + n } else { idx - n };
        parity ^= b.bits.get(partner);
    }
    parity
}

/// Greedy symplectic Gram-Schmidt over candidates outside the forbidden span.
///
/// The first remaining candidate `v` is paired with the first later candidate
/// `w` satisfying `⟨v, w⟩ = 1`. Every other candidate `c` is then replaced by
/// `c + ⟨c, w⟩·v + ⟨c, v⟩·w`, which makes it commute with both halves of the
/// emitted pair, and reduced against `forbidden`; candidates that vanish are
/// dropped. A `v` without any partner is discarded. Exactly `k` pairs are
/// returned, or [`CodeError::InsufficientLogicalSpace`] when the candidates run
/// out first.
pub fn symplectic_gram_schmidt(
    candidates: Vec<SymplecticVector>,
    forbidden: &Echelon,
    k: usize,
) -> Result<Vec<(SymplecticVector, SymplecticVector)>, CodeError> {
    let mut pool = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let reduced = forbidden.reduce(candidate.bits())?;
        pool.push(SymplecticVector::from_bits(reduced)?);
    }

    let mut pairs = Vec::with_capacity(k);
    let mut discarded = 0usize;
    while pairs.len() < k {
        pool.retain(|candidate| !candidate.is_zero());
        if pool.is_empty() {
            let info = ErrorInfo::new(
                "pairing-exhausted",
                "ran out of candidates before forming every logical pair",
            )
            .with_context("requested_pairs", k.to_string())
            .with_context("formed_pairs", pairs.len().to_string())
            .with_context("unpaired_candidates", discarded.to_string())
            .with_hint("the stabilizer rank and logical dimension are inconsistent");
            return Err(CodeError::InsufficientLogicalSpace(info));
        }
        let v = pool.remove(0);
        let Some(position) = pool.iter().position(|candidate| parity(&v, candidate)) else {
            discarded += 1;
            continue;
        };
        let w = pool.remove(position);
        for candidate in &mut pool {
            let with_v = parity(candidate, &v);
            let with_w = parity(candidate, &w);
            if with_w {
                candidate.add_assign(&v);
            }
            if with_v {
                candidate.add_assign(&w);
            }
            let reduced = forbidden.reduce(candidate.bits())?;
            *candidate = SymplecticVector::from_bits(reduced)?;
        }
        pairs.push((v, w));
    }
    Ok(pairs)
}
