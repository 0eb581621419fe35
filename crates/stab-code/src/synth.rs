//! Logical operator synthesis, staged as rank → centralizer → quotient → pairing.
//!
//! Each stage is exposed on its own so its invariant can be checked in
//! isolation: the centralizer has dimension `2n - r`, the quotient basis has
//! exactly `2k` vectors, and the pairing yields `k` symplectic pairs.

use serde::{Deserialize, Serialize};
use stab_core::{CodeError, ErrorInfo};

use crate::config::SynthesisOptions;
use crate::gf2::{self, BitMatrix, Echelon};
use crate::group::StabilizerGroup;
use crate::pauli::PauliWord;
use crate::symplectic::{self, SymplecticVector};

/// One encoded qubit's logical X̄ and Z̄ operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalPair {
    /// Position of the pair within the logical basis.
    pub index: usize,
    /// Logical X̄ operator.
    pub x: PauliWord,
    /// Logical Z̄ operator.
    pub z: PauliWord,
}

/// Returns a basis of every Pauli operator commuting with all generators.
///
/// Computed as the null space of `S · J`, where row `[x | z]` of `S` becomes
/// `[z | x]`. The basis has `2n - rank` vectors and spans the stabilizer
/// group itself.
pub fn centralizer(group: &StabilizerGroup) -> Result<Vec<SymplecticVector>, CodeError> {
    let n = group.num_qubits();
    let rows = group
        .generators()
        .iter()
        .map(|generator| generator.symplectic().swapped())
        .collect();
    let swapped = BitMatrix::from_validated_rows(2 * n, rows);
    gf2::null_space(&swapped)
        .into_iter()
        .map(SymplecticVector::from_bits)
        .collect()
}

/// Reduces centralizer vectors modulo the stabilizer span.
///
/// Walks the centralizer basis in order, keeping each vector that is
/// independent of the stabilizers and of the vectors kept so far, and returns
/// its canonical representative reduced against `stabilizers`. The result has
/// exactly `2k` vectors for a consistent group.
pub fn quotient_basis(
    stabilizers: &Echelon,
    centralizer: &[SymplecticVector],
) -> Result<Vec<SymplecticVector>, CodeError> {
    let mut span = stabilizers.clone();
    let mut quotient = Vec::new();
    for vector in centralizer {
        if span.insert(vector.bits())? {
            let representative = stabilizers.reduce(vector.bits())?;
            quotient.push(SymplecticVector::from_bits(representative)?);
        }
    }
    Ok(quotient)
}

/// Synthesizes `k = n - rank` logical pairs for a validated group.
///
/// Fails with `DegenerateCode` when `k = 0` unless `allow_trivial` is set, in
/// which case the basis is empty. A quotient of the wrong size or a pairing
/// that stops short is `InsufficientLogicalSpace`; it is never downgraded to a
/// smaller basis.
pub fn synthesize(
    group: &StabilizerGroup,
    options: &SynthesisOptions,
) -> Result<Vec<LogicalPair>, CodeError> {
    let k = group.logical_dimension_with(options)?;
    if k == 0 {
        return Ok(Vec::new());
    }
    let stabilizers = group.echelon();
    let centralizer = centralizer(group)?;
    let expected_centralizer = 2 * group.num_qubits() - stabilizers.rank();
    if centralizer.len() != expected_centralizer {
        return Err(insufficient(
            "centralizer-dimension",
            "centralizer",
            expected_centralizer,
            centralizer.len(),
        ));
    }
    let quotient = quotient_basis(&stabilizers, &centralizer)?;
    if quotient.len() != 2 * k {
        return Err(insufficient(
            "quotient-dimension",
            "quotient basis",
            2 * k,
            quotient.len(),
        ));
    }
    let pairs = symplectic::symplectic_gram_schmidt(quotient, &stabilizers, k)?;
    Ok(pairs
        .into_iter()
        .enumerate()
        .map(|(index, (x, z))| LogicalPair {
            index,
            x: x.to_word(),
            z: z.to_word(),
        })
        .collect())
}

fn insufficient(code: &str, what: &str, expected: usize, found: usize) -> CodeError {
    let info = ErrorInfo::new(code, format!("{what} has unexpected dimension"))
        .with_context("expected", expected.to_string())
        .with_context("found", found.to_string());
    CodeError::InsufficientLogicalSpace(info)
}

/// Returns true when two logical bases span the same space modulo stabilizers.
///
/// Representatives may differ by stabilizers and by symplectic changes of
/// basis; only the generated subspace is compared.
pub fn equivalent_logical_bases(
    group: &StabilizerGroup,
    a: &[LogicalPair],
    b: &[LogicalPair],
) -> Result<bool, CodeError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    let span_a = extended_span(group, a)?;
    let span_b = extended_span(group, b)?;
    if span_a.rank() != span_b.rank() {
        return Ok(false);
    }
    for row in span_b.rows() {
        if !span_a.contains(row)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns true when each pair of `b` equals the matching pair of `a` up to stabilizers.
///
/// Stricter than [`equivalent_logical_bases`]: relabeling pairs or swapping
/// X̄ and Z̄ changes the cosets even though the span is unchanged.
pub fn same_logical_cosets(
    group: &StabilizerGroup,
    a: &[LogicalPair],
    b: &[LogicalPair],
) -> Result<bool, CodeError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (lhs, rhs) in a.iter().zip(b) {
        for (first, second) in [(&lhs.x, &rhs.x), (&lhs.z, &rhs.z)] {
            group.check_operator(first)?;
            if !group.contains(&first.multiply(second)?)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn extended_span(group: &StabilizerGroup, pairs: &[LogicalPair]) -> Result<Echelon, CodeError> {
    let mut span = group.echelon();
    for pair in pairs {
        group.check_operator(&pair.x)?;
        group.check_operator(&pair.z)?;
        span.insert(pair.x.symplectic().bits())?;
        span.insert(pair.z.symplectic().bits())?;
    }
    Ok(span)
}
