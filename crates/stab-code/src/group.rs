use std::fmt;

use stab_core::{CodeError, ErrorInfo, RngHandle};

use crate::config::SynthesisOptions;
use crate::css::CssMatrices;
use crate::gf2::{self, BitMatrix, Echelon};
use crate::pauli::{self, PauliSpec, PauliWord};

/// Validated, mutually commuting set of stabilizer generators.
///
/// Generator order is preserved exactly as supplied. The group is immutable
/// once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct StabilizerGroup {
    num_qubits: usize,
    generators: Vec<PauliWord>,
    rank: usize,
    css: bool,
}

impl fmt::Debug for StabilizerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StabilizerGroup")
            .field("num_qubits", &self.num_qubits)
            .field("generators", &self.generators)
            .field("rank", &self.rank)
            .finish_non_exhaustive()
    }
}

impl StabilizerGroup {
    /// Validates generators under the default options.
    pub fn new(num_qubits: usize, generators: Vec<PauliWord>) -> Result<Self, CodeError> {
        Self::with_options(num_qubits, generators, &SynthesisOptions::default())
    }

    /// Parses dense or sparse descriptions and validates the resulting generators.
    pub fn from_specs(
        num_qubits: usize,
        specs: &[PauliSpec],
        options: &SynthesisOptions,
    ) -> Result<Self, CodeError> {
        let generators = pauli::words_from_specs(num_qubits, specs)?;
        Self::with_options(num_qubits, generators, options)
    }

    /// Validates generators: lengths first, then pairwise commutation, then rank.
    pub fn with_options(
        num_qubits: usize,
        generators: Vec<PauliWord>,
        options: &SynthesisOptions,
    ) -> Result<Self, CodeError> {
        Self::check_lengths(num_qubits, &generators)?;
        let css = CssMatrices::split(num_qubits, &generators)?;
        let rank = match css.as_ref().filter(|_| options.css_fast_path) {
            Some(matrices) => {
                matrices.check_orthogonality(&generators)?;
                matrices.rank()
            }
            None => {
                validate_commutation(&generators)?;
                gf2::rank(&symplectic_matrix(num_qubits, &generators))
            }
        };
        Ok(Self {
            num_qubits,
            generators,
            rank,
            css: css.is_some(),
        })
    }

    fn check_lengths(num_qubits: usize, generators: &[PauliWord]) -> Result<(), CodeError> {
        for (idx, generator) in generators.iter().enumerate() {
            if generator.num_qubits() != num_qubits {
                let info = ErrorInfo::new("dimension-mismatch", "generator has wrong qubit count")
                    .with_context("generator_index", idx.to_string())
                    .with_context("expected", num_qubits.to_string())
                    .with_context("found", generator.num_qubits().to_string());
                return Err(CodeError::DimensionMismatch(info));
            }
        }
        Ok(())
    }

    /// Returns the number of physical qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns the generators in their original order.
    pub fn generators(&self) -> &[PauliWord] {
        &self.generators
    }

    /// Returns the number of supplied generators, dependent ones included.
    pub fn num_generators(&self) -> usize {
        self.generators.len()
    }

    /// Returns the number of independent generators.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns true when every generator is pure X or pure Z.
    pub fn is_css(&self) -> bool {
        self.css
    }

    /// Returns the `m x 2n` matrix whose rows are the generators' `[x | z]` vectors.
    pub fn symplectic_matrix(&self) -> BitMatrix {
        symplectic_matrix(self.num_qubits, &self.generators)
    }

    /// Returns the reduced echelon form of the stabilizer span.
    pub fn echelon(&self) -> Echelon {
        gf2::row_reduce(&self.symplectic_matrix())
    }

    /// Recomputes the rank through the general symplectic path.
    pub fn general_rank(&self) -> usize {
        self.echelon().rank()
    }

    /// Recomputes the rank as `rank(Hx) + rank(Hz)`, or `None` for non-CSS groups.
    pub fn css_rank(&self) -> Option<usize> {
        CssMatrices::split(self.num_qubits, &self.generators)
            .ok()
            .flatten()
            .map(|matrices| matrices.rank())
    }

    /// Returns `k = n - rank`, failing with `DegenerateCode` when `k` is zero.
    pub fn logical_dimension(&self) -> Result<usize, CodeError> {
        self.logical_dimension_with(&SynthesisOptions::default())
    }

    /// Returns `k = n - rank`, accepting `k = 0` when `allow_trivial` is set.
    pub fn logical_dimension_with(&self, options: &SynthesisOptions) -> Result<usize, CodeError> {
        let k = self.num_qubits.saturating_sub(self.rank);
        if k == 0 && !options.allow_trivial {
            let info = ErrorInfo::new("no-logical-qubits", "stabilizer rank leaves no logical qubits")
                .with_context("num_qubits", self.num_qubits.to_string())
                .with_context("rank", self.rank.to_string())
                .with_hint("set `allow_trivial` to accept codes encoding zero qubits");
            return Err(CodeError::DegenerateCode(info));
        }
        Ok(k)
    }

    /// Returns the indices of generators that anticommute with `error`.
    pub fn syndrome(&self, error: &PauliWord) -> Result<Vec<usize>, CodeError> {
        self.check_operator(error)?;
        Ok(self
            .generators
            .iter()
            .enumerate()
            .filter(|(_, generator)| generator.anticommutes(error))
            .map(|(idx, _)| idx)
            .collect())
    }

    /// Returns true when `word` lies in the stabilizer group (up to phase).
    pub fn contains(&self, word: &PauliWord) -> Result<bool, CodeError> {
        self.check_operator(word)?;
        self.echelon().contains(word.symplectic().bits())
    }

    /// Returns an equivalent presentation obtained by random generator products.
    ///
    /// Each step multiplies one generator into another, which preserves the
    /// span and therefore the code. The sequence is fixed by the handle's seed.
    pub fn rerandomized(&self, rng: &mut RngHandle) -> Result<Self, CodeError> {
        let mut generators = self.generators.clone();
        let count = generators.len();
        if count >= 2 {
            for _ in 0..2 * count {
                let (target, source) = rng.distinct_pair(count);
                generators[target] = generators[target].multiply(&generators[source])?;
            }
        }
        Self::new(self.num_qubits, generators)
    }

    pub(crate) fn check_operator(&self, word: &PauliWord) -> Result<(), CodeError> {
        if word.num_qubits() != self.num_qubits {
            return Err(CodeError::dimension_mismatch(
                "operator",
                self.num_qubits,
                word.num_qubits(),
            ));
        }
        Ok(())
    }
}

/// Checks every generator pair through the symplectic inner product.
///
/// Pairs are scanned in lexicographic order so the reported pair is the lowest
/// anticommuting one.
pub fn validate_commutation(generators: &[PauliWord]) -> Result<(), CodeError> {
    for (first, a) in generators.iter().enumerate() {
        for (offset, b) in generators[first + 1..].iter().enumerate() {
            if !a.commutes_with(b)? {
                return Err(anticommuting_pair(generators, first, first + 1 + offset));
            }
        }
    }
    Ok(())
}

pub(crate) fn anticommuting_pair(generators: &[PauliWord], first: usize, second: usize) -> CodeError {
    let info = ErrorInfo::new("generators-anticommute", "stabilizer generators do not commute")
        .with_context("first_index", first.to_string())
        .with_context("second_index", second.to_string())
        .with_context("first_operator", generators[first].to_string())
        .with_context("second_operator", generators[second].to_string());
    CodeError::InvalidStabilizerGroup(info)
}

// Callers must have checked every generator length against `num_qubits`.
fn symplectic_matrix(num_qubits: usize, generators: &[PauliWord]) -> BitMatrix {
    let rows = generators
        .iter()
        .map(|generator| generator.symplectic().bits().clone())
        .collect();
    BitMatrix::from_validated_rows(2 * num_qubits, rows)
}
