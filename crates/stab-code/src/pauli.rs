use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stab_core::{CodeError, ErrorInfo};

use crate::bits::BitVector;
use crate::symplectic::{self, SymplecticVector};

/// Single-qubit Pauli operator, phases ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity.
    I,
    /// Bit flip.
    X,
    /// Both flips.
    Y,
    /// Phase flip.
    Z,
}

impl Pauli {
    /// Decodes the `(x, z)` bit pair.
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (true, true) => Pauli::Y,
            (false, true) => Pauli::Z,
        }
    }

    /// Encodes the operator as an `(x, z)` bit pair.
    pub fn bits(self) -> (bool, bool) {
        match self {
            Pauli::I => (false, false),
            Pauli::X => (true, false),
            Pauli::Y => (true, true),
            Pauli::Z => (false, true),
        }
    }

    /// Parses one of `I`, `X`, `Y`, `Z`.
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Returns the letter for the operator.
    pub fn to_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

/// Tensor product of single-qubit Paulis over `n` qubits, stored as x/z bit rows.
///
/// Serialized as its dense letter string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PauliWord {
    x: BitVector,
    z: BitVector,
}

impl PauliWord {
    /// Returns the identity on `num_qubits` qubits.
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            x: BitVector::zeros(num_qubits),
            z: BitVector::zeros(num_qubits),
        }
    }

    /// Builds a word from explicit x and z rows of equal length.
    pub fn from_bits(x: BitVector, z: BitVector) -> Result<Self, CodeError> {
        if x.len() != z.len() {
            return Err(CodeError::dimension_mismatch("z bits", x.len(), z.len()));
        }
        Ok(Self { x, z })
    }

    /// Parses a dense string over `{I, X, Y, Z}`; its length is the qubit count.
    pub fn from_dense(text: &str) -> Result<Self, CodeError> {
        let symbols: Vec<char> = text.chars().collect();
        let mut word = Self::identity(symbols.len());
        for (qubit, &symbol) in symbols.iter().enumerate() {
            let pauli = Pauli::from_char(symbol).ok_or_else(|| {
                CodeError::Parse(
                    ErrorInfo::new("unknown-pauli-symbol", "dense operator contains unknown symbol")
                        .with_context("symbol", symbol.to_string())
                        .with_context("qubit", qubit.to_string())
                        .with_hint("use only the letters I, X, Y and Z"),
                )
            })?;
            word.assign(qubit, pauli);
        }
        Ok(word)
    }

    /// Parses a dense string and checks that it covers exactly `num_qubits` qubits.
    pub fn from_dense_sized(num_qubits: usize, text: &str) -> Result<Self, CodeError> {
        let word = Self::from_dense(text)?;
        if word.num_qubits() != num_qubits {
            let info = ErrorInfo::new("dimension-mismatch", "dense operator has wrong length")
                .with_context("expected", num_qubits.to_string())
                .with_context("found", word.num_qubits().to_string())
                .with_context("operator", text.to_string());
            return Err(CodeError::DimensionMismatch(info));
        }
        Ok(word)
    }

    /// Builds a word from `(qubit, pauli)` entries; unlisted qubits are identity.
    pub fn from_sparse(num_qubits: usize, entries: &[(usize, Pauli)]) -> Result<Self, CodeError> {
        let mut word = Self::identity(num_qubits);
        let mut seen = vec![false; num_qubits];
        for &(qubit, pauli) in entries {
            if qubit >= num_qubits {
                let info = ErrorInfo::new("qubit-out-of-range", "sparse entry names a missing qubit")
                    .with_context("qubit", qubit.to_string())
                    .with_context("num_qubits", num_qubits.to_string());
                return Err(CodeError::Parse(info));
            }
            if std::mem::replace(&mut seen[qubit], true) {
                let info = ErrorInfo::new("duplicate-qubit", "sparse entry lists a qubit twice")
                    .with_context("qubit", qubit.to_string());
                return Err(CodeError::Parse(info));
            }
            word.assign(qubit, pauli);
        }
        Ok(word)
    }

    /// Rebuilds a word from its symplectic vector.
    pub fn from_symplectic(vector: &SymplecticVector) -> Self {
        Self {
            x: vector.x_part(),
            z: vector.z_part(),
        }
    }

    fn assign(&mut self, qubit: usize, pauli: Pauli) {
        let (x, z) = pauli.bits();
        self.x.set(qubit, x);
        self.z.set(qubit, z);
    }

    /// Returns the number of qubits the word acts on.
    pub fn num_qubits(&self) -> usize {
        self.x.len()
    }

    /// Returns the x row.
    pub fn x_bits(&self) -> &BitVector {
        &self.x
    }

    /// Returns the z row.
    pub fn z_bits(&self) -> &BitVector {
        &self.z
    }

    /// Returns the single-qubit operator on `qubit`.
    pub fn get(&self, qubit: usize) -> Pauli {
        Pauli::from_bits(self.x.get(qubit), self.z.get(qubit))
    }

    /// Returns the qubits acted on non-trivially, in increasing order.
    pub fn support(&self) -> Vec<usize> {
        (0..self.num_qubits())
            .filter(|&qubit| self.x.get(qubit) || self.z.get(qubit))
            .collect()
    }

    /// Returns the number of non-identity tensor factors.
    pub fn weight(&self) -> usize {
        self.support().len()
    }

    /// Returns true for the identity operator.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.z.is_zero()
    }

    /// Returns true when the word contains only `I` and `X`.
    pub fn is_x_type(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns true when the word contains only `I` and `Z`.
    pub fn is_z_type(&self) -> bool {
        self.x.is_zero()
    }

    /// Returns the `[x | z]` vector used for all linear algebra.
    pub fn symplectic(&self) -> SymplecticVector {
        SymplecticVector::from_parts(&self.x, &self.z)
    }

    /// Returns true when the two operators commute.
    pub fn commutes_with(&self, other: &PauliWord) -> Result<bool, CodeError> {
        Ok(!symplectic::word_inner_product(self, other)?)
    }

    /// Commutation test for operators whose lengths were already checked.
    pub(crate) fn anticommutes(&self, other: &PauliWord) -> bool {
        symplectic::word_parity(self, other)
    }

    /// Returns the product of two words up to phase.
    pub fn multiply(&self, other: &PauliWord) -> Result<PauliWord, CodeError> {
        if self.num_qubits() != other.num_qubits() {
            return Err(CodeError::dimension_mismatch(
                "operator product",
                self.num_qubits(),
                other.num_qubits(),
            ));
        }
        let mut product = self.clone();
        product.x.xor_assign(&other.x);
        product.z.xor_assign(&other.z);
        Ok(product)
    }
}

impl fmt::Display for PauliWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for qubit in 0..self.num_qubits() {
            write!(f, "{}", self.get(qubit).to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for PauliWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PauliWord({self})")
    }
}

impl FromStr for PauliWord {
    type Err = CodeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_dense(text)
    }
}

impl TryFrom<String> for PauliWord {
    type Error = CodeError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_dense(&text)
    }
}

impl From<PauliWord> for String {
    fn from(word: PauliWord) -> Self {
        word.to_string()
    }
}

/// Caller-supplied generator description, in either dense or sparse form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PauliSpec {
    /// Letter string of length `n`, e.g. `"XXZZI"`.
    Dense(String),
    /// `(qubit, pauli)` entries; unlisted qubits are identity.
    Sparse(Vec<(usize, Pauli)>),
}

impl PauliSpec {
    /// Converts the description to a word on `num_qubits` qubits.
    pub fn to_word(&self, num_qubits: usize) -> Result<PauliWord, CodeError> {
        match self {
            PauliSpec::Dense(text) => PauliWord::from_dense_sized(num_qubits, text),
            PauliSpec::Sparse(entries) => PauliWord::from_sparse(num_qubits, entries),
        }
    }

    /// Sparse description applying `pauli` to every listed qubit.
    pub fn uniform(pauli: Pauli, qubits: impl IntoIterator<Item = usize>) -> Self {
        PauliSpec::Sparse(qubits.into_iter().map(|qubit| (qubit, pauli)).collect())
    }
}

impl From<&str> for PauliSpec {
    fn from(text: &str) -> Self {
        PauliSpec::Dense(text.to_string())
    }
}

/// Converts a list of descriptions into words on `num_qubits` qubits.
pub fn words_from_specs(num_qubits: usize, specs: &[PauliSpec]) -> Result<Vec<PauliWord>, CodeError> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, spec)| {
            spec.to_word(num_qubits).map_err(|err| tag_generator(err, idx))
        })
        .collect()
}

fn tag_generator(err: CodeError, idx: usize) -> CodeError {
    let tag = |info: ErrorInfo| info.with_context("generator_index", idx.to_string());
    match err {
        CodeError::DimensionMismatch(info) => CodeError::DimensionMismatch(tag(info)),
        CodeError::Parse(info) => CodeError::Parse(tag(info)),
        other => other,
    }
}
