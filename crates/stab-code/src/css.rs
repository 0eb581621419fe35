use stab_core::CodeError;

use crate::gf2::{self, BitMatrix};
use crate::group;
use crate::pauli::PauliWord;

/// Kind of CSS check a pure generator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckKind {
    /// Generator built from `I` and `X` only.
    X,
    /// Generator built from `I` and `Z` only.
    Z,
}

/// Classical parity-check matrices of a CSS generator set.
///
/// `hx` holds the x rows of the X-type generators and `hz` the z rows of the
/// Z-type generators; the index tables map matrix rows back to positions in the
/// original generator list.
#[derive(Debug, Clone)]
pub struct CssMatrices {
    hx: BitMatrix,
    hz: BitMatrix,
    x_index: Vec<usize>,
    z_index: Vec<usize>,
}

impl CssMatrices {
    /// Splits the generators, or returns `None` when any of them mixes X and Z.
    ///
    /// Identity generators are filed as X-type.
    pub fn split(num_qubits: usize, generators: &[PauliWord]) -> Result<Option<Self>, CodeError> {
        let mut x_rows = Vec::new();
        let mut z_rows = Vec::new();
        let mut x_index = Vec::new();
        let mut z_index = Vec::new();
        for (idx, generator) in generators.iter().enumerate() {
            match classify(generator) {
                Some(CheckKind::X) => {
                    x_rows.push(generator.x_bits().clone());
                    x_index.push(idx);
                }
                Some(CheckKind::Z) => {
                    z_rows.push(generator.z_bits().clone());
                    z_index.push(idx);
                }
                None => return Ok(None),
            }
        }
        Ok(Some(Self {
            hx: BitMatrix::from_rows(num_qubits, x_rows)?,
            hz: BitMatrix::from_rows(num_qubits, z_rows)?,
            x_index,
            z_index,
        }))
    }

    /// Returns the X parity-check matrix.
    pub fn hx(&self) -> &BitMatrix {
        &self.hx
    }

    /// Returns the Z parity-check matrix.
    pub fn hz(&self) -> &BitMatrix {
        &self.hz
    }

    /// Returns `rank(Hx)`.
    pub fn rank_x(&self) -> usize {
        gf2::rank(&self.hx)
    }

    /// Returns `rank(Hz)`.
    pub fn rank_z(&self) -> usize {
        gf2::rank(&self.hz)
    }

    /// Returns the rank of the whole generator set, `rank(Hx) + rank(Hz)`.
    pub fn rank(&self) -> usize {
        self.rank_x() + self.rank_z()
    }

    /// Checks `Hx · Hzᵀ = 0`, naming the lowest anticommuting generator pair otherwise.
    pub fn check_orthogonality(&self, generators: &[PauliWord]) -> Result<(), CodeError> {
        let product = self.hx.mul_transpose(&self.hz)?;
        if product.is_zero() {
            return Ok(());
        }
        let offending = product
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(row, bits)| bits.ones().map(move |col| (row, col)))
            .map(|(row, col)| {
                let (a, b) = (self.x_index[row], self.z_index[col]);
                (a.min(b), a.max(b))
            })
            .min();
        match offending {
            Some((first, second)) => Err(group::anticommuting_pair(
                generators,
                first,
                second,
            )),
            None => Ok(()),
        }
    }
}

/// Returns the CSS kind of a generator, or `None` for mixed generators.
pub fn classify(generator: &PauliWord) -> Option<CheckKind> {
    if generator.is_x_type() {
        Some(CheckKind::X)
    } else if generator.is_z_type() {
        Some(CheckKind::Z)
    } else {
        None
    }
}
