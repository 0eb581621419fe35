use stab_core::CodeError;

use crate::block::CodeBlock;
use crate::config::SynthesisOptions;
use crate::group::StabilizerGroup;
use crate::pauli::{Pauli, PauliSpec};

/// Generator description of a well-known code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Short name, also used as the block label.
    pub name: String,
    /// Number of physical qubits.
    pub num_qubits: usize,
    /// Generator descriptions in presentation order.
    pub generators: Vec<PauliSpec>,
}

impl CatalogEntry {
    /// Validates the generators.
    pub fn group(&self, options: &SynthesisOptions) -> Result<StabilizerGroup, CodeError> {
        StabilizerGroup::from_specs(self.num_qubits, &self.generators, options)
    }

    /// Builds the verified code block.
    pub fn build(&self, options: &SynthesisOptions) -> Result<CodeBlock, CodeError> {
        CodeBlock::build(self.name.clone(), self.num_qubits, &self.generators, options)
    }
}

/// [[8,3,2]] cube code: one weight-8 X check and four Z face checks.
pub fn cube_8_3_2() -> CatalogEntry {
    CatalogEntry {
        name: "cube-8-3-2".into(),
        num_qubits: 8,
        generators: vec![
            PauliSpec::uniform(Pauli::X, 0..8),
            PauliSpec::uniform(Pauli::Z, [0, 1, 2, 3]),
            PauliSpec::uniform(Pauli::Z, [4, 5, 6, 7]),
            PauliSpec::uniform(Pauli::Z, [0, 1, 4, 5]),
            PauliSpec::uniform(Pauli::Z, [1, 3, 5, 7]),
        ],
    }
}

/// [[16,6,4]] code on a 4x4 grid with weight-8 row-pair and column-pair checks.
///
/// Qubit `4 * row + col`. Rows (0,1), (1,2), (2,3) and columns (0,1), (1,2)
/// give five independent checks; the same supports are used for X and Z.
pub fn grid_16_6_4() -> CatalogEntry {
    let row_pair = |row: usize| (0..4).flat_map(move |col| [4 * row + col, 4 * (row + 1) + col]);
    let col_pair = |col: usize| (0..4).flat_map(move |row| [4 * row + col, 4 * row + col + 1]);
    let supports: Vec<Vec<usize>> = vec![
        row_pair(0).collect(),
        row_pair(1).collect(),
        row_pair(2).collect(),
        col_pair(0).collect(),
        col_pair(1).collect(),
    ];
    let mut generators: Vec<PauliSpec> = supports
        .iter()
        .map(|support| PauliSpec::uniform(Pauli::X, support.iter().copied()))
        .collect();
    generators.extend(
        supports
            .iter()
            .map(|support| PauliSpec::uniform(Pauli::Z, support.iter().copied())),
    );
    CatalogEntry {
        name: "grid-16-6-4".into(),
        num_qubits: 16,
        generators,
    }
}

/// [[7,1,3]] Steane code from the Hamming parity checks.
pub fn steane_7_1_3() -> CatalogEntry {
    let checks = [[3, 4, 5, 6], [1, 2, 5, 6], [0, 2, 4, 6]];
    let mut generators: Vec<PauliSpec> = checks
        .iter()
        .map(|check| PauliSpec::uniform(Pauli::X, *check))
        .collect();
    generators.extend(checks.iter().map(|check| PauliSpec::uniform(Pauli::Z, *check)));
    CatalogEntry {
        name: "steane-7-1-3".into(),
        num_qubits: 7,
        generators,
    }
}

/// [[5,1,3]] perfect code, cyclic shifts of `XZZXI`.
pub fn perfect_5_1_3() -> CatalogEntry {
    CatalogEntry {
        name: "perfect-5-1-3".into(),
        num_qubits: 5,
        generators: ["XZZXI", "IXZZX", "XIXZZ", "ZXIXZ"]
            .into_iter()
            .map(PauliSpec::from)
            .collect(),
    }
}

/// Bit-flip repetition code on `n` qubits with nearest-neighbour `ZZ` checks.
pub fn repetition(n: usize) -> CatalogEntry {
    CatalogEntry {
        name: format!("repetition-{n}"),
        num_qubits: n,
        generators: (1..n)
            .map(|qubit| PauliSpec::uniform(Pauli::Z, [qubit - 1, qubit]))
            .collect(),
    }
}
