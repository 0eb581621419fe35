use serde::{Deserialize, Serialize};
use stab_core::{CodeError, Coordinate, ErrorInfo, QubitLayout};

use crate::block::CodeBlock;
use crate::pauli::{Pauli, PauliWord};

/// Placed support of one operator, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportFootprint {
    /// Position of the operator in its list.
    pub index: usize,
    /// Qubits in the support, increasing.
    pub qubits: Vec<usize>,
    /// Single-qubit operator on each support qubit.
    pub paulis: Vec<Pauli>,
    /// Coordinate of each support qubit.
    pub coordinates: Vec<Coordinate>,
    /// Mean of the support coordinates.
    pub centroid: Coordinate,
}

/// Places one operator's support using an externally supplied layout.
pub fn footprint(
    index: usize,
    word: &PauliWord,
    layout: &dyn QubitLayout,
) -> Result<SupportFootprint, CodeError> {
    let qubits = word.support();
    let mut coordinates = Vec::with_capacity(qubits.len());
    for &qubit in &qubits {
        let coordinate = layout.coordinate(qubit).ok_or_else(|| {
            CodeError::Layout(
                ErrorInfo::new("missing-coordinate", "layout has no coordinate for qubit")
                    .with_context("qubit", qubit.to_string())
                    .with_context("operator_index", index.to_string()),
            )
        })?;
        coordinates.push(coordinate);
    }
    let paulis = qubits.iter().map(|&qubit| word.get(qubit)).collect();
    let centroid = centroid(&coordinates);
    Ok(SupportFootprint {
        index,
        qubits,
        paulis,
        coordinates,
        centroid,
    })
}

fn centroid(points: &[Coordinate]) -> Coordinate {
    if points.is_empty() {
        return Coordinate::default();
    }
    let count = points.len() as f64;
    let (x, y, z) = points.iter().fold((0.0, 0.0, 0.0), |(x, y, z), point| {
        (x + point.x, y + point.y, z + point.z)
    });
    Coordinate {
        x: x / count,
        y: y / count,
        z: z / count,
    }
}

/// Places every generator of a verified block.
pub fn support_footprints(
    block: &CodeBlock,
    layout: &dyn QubitLayout,
) -> Result<Vec<SupportFootprint>, CodeError> {
    block
        .generators()
        .iter()
        .enumerate()
        .map(|(index, generator)| footprint(index, generator, layout))
        .collect()
}

/// Places the X̄ and Z̄ operator of every logical pair, in pair order.
pub fn logical_footprints(
    block: &CodeBlock,
    layout: &dyn QubitLayout,
) -> Result<Vec<(SupportFootprint, SupportFootprint)>, CodeError> {
    block
        .logical_pairs()
        .iter()
        .map(|pair| {
            Ok((
                footprint(pair.index, &pair.x, layout)?,
                footprint(pair.index, &pair.z, layout)?,
            ))
        })
        .collect()
}
