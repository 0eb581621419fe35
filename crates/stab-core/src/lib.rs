#![deny(missing_docs)]
#![doc = "Shared error, provenance and collaborator traits for stabilizer code construction."]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{CodeError, ErrorInfo};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::Coordinate;

/// Which half of a logical operator pair is being referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogicalKind {
    /// The logical X̄ operator of a pair.
    X,
    /// The logical Z̄ operator of a pair.
    Z,
}

/// Summary metadata describing logical operator structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogicalAlgebraSummary {
    /// Number of encoded logical qubits.
    pub num_logical: usize,
    /// Labels associated with logical operator pairs.
    pub labels: Vec<String>,
    /// Auxiliary metadata (rank, CSS flag, weights).
    pub metadata: BTreeMap<String, String>,
}

/// Read-only view of a verified code handed to circuit-synthesis collaborators.
pub trait LogicalCode: Send + Sync {
    /// Opaque label identifying the code for external reference.
    fn label(&self) -> &str;

    /// Returns the number of physical qubits.
    fn num_qubits(&self) -> usize;

    /// Returns the number of encoded logical qubits.
    fn num_logical(&self) -> usize;

    /// Returns the number of stabilizer generators.
    fn num_generators(&self) -> usize;

    /// Returns the qubits acted on non-trivially by a generator.
    fn generator_support(&self, index: usize) -> Result<Box<[usize]>, CodeError>;

    /// Returns the qubits acted on non-trivially by one half of a logical pair.
    fn logical_support(&self, index: usize, kind: LogicalKind) -> Result<Box<[usize]>, CodeError>;

    /// Whether every commutation relation has been certified.
    fn is_verified(&self) -> bool;

    /// Returns a lightweight summary of the logical algebra.
    fn logical_algebra_summary(&self) -> Result<LogicalAlgebraSummary, CodeError>;
}

/// Qubit index to coordinate mapping supplied by a lattice collaborator.
pub trait QubitLayout: Send + Sync {
    /// Returns the coordinate of `qubit`, or `None` when the layout has none.
    fn coordinate(&self, qubit: usize) -> Option<Coordinate>;
}
