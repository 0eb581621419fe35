#![deny(missing_docs)]
#![doc = "Stabilizer code engine: GF(2) algebra, logical operator synthesis and commutation verification."]

/// Logical algebra summary reporting.
pub mod analyze;
/// Packed GF(2) bit vectors.
pub mod bits;
/// Verified code blocks handed to collaborators.
pub mod block;
/// Catalog of well-known generator sets.
pub mod catalog;
/// Synthesis and verification options.
pub mod config;
/// CSS parity-check fast path.
pub mod css;
/// Dense GF(2) matrices, row reduction, null spaces and solving.
pub mod gf2;
/// Stabilizer group validation, rank and syndromes.
pub mod group;
/// Canonical hashing helpers for code blocks.
pub mod hash;
/// Support footprints for layout collaborators.
pub mod layout;
/// Pauli words and generator descriptions.
pub mod pauli;
/// Serialization routines for JSON and binary round-trips.
pub mod serde;
/// Symplectic inner product and pairing.
pub mod symplectic;
/// Logical operator synthesis.
pub mod synth;
/// Commutation verification.
pub mod verify;

pub use bits::BitVector;
pub use block::{CodeBlock, LogicalAction};
pub use config::SynthesisOptions;
pub use css::{CheckKind, CssMatrices};
pub use gf2::{BitMatrix, Echelon};
pub use group::StabilizerGroup;
pub use hash::canonical_block_hash;
pub use layout::SupportFootprint;
pub use pauli::{Pauli, PauliSpec, PauliWord};
pub use self::serde::{from_bytes, from_json, to_bytes, to_json};
pub use symplectic::{inner_product, symplectic_gram_schmidt, SymplecticVector};
pub use synth::{equivalent_logical_bases, same_logical_cosets, synthesize, LogicalPair};
pub use verify::{thread_pool, verify, CommutationVerifier, RelationClass, Role, VerificationReport};
