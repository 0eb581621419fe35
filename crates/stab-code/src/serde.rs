use serde::{Deserialize, Serialize};
use stab_core::{CodeError, ErrorInfo, RunProvenance, SchemaVersion};

use crate::block::CodeBlock;
use crate::config::SynthesisOptions;
use crate::group::StabilizerGroup;
use crate::pauli::PauliWord;
use crate::synth::LogicalPair;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableCodeBlock {
    schema_version: SchemaVersion,
    provenance: RunProvenance,
    label: String,
    num_qubits: usize,
    rank: usize,
    num_logical: usize,
    generators: Vec<PauliWord>,
    logical_pairs: Vec<LogicalPair>,
}

fn serde_error(code: &str, message: impl Into<String>) -> CodeError {
    CodeError::Serde(ErrorInfo::new(code, message))
}

/// Serializes a code block to a JSON string.
pub fn to_json(block: &CodeBlock) -> Result<String, CodeError> {
    let mut provenance = block.provenance().clone();
    if provenance.code_hash.is_empty() {
        provenance.code_hash = block.canonical_hash();
    }
    let payload = SerializableCodeBlock {
        schema_version: block.schema_version(),
        provenance,
        label: block.label().to_string(),
        num_qubits: block.num_qubits(),
        rank: block.rank(),
        num_logical: block.num_logical(),
        generators: block.generators().to_vec(),
        logical_pairs: block.logical_pairs().to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|err| serde_error("json-serialize", err.to_string()))
}

/// Restores a code block from a JSON string.
///
/// The generators are revalidated and the logical basis is verified again, so
/// an edited payload either fails or yields a fully verified block.
pub fn from_json(data: &str) -> Result<CodeBlock, CodeError> {
    let payload: SerializableCodeBlock =
        serde_json::from_str(data).map_err(|err| serde_error("json-deserialize", err.to_string()))?;

    if !SchemaVersion::CURRENT.is_compatible_with(&payload.schema_version) {
        let info = ErrorInfo::new("unsupported-schema", "payload schema is newer than supported")
            .with_context("payload", payload.schema_version.to_string())
            .with_context("supported", SchemaVersion::CURRENT.to_string());
        return Err(CodeError::Serde(info));
    }
    if let Some((position, pair)) = payload
        .logical_pairs
        .iter()
        .enumerate()
        .find(|(position, pair)| pair.index != *position)
    {
        let info = ErrorInfo::new("logical-index-mismatch", "logical pairs are not numbered in order")
            .with_context("position", position.to_string())
            .with_context("index", pair.index.to_string());
        return Err(CodeError::Serde(info));
    }

    let options = SynthesisOptions {
        allow_trivial: payload.num_logical == 0,
        ..SynthesisOptions::default()
    };
    let group = StabilizerGroup::with_options(payload.num_qubits, payload.generators, &options)?;
    if group.rank() != payload.rank {
        let info = ErrorInfo::new("rank-mismatch", "stored rank disagrees with generators")
            .with_context("stored", payload.rank.to_string())
            .with_context("computed", group.rank().to_string());
        return Err(CodeError::Serde(info));
    }

    let expected_hash = payload.provenance.code_hash.clone();
    let block = CodeBlock::from_parts(payload.label, group, payload.logical_pairs, &options)?
        .with_schema_version(payload.schema_version)
        .with_provenance(payload.provenance);
    if !expected_hash.is_empty() && expected_hash != block.canonical_hash() {
        let info = ErrorInfo::new("code-hash-mismatch", "payload hash does not match its contents")
            .with_context("stored", expected_hash)
            .with_context("computed", block.canonical_hash());
        return Err(CodeError::Serde(info));
    }
    Ok(block)
}

/// Serializes a code block into a binary blob.
pub fn to_bytes(block: &CodeBlock) -> Result<Vec<u8>, CodeError> {
    let json = to_json(block)?;
    bincode::serialize(&json).map_err(|err| serde_error("bincode-serialize", err.to_string()))
}

/// Rehydrates a code block from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<CodeBlock, CodeError> {
    let json: String =
        bincode::deserialize(bytes).map_err(|err| serde_error("bincode-deserialize", err.to_string()))?;
    from_json(&json)
}
