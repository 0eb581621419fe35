use sha2::{Digest, Sha256};

use crate::block::CodeBlock;
use crate::group::StabilizerGroup;
use crate::pauli::PauliWord;

fn update_word(hasher: &mut Sha256, word: &PauliWord) {
    let support = word.support();
    hasher.update((support.len() as u64).to_le_bytes());
    for qubit in support {
        hasher.update((qubit as u64).to_le_bytes());
        hasher.update([word.get(qubit).to_char() as u8]);
    }
}

fn hex(digest: &[u8]) -> String {
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}

/// Hashes the generator list a block was built from.
pub fn input_hash(group: &StabilizerGroup) -> String {
    let mut hasher = Sha256::new();
    hasher.update((group.num_qubits() as u64).to_le_bytes());
    hasher.update((group.num_generators() as u64).to_le_bytes());
    for generator in group.generators() {
        update_word(&mut hasher, generator);
    }
    hex(&hasher.finalize())
}

/// Computes the canonical structural hash for a code block.
///
/// Covers the schema version, dimensions, generators and logical basis; the
/// label and provenance are excluded.
pub fn canonical_block_hash(block: &CodeBlock) -> String {
    let mut hasher = Sha256::new();
    let version = block.schema_version();
    hasher.update((version.major as u64).to_le_bytes());
    hasher.update((version.minor as u64).to_le_bytes());
    hasher.update((version.patch as u64).to_le_bytes());
    hasher.update((block.num_qubits() as u64).to_le_bytes());
    hasher.update((block.rank() as u64).to_le_bytes());
    hasher.update((block.num_logical() as u64).to_le_bytes());

    hasher.update((block.generators().len() as u64).to_le_bytes());
    for generator in block.generators() {
        update_word(&mut hasher, generator);
    }
    for pair in block.logical_pairs() {
        update_word(&mut hasher, &pair.x);
        update_word(&mut hasher, &pair.z);
    }

    hex(&hasher.finalize())
}
