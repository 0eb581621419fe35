use std::collections::BTreeMap;

use stab_core::LogicalAlgebraSummary;

use crate::block::CodeBlock;

/// Builds the logical algebra summary for a verified block.
pub fn summarize(block: &CodeBlock) -> LogicalAlgebraSummary {
    let num_logical = block.num_logical();
    let labels = (0..num_logical)
        .map(|idx| format!("logical-{idx}"))
        .collect();

    let generator_weights: Vec<usize> = block.generators().iter().map(|g| g.weight()).collect();
    let logical_weights: Vec<usize> = block
        .logical_pairs()
        .iter()
        .flat_map(|pair| [pair.x.weight(), pair.z.weight()])
        .collect();

    let mut metadata = BTreeMap::new();
    metadata.insert("label".to_string(), block.label().to_string());
    metadata.insert("num_qubits".to_string(), block.num_qubits().to_string());
    metadata.insert("rank".to_string(), block.rank().to_string());
    metadata.insert(
        "num_generators".to_string(),
        block.generators().len().to_string(),
    );
    metadata.insert("css".to_string(), block.group().is_css().to_string());
    metadata.insert("verified".to_string(), block.is_verified().to_string());
    if let Some(max) = generator_weights.iter().max() {
        metadata.insert("max_generator_weight".to_string(), max.to_string());
    }
    // Upper bound on the distance: the lightest synthesized representative.
    if let Some(min) = logical_weights.iter().min() {
        metadata.insert("min_logical_weight".to_string(), min.to_string());
    }

    LogicalAlgebraSummary {
        num_logical,
        labels,
        metadata,
    }
}
