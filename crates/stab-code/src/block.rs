use std::fmt;

use stab_core::{
    CodeError, ErrorInfo, LogicalAlgebraSummary, LogicalCode, LogicalKind, RunProvenance,
    SchemaVersion,
};

use crate::analyze;
use crate::config::SynthesisOptions;
use crate::group::StabilizerGroup;
use crate::hash;
use crate::pauli::{PauliSpec, PauliWord};
use crate::synth::{self, LogicalPair};
use crate::verify::{self, VerificationReport};

/// Which logical operators a Pauli operator acts on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogicalAction {
    /// Pairs whose Z̄ the operator anticommutes with (it carries an X̄ component).
    pub flips_z: Vec<usize>,
    /// Pairs whose X̄ the operator anticommutes with (it carries a Z̄ component).
    pub flips_x: Vec<usize>,
}

impl LogicalAction {
    /// Returns true when the operator acts trivially on every logical qubit.
    pub fn is_trivial(&self) -> bool {
        self.flips_z.is_empty() && self.flips_x.is_empty()
    }
}

/// Verified stabilizer code: generators, logical basis, label and provenance.
///
/// Only constructed after [`verify::verify`] succeeds, so every block a caller
/// can hold satisfies all commutation relations.
#[derive(Clone)]
pub struct CodeBlock {
    label: String,
    group: StabilizerGroup,
    logical_pairs: Vec<LogicalPair>,
    report: VerificationReport,
    verified: bool,
    schema_version: SchemaVersion,
    provenance: RunProvenance,
}

impl fmt::Debug for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeBlock")
            .field("label", &self.label)
            .field("num_qubits", &self.group.num_qubits())
            .field("num_logical", &self.logical_pairs.len())
            .field("verified", &self.verified)
            .finish_non_exhaustive()
    }
}

impl CodeBlock {
    /// Parses generator descriptions, synthesizes a logical basis and verifies it.
    pub fn build(
        label: impl Into<String>,
        num_qubits: usize,
        specs: &[PauliSpec],
        options: &SynthesisOptions,
    ) -> Result<Self, CodeError> {
        options.validate()?;
        let group = StabilizerGroup::from_specs(num_qubits, specs, options)?;
        Self::from_group(label, group, options)
    }

    /// Synthesizes and verifies a logical basis for an already validated group.
    pub fn from_group(
        label: impl Into<String>,
        group: StabilizerGroup,
        options: &SynthesisOptions,
    ) -> Result<Self, CodeError> {
        let pairs = synth::synthesize(&group, options)?;
        Self::from_parts(label, group, pairs, options)
    }

    /// Verifies a caller-supplied logical basis and packages it.
    ///
    /// The basis must have exactly `n - rank` pairs.
    pub fn from_parts(
        label: impl Into<String>,
        group: StabilizerGroup,
        logical_pairs: Vec<LogicalPair>,
        options: &SynthesisOptions,
    ) -> Result<Self, CodeError> {
        let k = group.logical_dimension_with(options)?;
        if logical_pairs.len() != k {
            let info = ErrorInfo::new("logical-count-mismatch", "logical basis has the wrong size")
                .with_context("expected", k.to_string())
                .with_context("found", logical_pairs.len().to_string());
            return Err(CodeError::InsufficientLogicalSpace(info));
        }
        let report = verify::verify(&group, &logical_pairs, options)?;
        let mut provenance = RunProvenance {
            input_hash: hash::input_hash(&group),
            ..RunProvenance::default()
        };
        provenance
            .tool_versions
            .insert("stab-code".to_string(), env!("CARGO_PKG_VERSION").to_string());
        Ok(Self {
            label: label.into(),
            group,
            logical_pairs,
            report,
            verified: true,
            schema_version: SchemaVersion::default(),
            provenance,
        })
    }

    /// Replaces the provenance payload.
    pub fn with_provenance(mut self, provenance: RunProvenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub(crate) fn with_schema_version(mut self, schema_version: SchemaVersion) -> Self {
        self.schema_version = schema_version;
        self
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `n`.
    pub fn num_qubits(&self) -> usize {
        self.group.num_qubits()
    }

    /// Returns `k`.
    pub fn num_logical(&self) -> usize {
        self.logical_pairs.len()
    }

    /// Returns the stabilizer rank.
    pub fn rank(&self) -> usize {
        self.group.rank()
    }

    /// Returns the underlying group.
    pub fn group(&self) -> &StabilizerGroup {
        &self.group
    }

    /// Returns the generators in their original order.
    pub fn generators(&self) -> &[PauliWord] {
        self.group.generators()
    }

    /// Returns the logical basis.
    pub fn logical_pairs(&self) -> &[LogicalPair] {
        &self.logical_pairs
    }

    /// Returns the verification counts.
    pub fn verification(&self) -> &VerificationReport {
        &self.report
    }

    /// Returns true once every commutation relation has been certified.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Returns the schema version.
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Returns the provenance payload.
    pub fn provenance(&self) -> &RunProvenance {
        &self.provenance
    }

    /// Computes the canonical structural hash.
    pub fn canonical_hash(&self) -> String {
        hash::canonical_block_hash(self)
    }

    /// Returns the logical algebra summary.
    pub fn summary(&self) -> LogicalAlgebraSummary {
        analyze::summarize(self)
    }

    /// Reports which logical qubits `operator` acts on.
    pub fn logical_action(&self, operator: &PauliWord) -> Result<LogicalAction, CodeError> {
        self.group.check_operator(operator)?;
        let mut action = LogicalAction::default();
        for pair in &self.logical_pairs {
            if operator.anticommutes(&pair.z) {
                action.flips_z.push(pair.index);
            }
            if operator.anticommutes(&pair.x) {
                action.flips_x.push(pair.index);
            }
        }
        Ok(action)
    }

    /// Returns true for an operator that commutes with every generator but is not a stabilizer.
    pub fn is_nontrivial_logical(&self, operator: &PauliWord) -> Result<bool, CodeError> {
        if !self.group.syndrome(operator)?.is_empty() {
            return Ok(false);
        }
        Ok(!self.group.contains(operator)?)
    }

    fn pair(&self, index: usize) -> Result<&LogicalPair, CodeError> {
        self.logical_pairs.get(index).ok_or_else(|| {
            CodeError::DimensionMismatch(
                ErrorInfo::new("logical-index-out-of-range", "no logical pair at index")
                    .with_context("index", index.to_string())
                    .with_context("num_logical", self.logical_pairs.len().to_string()),
            )
        })
    }
}

impl LogicalCode for CodeBlock {
    fn label(&self) -> &str {
        self.label()
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits()
    }

    fn num_logical(&self) -> usize {
        self.num_logical()
    }

    fn num_generators(&self) -> usize {
        self.group.num_generators()
    }

    fn generator_support(&self, index: usize) -> Result<Box<[usize]>, CodeError> {
        let generator = self.generators().get(index).ok_or_else(|| {
            CodeError::DimensionMismatch(
                ErrorInfo::new("generator-index-out-of-range", "no generator at index")
                    .with_context("index", index.to_string())
                    .with_context("num_generators", self.group.num_generators().to_string()),
            )
        })?;
        Ok(generator.support().into_boxed_slice())
    }

    fn logical_support(&self, index: usize, kind: LogicalKind) -> Result<Box<[usize]>, CodeError> {
        let pair = self.pair(index)?;
        let word = match kind {
            LogicalKind::X => &pair.x,
            LogicalKind::Z => &pair.z,
        };
        Ok(word.support().into_boxed_slice())
    }

    fn is_verified(&self) -> bool {
        self.is_verified()
    }

    fn logical_algebra_summary(&self) -> Result<LogicalAlgebraSummary, CodeError> {
        Ok(self.summary())
    }
}
