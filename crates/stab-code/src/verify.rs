use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use stab_core::{CodeError, ErrorInfo};

use crate::config::SynthesisOptions;
use crate::group::StabilizerGroup;
use crate::pauli::PauliWord;
use crate::synth::LogicalPair;

/// Role an operator plays in a commutation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Stabilizer generator at the given position.
    Generator(usize),
    /// Logical X̄ of the given pair.
    LogicalX(usize),
    /// Logical Z̄ of the given pair.
    LogicalZ(usize),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Generator(idx) => write!(f, "generator-{idx}"),
            Role::LogicalX(idx) => write!(f, "logical-x-{idx}"),
            Role::LogicalZ(idx) => write!(f, "logical-z-{idx}"),
        }
    }
}

/// The four relation classes, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationClass {
    /// Generators commute with each other.
    GeneratorPairs,
    /// Logical operators commute with every generator.
    StabilizerLogical,
    /// X̄i and Z̄i anticommute.
    ConjugatePairs,
    /// Operators of different pairs commute.
    CrossPairs,
}

impl RelationClass {
    fn code(self) -> &'static str {
        match self {
            RelationClass::GeneratorPairs => "generators-anticommute",
            RelationClass::StabilizerLogical => "logical-anticommutes-with-stabilizer",
            RelationClass::ConjugatePairs => "logical-pair-commutes",
            RelationClass::CrossPairs => "logical-cross-pair-anticommutes",
        }
    }

    fn expects_anticommutation(self) -> bool {
        matches!(self, RelationClass::ConjugatePairs)
    }
}

/// Number of operator pairs certified in each relation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VerificationReport {
    /// Generator/generator checks.
    pub generator_pairs: usize,
    /// Logical/generator checks.
    pub stabilizer_logical_pairs: usize,
    /// X̄i/Z̄i checks.
    pub conjugate_pairs: usize,
    /// Checks between different logical pairs.
    pub cross_pairs: usize,
}

impl VerificationReport {
    /// Returns the total number of checks performed.
    pub fn total(&self) -> usize {
        self.generator_pairs + self.stabilizer_logical_pairs + self.conjugate_pairs + self.cross_pairs
    }
}

/// Certifies every commutation relation a code block must satisfy.
///
/// Classes run in a fixed order and the first violation aborts verification.
/// In parallel mode all checks of a class are evaluated on a rayon pool and
/// the sequentially first failing check is reported, so the error is the same
/// as in sequential mode.
#[derive(Debug)]
pub struct CommutationVerifier<'a> {
    group: &'a StabilizerGroup,
    pairs: &'a [LogicalPair],
}

impl<'a> CommutationVerifier<'a> {
    /// Prepares a verifier, rejecting logical operators of the wrong length.
    pub fn new(group: &'a StabilizerGroup, pairs: &'a [LogicalPair]) -> Result<Self, CodeError> {
        for pair in pairs {
            for word in [&pair.x, &pair.z] {
                if word.num_qubits() != group.num_qubits() {
                    let info = ErrorInfo::new("dimension-mismatch", "logical operator has wrong qubit count")
                        .with_context("pair_index", pair.index.to_string())
                        .with_context("expected", group.num_qubits().to_string())
                        .with_context("found", word.num_qubits().to_string());
                    return Err(CodeError::DimensionMismatch(info));
                }
            }
        }
        Ok(Self { group, pairs })
    }

    /// Runs all four classes according to `options`.
    ///
    /// Parallel runs reuse the global rayon pool when its size matches
    /// `threads` and otherwise build a pool for this call; repeated callers
    /// should build one with [`thread_pool`] and use [`Self::verify_in`].
    pub fn verify(&self, options: &SynthesisOptions) -> Result<VerificationReport, CodeError> {
        options.validate()?;
        if !options.parallel_verification {
            return self.run(false);
        }
        if options.threads == rayon::current_num_threads() {
            return self.run(true);
        }
        self.verify_in(&thread_pool(options)?)
    }

    /// Runs all four classes in parallel on a caller-owned pool.
    pub fn verify_in(&self, pool: &rayon::ThreadPool) -> Result<VerificationReport, CodeError> {
        pool.install(|| self.run(true))
    }

    fn run(&self, parallel: bool) -> Result<VerificationReport, CodeError> {
        let mut report = VerificationReport::default();
        for class in [
            RelationClass::GeneratorPairs,
            RelationClass::StabilizerLogical,
            RelationClass::ConjugatePairs,
            RelationClass::CrossPairs,
        ] {
            let checks = self.checks(class);
            let failure = if parallel {
                checks
                    .par_iter()
                    .copied()
                    .find_first(|&(a, b)| self.violates(class, a, b))
            } else {
                checks
                    .iter()
                    .copied()
                    .find(|&(a, b)| self.violates(class, a, b))
            };
            if let Some((a, b)) = failure {
                return Err(self.violation(class, a, b));
            }
            match class {
                RelationClass::GeneratorPairs => report.generator_pairs = checks.len(),
                RelationClass::StabilizerLogical => report.stabilizer_logical_pairs = checks.len(),
                RelationClass::ConjugatePairs => report.conjugate_pairs = checks.len(),
                RelationClass::CrossPairs => report.cross_pairs = checks.len(),
            }
        }
        Ok(report)
    }

    /// Lists the operator pairs of a class in reporting order.
    fn checks(&self, class: RelationClass) -> Vec<(Role, Role)> {
        let generators = self.group.num_generators();
        let logicals = self.pairs.len();
        match class {
            RelationClass::GeneratorPairs => (0..generators)
                .flat_map(|i| (i + 1..generators).map(move |j| (Role::Generator(i), Role::Generator(j))))
                .collect(),
            RelationClass::StabilizerLogical => (0..logicals)
                .flat_map(|i| [Role::LogicalX(i), Role::LogicalZ(i)])
                .flat_map(|logical| (0..generators).map(move |j| (logical, Role::Generator(j))))
                .collect(),
            RelationClass::ConjugatePairs => (0..logicals)
                .map(|i| (Role::LogicalX(i), Role::LogicalZ(i)))
                .collect(),
            RelationClass::CrossPairs => (0..logicals)
                .flat_map(|i| (i + 1..logicals).map(move |j| (i, j)))
                .flat_map(|(i, j)| {
                    [
                        (Role::LogicalX(i), Role::LogicalX(j)),
                        (Role::LogicalZ(i), Role::LogicalZ(j)),
                        (Role::LogicalX(i), Role::LogicalZ(j)),
                        (Role::LogicalZ(i), Role::LogicalX(j)),
                    ]
                })
                .collect(),
        }
    }

    fn operator(&self, role: Role) -> &PauliWord {
        match role {
            Role::Generator(idx) => &self.group.generators()[idx],
            Role::LogicalX(idx) => &self.pairs[idx].x,
            Role::LogicalZ(idx) => &self.pairs[idx].z,
        }
    }

    fn violates(&self, class: RelationClass, a: Role, b: Role) -> bool {
        let anticommute = self.operator(a).anticommutes(self.operator(b));
        anticommute != class.expects_anticommutation()
    }

    fn violation(&self, class: RelationClass, a: Role, b: Role) -> CodeError {
        let message = if class.expects_anticommutation() {
            "logical pair operators commute"
        } else {
            "operators expected to commute anticommute"
        };
        let info = ErrorInfo::new(class.code(), message)
            .with_context("first_role", a.to_string())
            .with_context("second_role", b.to_string())
            .with_context("first_operator", self.operator(a).to_string())
            .with_context("second_operator", self.operator(b).to_string());
        CodeError::CommutationViolation(info)
    }
}

/// Builds the pool parallel verification runs on.
pub fn thread_pool(options: &SynthesisOptions) -> Result<rayon::ThreadPool, CodeError> {
    options.validate()?;
    rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map_err(|err| CodeError::Config(ErrorInfo::new("thread-pool", err.to_string())))
}

/// Verifies `pairs` against `group` with the given options.
pub fn verify(
    group: &StabilizerGroup,
    pairs: &[LogicalPair],
    options: &SynthesisOptions,
) -> Result<VerificationReport, CodeError> {
    CommutationVerifier::new(group, pairs)?.verify(options)
}
