//! Structured error types shared across the stabilizer crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable payload carried by every [`CodeError`] variant.
///
/// `code` is a stable kebab-case identifier; `context` names the indices,
/// lengths and operator strings involved so a caller can fix its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case identifier, e.g. `generators-anticommute`.
    pub code: String,
    /// One-line description for humans.
    pub message: String,
    /// Offending indices, lengths and operators keyed by name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix, when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a payload with an empty context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one context entry, replacing any previous value for `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for stabilizer code construction.
///
/// None of these failures are transient: every variant is a deterministic
/// function of the input and retrying cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CodeError {
    /// Bit vectors or operators of inconsistent length.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(ErrorInfo),
    /// Supplied generators do not mutually commute.
    #[error("invalid stabilizer group: {0}")]
    InvalidStabilizerGroup(ErrorInfo),
    /// The code encodes no logical qubits.
    #[error("degenerate code: {0}")]
    DegenerateCode(ErrorInfo),
    /// Logical synthesis could not produce the expected number of pairs.
    #[error("insufficient logical space: {0}")]
    InsufficientLogicalSpace(ErrorInfo),
    /// Post-hoc verification found a broken commutation relation.
    #[error("commutation violation: {0}")]
    CommutationViolation(ErrorInfo),
    /// Malformed generator description.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Invalid synthesis options.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Layout collaborator could not place a qubit.
    #[error("layout error: {0}")]
    Layout(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl CodeError {
    /// Borrows the payload of whichever variant this is.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CodeError::DimensionMismatch(info)
            | CodeError::InvalidStabilizerGroup(info)
            | CodeError::DegenerateCode(info)
            | CodeError::InsufficientLogicalSpace(info)
            | CodeError::CommutationViolation(info)
            | CodeError::Parse(info)
            | CodeError::Config(info)
            | CodeError::Layout(info)
            | CodeError::Serde(info) => info,
        }
    }

    /// Shorthand for a [`CodeError::DimensionMismatch`] carrying both lengths.
    pub fn dimension_mismatch(what: &str, expected: usize, found: usize) -> Self {
        CodeError::DimensionMismatch(
            ErrorInfo::new("dimension-mismatch", format!("{what} has inconsistent length"))
                .with_context("expected", expected.to_string())
                .with_context("found", found.to_string()),
        )
    }
}
