use serde::{Deserialize, Serialize};
use stab_core::{CodeError, ErrorInfo};

/// Options controlling group validation, synthesis and verification.
///
/// Loadable from YAML or JSON; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Accept codes with no logical qubits instead of failing with `DegenerateCode`.
    #[serde(default)]
    pub allow_trivial: bool,
    /// Validate and rank pure X/Z generator sets through `Hx · Hzᵀ`.
    #[serde(default = "default_css_fast_path")]
    pub css_fast_path: bool,
    /// Run the pairwise commutation checks on a rayon pool.
    #[serde(default)]
    pub parallel_verification: bool,
    /// Worker threads used when verification runs in parallel.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_css_fast_path() -> bool {
    true
}

fn default_threads() -> usize {
    1
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            allow_trivial: false,
            css_fast_path: default_css_fast_path(),
            parallel_verification: false,
            threads: default_threads(),
        }
    }
}

impl SynthesisOptions {
    /// Parses options from a YAML document.
    pub fn from_yaml_str(data: &str) -> Result<Self, CodeError> {
        let options: Self = serde_yaml::from_str(data)
            .map_err(|err| CodeError::Config(ErrorInfo::new("yaml-deserialize", err.to_string())))?;
        options.validate()?;
        Ok(options)
    }

    /// Parses options from a JSON document.
    pub fn from_json_str(data: &str) -> Result<Self, CodeError> {
        let options: Self = serde_json::from_str(data)
            .map_err(|err| CodeError::Config(ErrorInfo::new("json-deserialize", err.to_string())))?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects settings that cannot be honoured.
    pub fn validate(&self) -> Result<(), CodeError> {
        if self.threads == 0 {
            let info = ErrorInfo::new("zero-threads", "verification needs at least one thread")
                .with_hint("set `threads` to 1 or more");
            return Err(CodeError::Config(info));
        }
        Ok(())
    }
}
