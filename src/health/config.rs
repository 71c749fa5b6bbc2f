// ============================================================================
// Health Check Configuration
// Which checks to run, in which order, and whether to stop early
// ============================================================================

use super::failure::FailureKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a health check run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckConfig {
    /// Checks to run, in order
    checks: Vec<FailureKind>,

    /// Stop after the first failing check instead of collecting all
    fail_fast: bool,
}

impl CheckConfig {
    /// Create a configuration running `checks` in the given order
    pub fn new(checks: Vec<FailureKind>) -> Self {
        Self {
            checks,
            fail_fast: false,
        }
    }

    /// Builder method: Stop at the first failure
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Builder method: Append a check
    pub fn with_check(mut self, kind: FailureKind) -> Self {
        self.checks.push(kind);
        self
    }

    pub fn checks(&self) -> &[FailureKind] {
        &self.checks
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.checks.is_empty() {
            return Err("At least one check must be configured".to_string());
        }

        for (i, kind) in self.checks.iter().enumerate() {
            if self.checks[..i].contains(kind) {
                return Err(format!("Check '{}' is configured more than once", kind.as_str()));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CheckConfig {
    /// Every check, collecting all failures
    pub fn all() -> Self {
        Self::new(FailureKind::ALL.to_vec())
    }

    /// A single check
    pub fn only(kind: FailureKind) -> Self {
        Self::new(vec![kind])
    }

    /// Every check, stopping at the first failure
    pub fn startup_gate() -> Self {
        Self::all().with_fail_fast(true)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::all()
    }
}
