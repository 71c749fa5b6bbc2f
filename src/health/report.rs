// ============================================================================
// Health Report
// Outcome of a health check run
// ============================================================================

use super::failure::{CheckResult, FailureKind};
use arrayvec::ArrayVec;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failures observed during one run of the health checks
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HealthReport {
    /// Unique report identifier
    id: Uuid,

    /// When the run started
    checked_at: DateTime<Utc>,

    /// Failures in the order they were observed
    failures: ArrayVec<FailureKind, 3>,
}

impl HealthReport {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            checked_at: Utc::now(),
            failures: ArrayVec::new(),
        }
    }

    /// Record a failure. Each kind is recorded at most once.
    pub fn record(&mut self, kind: FailureKind) {
        if !self.failures.contains(&kind) {
            self.failures.push(kind);
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    pub fn failures(&self) -> &[FailureKind] {
        &self.failures
    }

    pub fn is_healthy(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first_failure(&self) -> Option<FailureKind> {
        self.failures.first().copied()
    }

    /// `Ok(())` when healthy, otherwise the first failure.
    pub fn into_result(self) -> CheckResult<()> {
        match self.first_failure() {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }
}

impl Default for HealthReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_healthy() {
            return write!(f, "healthy");
        }

        for (i, kind) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}
