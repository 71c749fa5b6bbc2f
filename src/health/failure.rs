// ============================================================================
// Failure Kinds
// Closed set of failures signalled by the health checks
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which health check failed. Carries no payload beyond its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FailureKind {
    /// Network reachability check failed
    Network,
    /// Disk availability check failed
    Disk,
    /// Internal status check failed
    InternalStatus,
}

impl FailureKind {
    /// Every failure kind, in check order.
    pub const ALL: [FailureKind; 3] = [
        FailureKind::Network,
        FailureKind::Disk,
        FailureKind::InternalStatus,
    ];

    /// Short machine-friendly name, used as a structured log field.
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Disk => "disk",
            FailureKind::InternalStatus => "internal_status",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network failure"),
            FailureKind::Disk => write!(f, "disk failure"),
            FailureKind::InternalStatus => write!(f, "internal status failure"),
        }
    }
}

impl std::error::Error for FailureKind {}

/// Result type alias for health checks
pub type CheckResult<T> = Result<T, FailureKind>;
