// ============================================================================
// Health Checks
// Forced-failure probes and the runner that aggregates them
// ============================================================================

use super::config::CheckConfig;
use super::failure::{CheckResult, FailureKind};
use super::report::HealthReport;

/// Network probe. Always fails with `FailureKind::Network`.
pub fn network_check() -> CheckResult<()> {
    signal(FailureKind::Network)
}

/// Disk probe. Always fails with `FailureKind::Disk`.
pub fn disk_check() -> CheckResult<()> {
    signal(FailureKind::Disk)
}

/// Internal status probe. Always fails with `FailureKind::InternalStatus`.
pub fn internal_status_check() -> CheckResult<()> {
    signal(FailureKind::InternalStatus)
}

/// Run the probe associated with `kind`.
pub fn run_check(kind: FailureKind) -> CheckResult<()> {
    match kind {
        FailureKind::Network => network_check(),
        FailureKind::Disk => disk_check(),
        FailureKind::InternalStatus => internal_status_check(),
    }
}

/// Run every check named in `config`, in order, and collect the failures.
///
/// With `fail_fast` set the run stops after the first failure.
///
/// # Errors
/// Returns the validation message if `config` is invalid (for example an
/// empty check list); no checks run in that case.
pub fn run_checks(config: &CheckConfig) -> Result<HealthReport, String> {
    config.validate()?;

    let mut report = HealthReport::new();

    for &kind in config.checks() {
        if let Err(failure) = run_check(kind) {
            report.record(failure);
            if config.fail_fast() {
                break;
            }
        }
    }

    if !report.is_healthy() {
        tracing::warn!(
            report_id = %report.id(),
            failures = report.failures().len(),
            "health checks failed: {}",
            report
        );
    }

    Ok(report)
}

#[inline]
fn signal(kind: FailureKind) -> CheckResult<()> {
    tracing::debug!(check = kind.as_str(), "health check signalled failure");
    Err(kind)
}
