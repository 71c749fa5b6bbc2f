// ============================================================================
// Health Module
// Failure taxonomy and the forced-failure checks that signal it
// ============================================================================
//
// The checks perform no real probing: each one unconditionally returns its
// failure kind. Callers get the error directly and decide what to do with it.

mod checks;
mod config;
mod failure;
mod report;

pub use checks::{disk_check, internal_status_check, network_check, run_check, run_checks};
pub use config::CheckConfig;
pub use failure::{CheckResult, FailureKind};
pub use report::HealthReport;
