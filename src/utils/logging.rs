// ============================================================================
// Logging Bootstrap
// Installs a tracing-subscriber fmt layer for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber writing events at `level` and above.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
pub fn init_logging(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
