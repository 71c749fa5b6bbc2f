// ============================================================================
// Numeric Module
// Generic real/imaginary pair with caller-supplied arithmetic
// ============================================================================
//
// This module provides:
// - NumericPair<T>: two same-typed components, arithmetic via a capability
// - SharedPair<T>: NumericPair behind a reader-writer lock
// - PairError: Error types for pair operations
//
// Design principles:
// - No arithmetic on T itself; zero/add always come from the caller
// - Capabilities are passed per call, never stored
// - Fallible entry points return Result (no panics)

mod errors;
mod pair;
mod shared;

pub use errors::{PairError, PairResult};
pub use pair::NumericPair;
pub use shared::SharedPair;
