// ============================================================================
// Numeric Pair Library
// Generic real/imaginary pair with injectable arithmetic, plus health checks
// ============================================================================

//! # Numeric Pair
//!
//! Two independent pieces:
//!
//! - **[`NumericPair<T>`](numeric::NumericPair)**: a real and an imaginary
//!   component of the same element type. The element type needs no
//!   arithmetic of its own; zero and addition come from an
//!   [`ArithmeticCapability`](interfaces::ArithmeticCapability) passed to each
//!   call.
//! - **Health checks**: a closed [`FailureKind`](health::FailureKind) taxonomy
//!   (network, disk, internal status) and three checks that always fail with
//!   their kind.
//!
//! ## Example
//!
//! ```rust
//! use numeric_pair::prelude::*;
//!
//! let cap = NativeArithmetic::<i64>::new();
//!
//! let mut a = NumericPair::new(3, 4);
//! let b = NumericPair::new(1, 2);
//! assert_eq!(a.add(&b, &cap), NumericPair::new(4, 6));
//!
//! a.clear_real(&cap);
//! assert_eq!(a, NumericPair::new(0, 4));
//!
//! assert_eq!(network_check(), Err(FailureKind::Network));
//! ```

pub mod health;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::health::{
        disk_check, internal_status_check, network_check, run_check, run_checks, CheckConfig,
        CheckResult, FailureKind, HealthReport,
    };
    pub use crate::interfaces::{
        ArithmeticCapability, CheckedArithmetic, DecimalArithmetic, FnArithmetic,
        LoggingArithmetic, MaxArithmetic, NativeArithmetic,
    };
    pub use crate::numeric::{NumericPair, PairError, PairResult, SharedPair};
}
