// ============================================================================
// Interfaces Module
// Contains the arithmetic capability contract and its stock implementations
// ============================================================================

mod arithmetic;
mod capabilities;

pub use arithmetic::{ArithmeticCapability, CheckedArithmetic};
pub use capabilities::{
    DecimalArithmetic, FnArithmetic, LoggingArithmetic, MaxArithmetic, NativeArithmetic,
};
