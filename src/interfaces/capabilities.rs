// ============================================================================
// Stock Arithmetic Capabilities
// Ready-made zero/add providers for common element types
// ============================================================================

use super::arithmetic::{ArithmeticCapability, CheckedArithmetic};
use crate::numeric::{PairError, PairResult};
use rust_decimal::Decimal;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

// ============================================================================
// Native Arithmetic
// ============================================================================

/// Capability backed by the element type's own `Add` and `Default`.
///
/// `zero()` is `T::default()`. `add` behaves like the underlying `+`, so
/// primitive integers panic on overflow in debug builds. For the primitive
/// numeric types `checked_add` reports `Overflow`/`Underflow` instead.
pub struct NativeArithmetic<T>(PhantomData<fn() -> T>);

impl<T> NativeArithmetic<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for NativeArithmetic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NativeArithmetic<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NativeArithmetic<T> {}

impl<T> fmt::Debug for NativeArithmetic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeArithmetic<{}>", std::any::type_name::<T>())
    }
}

impl<T> ArithmeticCapability<T> for NativeArithmetic<T>
where
    T: Add<Output = T> + Default,
{
    #[inline]
    fn zero(&self) -> T {
        T::default()
    }

    #[inline]
    fn add(&self, left: T, right: T) -> T {
        left + right
    }
}

// Signed integers: a failed sum went past MIN when the addend is negative
macro_rules! checked_native_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedArithmetic<$t> for NativeArithmetic<$t> {
                #[inline]
                fn checked_add(&self, left: $t, right: $t) -> PairResult<$t> {
                    left.checked_add(right).ok_or(if right < 0 {
                        PairError::Underflow
                    } else {
                        PairError::Overflow
                    })
                }
            }
        )*
    };
}

macro_rules! checked_native_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedArithmetic<$t> for NativeArithmetic<$t> {
                #[inline]
                fn checked_add(&self, left: $t, right: $t) -> PairResult<$t> {
                    left.checked_add(right).ok_or(PairError::Overflow)
                }
            }
        )*
    };
}

// Floats never panic; a sum that leaves the finite range is reported instead
// of returning an infinity
macro_rules! checked_native_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedArithmetic<$t> for NativeArithmetic<$t> {
                #[inline]
                fn checked_add(&self, left: $t, right: $t) -> PairResult<$t> {
                    let sum = left + right;
                    if sum.is_finite() || !left.is_finite() || !right.is_finite() {
                        Ok(sum)
                    } else if sum < 0.0 {
                        Err(PairError::Underflow)
                    } else {
                        Err(PairError::Overflow)
                    }
                }
            }
        )*
    };
}

checked_native_signed!(i8, i16, i32, i64, i128, isize);
checked_native_unsigned!(u8, u16, u32, u64, u128, usize);
checked_native_float!(f32, f64);

// ============================================================================
// Decimal Arithmetic
// ============================================================================

/// Capability over `rust_decimal::Decimal` with range-checked addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalArithmetic;

impl ArithmeticCapability<Decimal> for DecimalArithmetic {
    #[inline]
    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    // Panics on overflow, same as Decimal's `+`
    #[inline]
    fn add(&self, left: Decimal, right: Decimal) -> Decimal {
        left + right
    }
}

impl CheckedArithmetic<Decimal> for DecimalArithmetic {
    #[inline]
    fn checked_add(&self, left: Decimal, right: Decimal) -> PairResult<Decimal> {
        left.checked_add(right).ok_or_else(|| {
            if right.is_sign_negative() {
                PairError::Underflow
            } else {
                PairError::Overflow
            }
        })
    }
}

// ============================================================================
// Max-Plus Arithmetic
// ============================================================================

/// Max-plus ("tropical") capability over `i64`.
///
/// "Addition" is `max` and the neutral element is `i64::MIN`. Same element
/// type as the native integer capability, different semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxArithmetic;

impl ArithmeticCapability<i64> for MaxArithmetic {
    #[inline]
    fn zero(&self) -> i64 {
        i64::MIN
    }

    #[inline]
    fn add(&self, left: i64, right: i64) -> i64 {
        left.max(right)
    }
}

impl CheckedArithmetic<i64> for MaxArithmetic {}

// ============================================================================
// Closure-Backed Arithmetic
// ============================================================================

/// Capability assembled from a zero closure and an add closure.
///
/// # Example
/// ```
/// use numeric_pair::interfaces::{ArithmeticCapability, FnArithmetic};
///
/// let wrapping = FnArithmetic::new(|| 0u8, |a: u8, b: u8| a.wrapping_add(b));
/// assert_eq!(wrapping.add(250, 10), 4);
/// ```
#[derive(Clone, Copy)]
pub struct FnArithmetic<Z, A> {
    zero_fn: Z,
    add_fn: A,
}

impl<Z, A> FnArithmetic<Z, A> {
    pub fn new(zero_fn: Z, add_fn: A) -> Self {
        Self { zero_fn, add_fn }
    }
}

impl<Z, A> fmt::Debug for FnArithmetic<Z, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnArithmetic").finish_non_exhaustive()
    }
}

impl<T, Z, A> ArithmeticCapability<T> for FnArithmetic<Z, A>
where
    Z: Fn() -> T,
    A: Fn(T, T) -> T,
{
    #[inline]
    fn zero(&self) -> T {
        (self.zero_fn)()
    }

    #[inline]
    fn add(&self, left: T, right: T) -> T {
        (self.add_fn)(left, right)
    }
}

impl<T, Z, A> CheckedArithmetic<T> for FnArithmetic<Z, A>
where
    Z: Fn() -> T,
    A: Fn(T, T) -> T,
{
}

// ============================================================================
// Logging Decorator
// ============================================================================

/// Decorator that traces every capability call before delegating.
#[derive(Debug, Clone, Copy)]
pub struct LoggingArithmetic<C> {
    inner: C,
    label: &'static str,
}

impl<C> LoggingArithmetic<C> {
    pub fn new(label: &'static str, inner: C) -> Self {
        Self { inner, label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> ArithmeticCapability<T> for LoggingArithmetic<C>
where
    T: fmt::Debug,
    C: ArithmeticCapability<T>,
{
    fn zero(&self) -> T {
        let zero = self.inner.zero();
        tracing::trace!(capability = self.label, ?zero, "capability zero");
        zero
    }

    fn add(&self, left: T, right: T) -> T {
        tracing::trace!(capability = self.label, ?left, ?right, "capability add");
        self.inner.add(left, right)
    }
}

impl<T, C> CheckedArithmetic<T> for LoggingArithmetic<C>
where
    T: fmt::Debug,
    C: CheckedArithmetic<T>,
{
    fn checked_add(&self, left: T, right: T) -> PairResult<T> {
        tracing::trace!(capability = self.label, ?left, ?right, "capability checked_add");
        let result = self.inner.checked_add(left, right);
        if let Err(error) = &result {
            tracing::debug!(capability = self.label, %error, "checked add rejected");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_native_integers() {
        let cap = NativeArithmetic::<i64>::new();
        assert_eq!(cap.zero(), 0);
        assert_eq!(cap.add(3, 4), 7);
        assert_eq!(cap.checked_add(-3, 1), Ok(-2));
    }

    #[test]
    fn test_native_checked_integer_bounds() {
        let cap = NativeArithmetic::<i64>::new();
        assert_eq!(cap.checked_add(i64::MAX, 1), Err(PairError::Overflow));
        assert_eq!(cap.checked_add(i64::MIN, -1), Err(PairError::Underflow));
        assert_eq!(cap.checked_add(i64::MAX, -1), Ok(i64::MAX - 1));
        assert_eq!(cap.checked_add(i64::MIN, 0), Ok(i64::MIN));

        let unsigned = NativeArithmetic::<u8>::new();
        assert_eq!(unsigned.checked_add(u8::MAX, 1), Err(PairError::Overflow));
        assert_eq!(unsigned.checked_add(200, 55), Ok(255));
    }

    #[test]
    fn test_native_checked_float_range() {
        let cap = NativeArithmetic::<f64>::new();
        assert_eq!(cap.checked_add(f64::MAX, f64::MAX), Err(PairError::Overflow));
        assert_eq!(cap.checked_add(f64::MIN, f64::MIN), Err(PairError::Underflow));
        assert_eq!(cap.checked_add(1.5, 0.25), Ok(1.75));
        // already infinite inputs are not a range failure of the sum
        assert_eq!(cap.checked_add(f64::INFINITY, 1.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_native_floats() {
        let cap = NativeArithmetic::<f64>::default();
        assert_eq!(cap.zero(), 0.0);
        assert!((cap.add(0.5, 0.25) - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_native_debug_names_element_type() {
        let cap = NativeArithmetic::<i32>::new();
        assert_eq!(format!("{:?}", cap), "NativeArithmetic<i32>");
    }

    #[test]
    fn test_decimal_add() {
        let cap = DecimalArithmetic;
        assert_eq!(cap.zero(), Decimal::ZERO);
        assert_eq!(
            cap.add(Decimal::new(125, 2), Decimal::new(75, 2)),
            Decimal::new(2, 0)
        );
    }

    #[test]
    fn test_decimal_checked_overflow() {
        let cap = DecimalArithmetic;
        assert_eq!(
            cap.checked_add(Decimal::MAX, Decimal::ONE),
            Err(PairError::Overflow)
        );
        assert_eq!(
            cap.checked_add(Decimal::MIN, Decimal::NEGATIVE_ONE),
            Err(PairError::Underflow)
        );
        assert_eq!(
            cap.checked_add(Decimal::ONE, Decimal::ONE),
            Ok(Decimal::TWO)
        );
    }

    #[test]
    fn test_max_plus_semantics() {
        let cap = MaxArithmetic;
        assert_eq!(cap.zero(), i64::MIN);
        assert_eq!(cap.add(3, -8), 3);
        // zero is the identity
        assert_eq!(cap.add(cap.zero(), -8), -8);
    }

    #[test]
    fn test_fn_arithmetic_uses_closures() {
        let cap = FnArithmetic::new(|| 1i32, |a: i32, b: i32| a * b);
        assert_eq!(cap.zero(), 1);
        assert_eq!(cap.add(6, 7), 42);
    }

    #[test]
    fn test_fn_arithmetic_zero_is_asked_every_time() {
        let calls = Cell::new(0u32);
        let cap = FnArithmetic::new(
            || {
                calls.set(calls.get() + 1);
                calls.get()
            },
            |a: u32, b: u32| a + b,
        );

        assert_eq!(cap.zero(), 1);
        assert_eq!(cap.zero(), 2);
    }

    #[test]
    fn test_logging_delegates() {
        let cap = LoggingArithmetic::new("native", NativeArithmetic::<i64>::new());
        assert_eq!(cap.label(), "native");
        assert_eq!(cap.zero(), 0);
        assert_eq!(cap.add(2, 2), 4);
    }

    #[test]
    fn test_logging_checked_passes_errors_through() {
        let cap = LoggingArithmetic::new("decimal", DecimalArithmetic);
        assert_eq!(
            cap.checked_add(Decimal::MAX, Decimal::MAX),
            Err(PairError::Overflow)
        );
        assert_eq!(cap.into_inner(), DecimalArithmetic);
    }

    #[cfg(feature = "logging")]
    mod traced {
        use super::*;
        use parking_lot::Mutex;
        use std::fmt::Write as _;
        use std::sync::Arc;
        use tracing::field::{Field, Visit};
        use tracing::{Event, Subscriber};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        /// Layer that keeps `"<capability>: <message>"` for every event.
        #[derive(Clone, Default)]
        struct Recorder(Arc<Mutex<Vec<String>>>);

        #[derive(Default)]
        struct Fields {
            capability: String,
            message: String,
        }

        impl Visit for Fields {
            fn record_str(&mut self, field: &Field, value: &str) {
                if field.name() == "capability" {
                    self.capability = value.to_string();
                }
            }

            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                if field.name() == "message" {
                    let _ = write!(self.message, "{:?}", value);
                }
            }
        }

        impl<S: Subscriber> Layer<S> for Recorder {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = Fields::default();
                event.record(&mut fields);
                self.0
                    .lock()
                    .push(format!("{}: {}", fields.capability, fields.message));
            }
        }

        #[test]
        fn test_logging_emits_trace_per_call() {
            let recorder = Recorder::default();
            let subscriber = tracing_subscriber::registry().with(recorder.clone());
            let cap = LoggingArithmetic::new("native", NativeArithmetic::<i64>::new());

            tracing::subscriber::with_default(subscriber, || {
                assert_eq!(cap.zero(), 0);
                assert_eq!(cap.add(2, 3), 5);
                assert_eq!(cap.checked_add(i64::MAX, 1), Err(PairError::Overflow));
            });

            assert_eq!(
                *recorder.0.lock(),
                vec![
                    "native: capability zero".to_string(),
                    "native: capability add".to_string(),
                    "native: capability checked_add".to_string(),
                    "native: checked add rejected".to_string(),
                ]
            );
        }
    }
}
