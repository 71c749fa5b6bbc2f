// ============================================================================
// Arithmetic Capability Interface
// Defines the contract for injecting zero/add into generic containers
// ============================================================================

use crate::numeric::PairResult;

/// Capability object supplying the additive identity and the addition rule
/// for an element type `T`.
///
/// Containers such as [`NumericPair`](crate::numeric::NumericPair) never do
/// arithmetic on `T` directly. The caller passes a capability into every
/// operation that needs one, so the same element type can be combined under
/// different semantics (ordinary sum, max-plus, modular, ...).
///
/// The algebraic expectations (`add` associative and commutative, `zero` an
/// identity for `add`) are not checked.
pub trait ArithmeticCapability<T> {
    /// The neutral element for `add`
    fn zero(&self) -> T;

    /// Combine two elements
    fn add(&self, left: T, right: T) -> T;
}

/// Extension for capabilities whose addition can fail.
///
/// The default implementation assumes `add` is total and wraps it in `Ok`.
pub trait CheckedArithmetic<T>: ArithmeticCapability<T> {
    /// Combine two elements, reporting out-of-range results as errors
    fn checked_add(&self, left: T, right: T) -> PairResult<T> {
        Ok(self.add(left, right))
    }
}

impl<T, C> ArithmeticCapability<T> for &C
where
    C: ArithmeticCapability<T> + ?Sized,
{
    #[inline]
    fn zero(&self) -> T {
        (**self).zero()
    }

    #[inline]
    fn add(&self, left: T, right: T) -> T {
        (**self).add(left, right)
    }
}

impl<T, C> CheckedArithmetic<T> for &C
where
    C: CheckedArithmetic<T> + ?Sized,
{
    #[inline]
    fn checked_add(&self, left: T, right: T) -> PairResult<T> {
        (**self).checked_add(left, right)
    }
}
