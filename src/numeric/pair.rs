// ============================================================================
// Numeric Pair
// Real/imaginary container whose arithmetic is supplied by the caller
// ============================================================================

use super::errors::{PairError, PairResult};
use crate::interfaces::{ArithmeticCapability, CheckedArithmetic};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two components of the same element type: a real and an imaginary part.
///
/// The pair never performs arithmetic on `T` itself. Every operation that
/// needs a zero or a sum takes an [`ArithmeticCapability`] argument, and the
/// capability is never stored, so a call only ever sees the capability it was
/// handed.
///
/// # Example
/// ```
/// use numeric_pair::interfaces::NativeArithmetic;
/// use numeric_pair::numeric::NumericPair;
///
/// let cap = NativeArithmetic::<i64>::new();
/// let a = NumericPair::new(3, 4);
/// let b = NumericPair::new(1, 2);
///
/// assert_eq!(a.add(&b, &cap), NumericPair::new(4, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericPair<T> {
    real: T,
    imag: T,
}

impl<T> NumericPair<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a pair from its components, stored verbatim.
    #[inline]
    pub const fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    /// The imaginary unit `0 + 1i`, built from caller-supplied zero and one.
    ///
    /// There is no global `I` constant since the element type has no built-in
    /// zero or one.
    #[inline]
    pub const fn imaginary_unit(zero: T, one: T) -> Self {
        Self::new(zero, one)
    }

    /// The imaginary unit with the zero taken from a capability.
    pub fn imaginary_unit_with<C>(cap: &C, one: T) -> Self
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        Self::new(cap.zero(), one)
    }

    /// A pair whose components are both `cap.zero()`.
    pub fn zero_with<C>(cap: &C) -> Self
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        Self::new(cap.zero(), cap.zero())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn real(&self) -> &T {
        &self.real
    }

    #[inline]
    pub const fn imag(&self) -> &T {
        &self.imag
    }

    /// Consume the pair, returning `(real, imag)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.real, self.imag)
    }

    // ========================================================================
    // In-place Mutation
    // ========================================================================

    /// Reset the real component to `cap.zero()`.
    #[inline]
    pub fn clear_real<C>(&mut self, cap: &C)
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        self.real = cap.zero();
    }

    /// Reset the imaginary component to `cap.zero()`.
    #[inline]
    pub fn clear_imag<C>(&mut self, cap: &C)
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        self.imag = cap.zero();
    }

    /// Overwrite both components with copies of `other`'s.
    #[inline]
    pub fn set(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.real = other.real.clone();
        self.imag = other.imag.clone();
    }

    /// Like [`clear_real`](Self::clear_real), but the capability may be absent.
    ///
    /// # Errors
    /// Returns `MissingCapability` if `cap` is `None`; the pair is unchanged.
    pub fn try_clear_real<C>(&mut self, cap: Option<&C>) -> PairResult<()>
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        let cap = cap.ok_or(PairError::MissingCapability)?;
        self.clear_real(cap);
        Ok(())
    }

    /// Like [`clear_imag`](Self::clear_imag), but the capability may be absent.
    ///
    /// # Errors
    /// Returns `MissingCapability` if `cap` is `None`; the pair is unchanged.
    pub fn try_clear_imag<C>(&mut self, cap: Option<&C>) -> PairResult<()>
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        let cap = cap.ok_or(PairError::MissingCapability)?;
        self.clear_imag(cap);
        Ok(())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Component-wise sum, returned as a new pair.
    ///
    /// Calls `cap.add` exactly twice: once for the real parts, once for the
    /// imaginary parts. Neither operand is modified.
    #[inline]
    pub fn add<C>(&self, rhs: &Self, cap: &C) -> Self
    where
        T: Clone,
        C: ArithmeticCapability<T> + ?Sized,
    {
        Self::new(
            cap.add(self.real.clone(), rhs.real.clone()),
            cap.add(self.imag.clone(), rhs.imag.clone()),
        )
    }

    /// Like [`add`](Self::add), but the capability may be absent.
    ///
    /// # Errors
    /// Returns `MissingCapability` if `cap` is `None`.
    pub fn try_add<C>(&self, rhs: &Self, cap: Option<&C>) -> PairResult<Self>
    where
        T: Clone,
        C: ArithmeticCapability<T> + ?Sized,
    {
        let cap = cap.ok_or(PairError::MissingCapability)?;
        Ok(self.add(rhs, cap))
    }

    /// Component-wise sum through a range-checked capability.
    ///
    /// # Errors
    /// Propagates the capability's `Overflow`/`Underflow` from whichever
    /// component fails first (real before imaginary).
    pub fn checked_add<C>(&self, rhs: &Self, cap: &C) -> PairResult<Self>
    where
        T: Clone,
        C: CheckedArithmetic<T> + ?Sized,
    {
        let real = cap.checked_add(self.real.clone(), rhs.real.clone())?;
        let imag = cap.checked_add(self.imag.clone(), rhs.imag.clone())?;
        Ok(Self::new(real, imag))
    }

    /// Sum an iterator of pairs, starting from [`zero_with`](Self::zero_with).
    pub fn sum<'a, I, C>(pairs: I, cap: &C) -> Self
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a Self>,
        C: ArithmeticCapability<T> + ?Sized,
    {
        pairs
            .into_iter()
            .fold(Self::zero_with(cap), |acc, pair| acc.add(pair, cap))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> From<(T, T)> for NumericPair<T> {
    #[inline]
    fn from((real, imag): (T, T)) -> Self {
        Self::new(real, imag)
    }
}

impl<T> From<NumericPair<T>> for (T, T) {
    #[inline]
    fn from(pair: NumericPair<T>) -> Self {
        pair.into_parts()
    }
}

impl<T: fmt::Display> fmt::Display for NumericPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imag)
    }
}

// ============================================================================
// Tests
// ============================================================================
