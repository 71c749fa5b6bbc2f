// ============================================================================
// Shared Pair
// Lock-guarded NumericPair for concurrent readers and writers
// ============================================================================

use super::pair::NumericPair;
use crate::interfaces::ArithmeticCapability;
use parking_lot::RwLock;

/// A `NumericPair` behind a reader-writer lock.
///
/// Writers (`clear_real`, `clear_imag`, `set`, `accumulate`) take the lock
/// exclusively; `snapshot` and `add` share it. The capability is still passed
/// per call and is only invoked while the lock is held.
#[derive(Debug)]
pub struct SharedPair<T> {
    inner: RwLock<NumericPair<T>>,
}

impl<T> SharedPair<T> {
    pub fn new(pair: NumericPair<T>) -> Self {
        Self {
            inner: RwLock::new(pair),
        }
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> NumericPair<T>
    where
        T: Clone,
    {
        self.inner.read().clone()
    }

    pub fn clear_real<C>(&self, cap: &C)
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        self.inner.write().clear_real(cap);
    }

    pub fn clear_imag<C>(&self, cap: &C)
    where
        C: ArithmeticCapability<T> + ?Sized,
    {
        self.inner.write().clear_imag(cap);
    }

    pub fn set(&self, other: &NumericPair<T>)
    where
        T: Clone,
    {
        self.inner.write().set(other);
    }

    /// Sum of the current value and `rhs`; the stored value is unchanged.
    pub fn add<C>(&self, rhs: &NumericPair<T>, cap: &C) -> NumericPair<T>
    where
        T: Clone,
        C: ArithmeticCapability<T> + ?Sized,
    {
        self.inner.read().add(rhs, cap)
    }

    /// Replace the stored value with `stored + rhs` under a single write lock
    /// and return the new value.
    pub fn accumulate<C>(&self, rhs: &NumericPair<T>, cap: &C) -> NumericPair<T>
    where
        T: Clone,
        C: ArithmeticCapability<T> + ?Sized,
    {
        let mut guard = self.inner.write();
        let next = guard.add(rhs, cap);
        guard.set(&next);
        next
    }

    pub fn into_inner(self) -> NumericPair<T> {
        self.inner.into_inner()
    }
}

impl<T> From<NumericPair<T>> for SharedPair<T> {
    fn from(pair: NumericPair<T>) -> Self {
        Self::new(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{MaxArithmetic, NativeArithmetic};
    use std::sync::Arc;
    use std::thread;

    const INT: NativeArithmetic<i64> = NativeArithmetic::new();

    #[test]
    fn test_single_threaded_operations() {
        let shared = SharedPair::new(NumericPair::new(3i64, 4));

        assert_eq!(
            shared.add(&NumericPair::new(1, 2), &INT),
            NumericPair::new(4, 6)
        );
        assert_eq!(shared.snapshot(), NumericPair::new(3, 4));

        shared.clear_real(&INT);
        assert_eq!(shared.snapshot(), NumericPair::new(0, 4));

        shared.clear_imag(&MaxArithmetic);
        assert_eq!(shared.snapshot(), NumericPair::new(0, i64::MIN));

        shared.set(&NumericPair::new(9, 9));
        assert_eq!(shared.into_inner(), NumericPair::new(9, 9));
    }

    #[test]
    fn test_accumulate_returns_new_value() {
        let shared = SharedPair::from(NumericPair::new(1i64, 1));
        let next = shared.accumulate(&NumericPair::new(2, 3), &INT);
        assert_eq!(next, NumericPair::new(3, 4));
        assert_eq!(shared.snapshot(), next);
    }

    #[test]
    fn test_concurrent_accumulate() {
        let shared = Arc::new(SharedPair::new(NumericPair::zero_with(&INT)));
        let threads = 8;
        let per_thread = 1_000;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        shared.accumulate(&NumericPair::new(1, 2), &INT);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let total = (threads * per_thread) as i64;
        assert_eq!(shared.snapshot(), NumericPair::new(total, total * 2));
    }
}
