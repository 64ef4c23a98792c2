//! Ordering strategies for the array heaps.

use core::cmp::Ordering;

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Greatest element at the root (max-heap).
    #[default]
    Normal,
    /// Least element at the root (min-heap).
    Reverse,
}

/// Total ordering used to arrange heap elements.
pub trait HeapOrder<T> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The element type's own [`Ord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord> HeapOrder<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator closure.
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
