// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Folding reducers.
//!
//! Each reducer drains the sequence and returns a single value. A terminal
//! error simply ends the input; use
//! [`for_each_with_error`](crate::ConsumeExt::for_each_with_error) or the
//! `try_` collectors to observe it.

use strand_core::{into_iter, Numeric, Sequence};

/// Extension trait providing the folding reducers for sequences.
pub trait ReduceExt: Sequence + Sized {
    /// Folds the elements with `f`, using the first element as the starting
    /// accumulator. Returns `None` for an empty sequence.
    ///
    /// ```rust
    /// use strand_ops::ReduceExt;
    /// use strand_source::{empty, seq};
    ///
    /// assert_eq!(seq![1, 2, 3, 4, 5].reduce(|acc, x| acc + x), Some(15));
    /// assert_eq!(seq![7].reduce(|acc, x| acc + x), Some(7));
    /// assert_eq!(empty::<i32>().reduce(|acc, x| acc + x), None);
    /// ```
    fn reduce<F>(self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item;

    /// Folds the elements into `initial` with `f`.
    fn reduce_with_initial<R, F>(self, f: F, initial: R) -> R
    where
        F: FnMut(R, Self::Item) -> R;

    /// Adds up the elements. Integer sums wrap on overflow.
    fn sum(self) -> Self::Item
    where
        Self::Item: Numeric;

    /// Multiplies the elements. Integer products wrap on overflow.
    fn product(self) -> Self::Item
    where
        Self::Item: Numeric;

    /// Smallest element by `<`, the first one if several are equal.
    fn min(self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd;

    /// Smallest element by `less`, the first one if several are equal.
    fn min_func<F>(self, less: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool;

    /// Largest element by `>`, the first one if several are equal.
    fn max(self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd;

    /// Largest element by `greater`, the first one if several are equal.
    ///
    /// ```rust
    /// use strand_ops::ReduceExt;
    /// use strand_source::seq;
    ///
    /// let longest = seq!["aa", "b", "cc"].max_func(|a, b| a.len() > b.len());
    /// assert_eq!(longest, Some("aa"));
    /// ```
    fn max_func<F>(self, greater: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool;
}

impl<S: Sequence> ReduceExt for S {
    fn reduce<F>(self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        into_iter(self).reduce(f)
    }

    fn reduce_with_initial<R, F>(self, f: F, initial: R) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        into_iter(self).fold(initial, f)
    }

    fn sum(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        into_iter(self).fold(<Self::Item as Numeric>::ZERO, Numeric::wrapping_add)
    }

    fn product(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        into_iter(self).fold(<Self::Item as Numeric>::ONE, Numeric::wrapping_mul)
    }

    fn min(self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.min_func(|candidate, best| candidate < best)
    }

    fn min_func<F>(self, mut less: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        into_iter(self).reduce(|best, candidate| {
            if less(&candidate, &best) {
                candidate
            } else {
                best
            }
        })
    }

    fn max(self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        self.max_func(|candidate, best| candidate > best)
    }

    fn max_func<F>(self, greater: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.min_func(greater)
    }
}
