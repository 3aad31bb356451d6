// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sorting operators.
//!
//! Sorting needs every element, so these operators drain their source on the
//! first `advance()` and then replay the sorted elements. A source that ends
//! with an error still has its elements sorted and replayed; the error is
//! reported once the replay is done.
//!
//! ```rust
//! use strand_ops::SortExt;
//! use strand_source::seq;
//! use strand_test_utils::assert_sequence_eq;
//!
//! assert_sequence_eq(seq![3, 1, 2].sort(), &[1, 2, 3]);
//! assert_sequence_eq(seq![3, 1, 2].sort_func(|a, b| b.cmp(a)), &[3, 2, 1]);
//! ```

use std::cmp::Ordering;
use strand_core::{into_iter, Sequence, SequenceError};
use strand_source::{from_vec, SliceSource};

/// Sequence returned by the [`SortExt`] operators.
#[derive(Debug, Clone)]
pub struct Sort<S: Sequence, C>
where
    S::Item: Clone + 'static,
{
    source: S,
    cmp: C,
    stable: bool,
    sorted: Option<SliceSource<'static, S::Item>>,
}

impl<S, C> Sort<S, C>
where
    S: Sequence,
    S::Item: Clone + 'static,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fn materialize(&mut self) -> SliceSource<'static, S::Item> {
        let mut items: Vec<S::Item> = into_iter(&mut self.source).collect();
        let cmp = &mut self.cmp;
        if self.stable {
            items.sort_by(|a, b| cmp(a, b));
        } else {
            items.sort_unstable_by(|a, b| cmp(a, b));
        }
        from_vec(items)
    }
}

impl<S, C> Sequence for Sort<S, C>
where
    S: Sequence,
    S::Item: Clone + 'static,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.sorted.is_none() {
            self.sorted = Some(self.materialize());
        }
        self.sorted.as_mut().is_some_and(Sequence::advance)
    }

    fn current(&mut self) -> S::Item {
        match self.sorted.as_mut() {
            Some(sorted) => sorted.current(),
            None => panic!("current() called without a successful advance()"),
        }
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the sorting operators for sequences.
pub trait SortExt: Sequence + Sized
where
    Self::Item: Clone,
{
    /// Sorts the elements in ascending order. Not stable.
    fn sort(self) -> Sort<Self, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self::Item: Ord;

    /// Sorts the elements with `cmp`. Not stable.
    fn sort_func<C>(self, cmp: C) -> Sort<Self, C>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering;

    /// Sorts the elements with `cmp`, keeping equal elements in their
    /// original order.
    ///
    /// ```rust
    /// use strand_ops::SortExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// let by_length = seq!["ccc", "a", "bb", "b", "aa"].sort_stable_func(|a, b| a.len().cmp(&b.len()));
    /// assert_sequence_eq(by_length, &["a", "b", "bb", "aa", "ccc"]);
    /// ```
    fn sort_stable_func<C>(self, cmp: C) -> Sort<Self, C>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<S> SortExt for S
where
    S: Sequence,
    S::Item: Clone,
{
    fn sort(self) -> Sort<Self, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self::Item: Ord,
    {
        self.sort_func(Ord::cmp as fn(&Self::Item, &Self::Item) -> Ordering)
    }

    fn sort_func<C>(self, cmp: C) -> Sort<Self, C>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Sort {
            source: self,
            cmp,
            stable: false,
            sorted: None,
        }
    }

    fn sort_stable_func<C>(self, cmp: C) -> Sort<Self, C>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Sort {
            source: self,
            cmp,
            stable: true,
            sorted: None,
        }
    }
}
