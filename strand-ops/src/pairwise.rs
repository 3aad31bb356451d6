// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two-source zips yielding [`Pair`]s.
//!
//! Unlike [`zip`](crate::zip), the two sources may have different element
//! types, and elements are owned values rather than a reused buffer.

use strand_core::{Pair, Sequence, SequenceError};

/// Sequence returned by [`PairwiseExt::pairwise`].
#[derive(Debug, Clone)]
pub struct Pairwise<A, B> {
    first: A,
    second: B,
    done: bool,
}

impl<A: Sequence, B: Sequence> Sequence for Pairwise<A, B> {
    type Item = Pair<A::Item, B::Item>;

    fn advance(&mut self) -> bool {
        if self.done || !self.first.advance() || !self.second.advance() {
            self.done = true;
            return false;
        }
        true
    }

    fn current(&mut self) -> Self::Item {
        Pair::new(self.first.current(), self.second.current())
    }

    fn error(&self) -> Option<&SequenceError> {
        self.first.error().or_else(|| self.second.error())
    }

    fn current_copy(&mut self) -> Self::Item {
        Pair::new(self.first.current_copy(), self.second.current_copy())
    }
}

/// Sequence returned by [`PairwiseExt::pairwise_longest`].
#[derive(Debug, Clone)]
pub struct PairwiseLongest<A: Sequence, B: Sequence> {
    first: A,
    second: B,
    fill_first: A::Item,
    fill_second: B::Item,
    first_live: bool,
    second_live: bool,
}

impl<A, B> Sequence for PairwiseLongest<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = Pair<A::Item, B::Item>;

    fn advance(&mut self) -> bool {
        if self.first_live {
            self.first_live = self.first.advance();
        }
        if self.second_live {
            self.second_live = self.second.advance();
        }
        self.first_live || self.second_live
    }

    fn current(&mut self) -> Self::Item {
        let first = if self.first_live {
            self.first.current()
        } else {
            self.fill_first.clone()
        };
        let second = if self.second_live {
            self.second.current()
        } else {
            self.fill_second.clone()
        };
        Pair::new(first, second)
    }

    fn error(&self) -> Option<&SequenceError> {
        if self.first_live || self.second_live {
            None
        } else {
            self.first.error().or_else(|| self.second.error())
        }
    }
}

/// Extension trait providing the pairwise operators for sequences.
pub trait PairwiseExt: Sequence + Sized {
    /// Pairs up elements of `self` and `other`, stopping at the shorter one.
    ///
    /// `other` is not advanced once `self` is exhausted.
    ///
    /// ```rust
    /// use strand_core::Pair;
    /// use strand_ops::PairwiseExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(seq![1, 2, 3].pairwise(seq!["a"]), &[Pair::new(1, "a")]);
    /// ```
    fn pairwise<B: Sequence>(self, other: B) -> Pairwise<Self, B>;

    /// Pairs up elements of `self` and `other` until both are exhausted,
    /// substituting `fill_first` or `fill_second` for a side that ran out.
    ///
    /// ```rust
    /// use strand_core::Pair;
    /// use strand_ops::PairwiseExt;
    /// use strand_source::{empty, seq};
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(
    ///     empty::<i32>().pairwise_longest(seq!["a", "b"], 0, "-"),
    ///     &[Pair::new(0, "a"), Pair::new(0, "b")],
    /// );
    /// ```
    fn pairwise_longest<B: Sequence>(
        self,
        other: B,
        fill_first: Self::Item,
        fill_second: B::Item,
    ) -> PairwiseLongest<Self, B>;
}

impl<S: Sequence> PairwiseExt for S {
    fn pairwise<B: Sequence>(self, other: B) -> Pairwise<Self, B> {
        Pairwise {
            first: self,
            second: other,
            done: false,
        }
    }

    fn pairwise_longest<B: Sequence>(
        self,
        other: B,
        fill_first: Self::Item,
        fill_second: B::Item,
    ) -> PairwiseLongest<Self, B> {
        PairwiseLongest {
            first: self,
            second: other,
            fill_first,
            fill_second,
            first_live: true,
            second_live: true,
        }
    }
}
