// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concatenation of sequences.
//!
//! - [`ChainExt::chain`] joins two sequences, possibly of different types.
//! - [`chain_all`] joins any number of sequences of one type. Use
//!   [`BoxSequence`](strand_core::BoxSequence) to mix types.
//!
//! A source that ends with an error ends the whole chain: later sources are
//! never advanced and the error is reported as the chain's own.

use strand_core::{Sequence, SequenceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    First,
    Second,
    Done,
}

/// Sequence returned by [`ChainExt::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    stage: Stage,
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> bool {
        if self.stage == Stage::First {
            if self.first.advance() {
                return true;
            }
            if self.first.error().is_some() {
                self.stage = Stage::Done;
                return false;
            }
            self.stage = Stage::Second;
        }
        if self.stage == Stage::Second {
            if self.second.advance() {
                return true;
            }
            self.stage = Stage::Done;
        }
        false
    }

    fn current(&mut self) -> A::Item {
        match self.stage {
            Stage::First => self.first.current(),
            _ => self.second.current(),
        }
    }

    fn error(&self) -> Option<&SequenceError> {
        self.first.error().or_else(|| self.second.error())
    }

    fn current_copy(&mut self) -> A::Item {
        match self.stage {
            Stage::First => self.first.current_copy(),
            _ => self.second.current_copy(),
        }
    }

    fn is_volatile(&self) -> bool {
        self.first.is_volatile() || self.second.is_volatile()
    }
}

/// Extension trait providing the `chain` operator for sequences.
pub trait ChainExt: Sequence + Sized {
    /// Yields every element of `self`, then every element of `other`.
    ///
    /// ```rust
    /// use strand_ops::ChainExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(seq![1, 2].chain(seq![3, 4]), &[1, 2, 3, 4]);
    /// ```
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Sequence<Item = Self::Item>;
}

impl<S: Sequence> ChainExt for S {
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Chain {
            first: self,
            second: other,
            stage: Stage::First,
        }
    }
}

/// Sequence returned by [`chain_all`].
#[derive(Debug, Clone)]
pub struct ChainAll<S> {
    sources: Vec<S>,
    position: usize,
    done: bool,
}

impl<S: Sequence> Sequence for ChainAll<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        while let Some(source) = self.sources.get_mut(self.position) {
            if source.advance() {
                return true;
            }
            if source.error().is_some() {
                break;
            }
            self.position += 1;
        }
        self.done = true;
        false
    }

    fn current(&mut self) -> S::Item {
        self.sources[self.position].current()
    }

    fn error(&self) -> Option<&SequenceError> {
        self.sources.get(self.position).and_then(Sequence::error)
    }

    fn current_copy(&mut self) -> S::Item {
        self.sources[self.position].current_copy()
    }

    fn is_volatile(&self) -> bool {
        self.sources.iter().any(Sequence::is_volatile)
    }
}

/// Yields every element of every source, in order.
///
/// ```rust
/// use strand_ops::chain_all;
/// use strand_source::seq;
/// use strand_test_utils::assert_sequence_eq;
///
/// let joined = chain_all(vec![seq![1, 2], seq![3, 4], seq![5, 6]]);
/// assert_sequence_eq(joined, &[1, 2, 3, 4, 5, 6]);
/// ```
pub fn chain_all<S: Sequence>(sources: Vec<S>) -> ChainAll<S> {
    ChainAll {
        sources,
        position: 0,
        done: false,
    }
}
