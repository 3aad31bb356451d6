// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattening a sequence of sequences.
//!
//! Inner sequences are pulled from the outer one as needed, one at a time.
//! An inner sequence ending with an error ends the whole result with that
//! error. Otherwise the outer sequence's error, if any, is reported.

use crate::map::{Map, MapExt};
use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`chain_from`] and [`ChainMapExt::chain_map`].
#[derive(Debug, Clone)]
pub struct ChainFrom<O: Sequence> {
    outer: O,
    inner: Option<O::Item>,
    done: bool,
}

impl<O> Sequence for ChainFrom<O>
where
    O: Sequence,
    O::Item: Sequence,
{
    type Item = <O::Item as Sequence>::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.advance() {
                    return true;
                }
                if inner.error().is_some() {
                    self.done = true;
                    return false;
                }
                self.inner = None;
            }
            if !self.outer.advance() {
                self.done = true;
                return false;
            }
            self.inner = Some(self.outer.current());
        }
    }

    fn current(&mut self) -> Self::Item {
        match self.inner.as_mut() {
            Some(inner) => inner.current(),
            None => panic!("current() called without a successful advance()"),
        }
    }

    fn error(&self) -> Option<&SequenceError> {
        self.inner
            .as_ref()
            .and_then(Sequence::error)
            .or_else(|| self.outer.error())
    }

    fn current_copy(&mut self) -> Self::Item {
        match self.inner.as_mut() {
            Some(inner) => inner.current_copy(),
            None => panic!("current() called without a successful advance()"),
        }
    }

    fn is_volatile(&self) -> bool {
        self.inner.as_ref().is_some_and(Sequence::is_volatile)
    }
}

/// Yields every element of every sequence produced by `outer`.
///
/// ```rust
/// use strand_ops::chain_from;
/// use strand_source::seq;
/// use strand_test_utils::assert_sequence_eq;
///
/// let nested = seq![seq![1, 2], seq![3, 4], seq![5, 6]];
/// assert_sequence_eq(chain_from(nested), &[1, 2, 3, 4, 5, 6]);
/// ```
pub fn chain_from<O>(outer: O) -> ChainFrom<O>
where
    O: Sequence,
    O::Item: Sequence,
{
    ChainFrom {
        outer,
        inner: None,
        done: false,
    }
}

/// Extension trait providing the `chain_map` operator for sequences.
pub trait ChainMapExt: Sequence + Sized {
    /// Maps every element to a sequence and flattens the results.
    ///
    /// ```rust
    /// use strand_ops::ChainMapExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// let spread = seq![1, 5, 10].chain_map(|x| seq![x, x + 2]);
    /// assert_sequence_eq(spread, &[1, 3, 5, 7, 10, 12]);
    /// ```
    fn chain_map<U, F>(self, f: F) -> ChainFrom<Map<Self, F>>
    where
        F: FnMut(Self::Item) -> U,
        U: Sequence;
}

impl<S: Sequence> ChainMapExt for S {
    fn chain_map<U, F>(self, f: F) -> ChainFrom<Map<Self, F>>
    where
        F: FnMut(Self::Item) -> U,
        U: Sequence,
    {
        chain_from(self.map(f))
    }
}
