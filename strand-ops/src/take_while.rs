// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`TakeWhileExt::take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<S: Sequence, P> {
    source: S,
    pred: P,
    item: Option<S::Item>,
    done: bool,
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done || !self.source.advance() {
            self.done = true;
            self.item = None;
            return false;
        }
        let item = self.source.current();
        if (self.pred)(&item) {
            self.item = Some(item);
            true
        } else {
            self.item = None;
            self.done = true;
            false
        }
    }

    fn current(&mut self) -> S::Item {
        self.item
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the `take_while` operator for sequences.
pub trait TakeWhileExt: Sequence + Sized {
    /// Yields elements while `pred` holds and stops for good at the first
    /// element that fails it.
    ///
    /// The failing element is consumed from the source and discarded.
    ///
    /// ```rust
    /// use strand_ops::TakeWhileExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(seq![1, 2, 3, 2, 1].take_while(|x| *x < 3), &[1, 2]);
    /// ```
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<S: Sequence> TakeWhileExt for S {
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile {
            source: self,
            pred,
            item: None,
            done: false,
        }
    }
}
