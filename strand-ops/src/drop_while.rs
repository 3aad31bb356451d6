// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`DropWhileExt::drop_while`].
#[derive(Debug, Clone)]
pub struct DropWhile<S: Sequence, P> {
    source: S,
    pred: P,
    item: Option<S::Item>,
    dropping: bool,
    done: bool,
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        while self.source.advance() {
            let item = self.source.current();
            if !self.dropping || !(self.pred)(&item) {
                self.dropping = false;
                self.item = Some(item);
                return true;
            }
        }
        self.item = None;
        self.done = true;
        false
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

/// Extension trait providing the `drop_while` operator for sequences.
pub trait DropWhileExt: Sequence + Sized {
    /// Skips leading elements while `pred` holds, then yields everything else.
    ///
    /// `pred` is not consulted again once it failed.
    ///
    /// ```rust
    /// use strand_ops::DropWhileExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(seq![1, 2, 3, 2, 1].drop_while(|x| *x < 3), &[3, 2, 1]);
    /// assert_sequence_eq(seq![1, 2, 3, 2, 1].drop_while(|x| *x < 5), &[]);
    /// ```
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<S: Sequence> DropWhileExt for S {
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile {
            source: self,
            pred,
            item: None,
            dropping: true,
            done: false,
        }
    }
}
