// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Selecting elements by a partner sequence.
//!
//! Both sequences advance together and the result stops at the shorter one.
//! Elements that are not selected are never read from the value sequence.

use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`CompressExt::compress`] and
/// [`CompressExt::compress_func`].
#[derive(Debug, Clone)]
pub struct Compress<S, C, P> {
    values: S,
    selectors: C,
    pred: P,
    done: bool,
}

impl<S, C, P> Sequence for Compress<S, C, P>
where
    S: Sequence,
    C: Sequence,
    P: FnMut(&C::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        while self.values.advance() {
            if !self.selectors.advance() {
                break;
            }
            if (self.pred)(&self.selectors.current()) {
                return true;
            }
        }
        self.done = true;
        false
    }

    fn current(&mut self) -> S::Item {
        self.values.current()
    }

    fn error(&self) -> Option<&SequenceError> {
        self.values.error().or_else(|| self.selectors.error())
    }

    fn current_copy(&mut self) -> S::Item {
        self.values.current_copy()
    }

    fn is_volatile(&self) -> bool {
        self.values.is_volatile()
    }
}

/// Extension trait providing the compress operators for sequences.
pub trait CompressExt: Sequence + Sized {
    /// Keeps the elements whose matching selector is `true`.
    ///
    /// ```rust
    /// use strand_ops::CompressExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// let kept = seq![1, 2, 3, 4].compress(seq![true, false, true, false]);
    /// assert_sequence_eq(kept, &[1, 3]);
    /// ```
    fn compress<C>(self, selectors: C) -> Compress<Self, C, fn(&bool) -> bool>
    where
        C: Sequence<Item = bool>;

    /// Keeps the elements whose matching element of `other` satisfies `pred`.
    ///
    /// ```rust
    /// use strand_ops::CompressExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// let kept = seq!["a", "b", "c", "d"].compress_func(seq![1, 2, 3, 4], |n| n % 2 == 0);
    /// assert_sequence_eq(kept, &["b", "d"]);
    /// ```
    fn compress_func<C, P>(self, other: C, pred: P) -> Compress<Self, C, P>
    where
        C: Sequence,
        P: FnMut(&C::Item) -> bool;
}

impl<S: Sequence> CompressExt for S {
    fn compress<C>(self, selectors: C) -> Compress<Self, C, fn(&bool) -> bool>
    where
        C: Sequence<Item = bool>,
    {
        let selected: fn(&bool) -> bool = |flag| *flag;
        self.compress_func(selectors, selected)
    }

    fn compress_func<C, P>(self, other: C, pred: P) -> Compress<Self, C, P>
    where
        C: Sequence,
        P: FnMut(&C::Item) -> bool,
    {
        Compress {
            values: self,
            selectors: other,
            pred,
            done: false,
        }
    }
}
