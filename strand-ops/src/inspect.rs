// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inspect operator for side-effect observation without modifying the sequence.
//!
//! Useful for debugging, logging or counting without affecting the data flow.
//! Like [`map`](crate::MapExt::map), the callback runs once per `current()`
//! call.

use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`InspectExt::inspect`].
#[derive(Debug, Clone)]
pub struct Inspect<S, F> {
    source: S,
    f: F,
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    fn current(&mut self) -> S::Item {
        let item = self.source.current();
        (self.f)(&item);
        item
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the `inspect` operator for sequences.
pub trait InspectExt: Sequence + Sized {
    /// Calls `f` with a reference to every element read, passing it through
    /// unchanged.
    ///
    /// ```rust
    /// use strand_ops::{CollectExt, InspectExt};
    /// use strand_source::seq;
    ///
    /// let mut seen = Vec::new();
    /// let out = seq![1, 2, 3].inspect(|x| seen.push(*x)).into_vec();
    /// assert_eq!(out, vec![1, 2, 3]);
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item);
}

impl<S: Sequence> InspectExt for S {
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect { source: self, f }
    }
}
