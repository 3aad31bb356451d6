// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - transforms every element with a function.
//!
//! # Examples
//!
//! ```rust
//! use strand_ops::MapExt;
//! use strand_source::seq;
//! use strand_test_utils::assert_sequence_eq;
//!
//! assert_sequence_eq(seq![1, 2, 3].map(|x| x + 5), &[6, 7, 8]);
//! ```
//!
//! # Side Effects
//!
//! Every call to `current()` runs `f` again. Combinators and collectors in
//! this workspace read each element once per step, so `f` runs once per
//! element unless the caller reads the same step twice.

use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`MapExt::map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    fn current(&mut self) -> U {
        (self.f)(self.source.current())
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the `map` operator for sequences.
pub trait MapExt: Sequence + Sized {
    /// Applies `f` to every element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U;
}

impl<S: Sequence> MapExt for S {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { source: self, f }
    }
}
