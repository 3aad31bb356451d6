// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SequenceError;
use crate::sequence::Sequence;

/// Adapter whose [`current`](Sequence::current) always returns a value
/// detached from the wrapped sequence.
///
/// When the wrapped sequence reports itself volatile, reads go through
/// [`Sequence::current_copy`]; otherwise they go through
/// [`Sequence::current`] unchanged. Every collector applies this adapter
/// before consuming its input.
#[derive(Debug, Clone)]
pub struct NonVolatile<S> {
    inner: S,
}

impl<S> NonVolatile<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Sequence for NonVolatile<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        self.inner.advance()
    }

    fn current(&mut self) -> Self::Item {
        if self.inner.is_volatile() {
            self.inner.current_copy()
        } else {
            self.inner.current()
        }
    }

    fn error(&self) -> Option<&SequenceError> {
        self.inner.error()
    }
}

/// Converts any sequence into one whose elements are never volatile.
pub fn to_non_volatile<S: Sequence>(seq: S) -> NonVolatile<S> {
    NonVolatile::new(seq)
}
