// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::Cell;
use std::rc::Rc;
use strand_core::{Sequence, SequenceError};

/// Wrapper enforcing the exhaustion contract on the wrapped sequence.
///
/// Panics when advanced after it reported exhaustion. The advance counter is
/// shared through [`advances`](Self::advances) so it stays readable after the
/// wrapper has been moved into a combinator.
pub struct StrictSequence<S> {
    inner: S,
    exhausted: bool,
    advances: Rc<Cell<usize>>,
}

impl<S> StrictSequence<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            exhausted: false,
            advances: Rc::new(Cell::new(0)),
        }
    }

    /// Handle onto the number of `advance()` calls made so far.
    pub fn advances(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.advances)
    }
}

impl<S> Sequence for StrictSequence<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        assert!(!self.exhausted, "advance() called after exhaustion");
        self.advances.set(self.advances.get() + 1);
        let advanced = self.inner.advance();
        self.exhausted = !advanced;
        advanced
    }

    fn current(&mut self) -> S::Item {
        assert!(!self.exhausted, "current() called after exhaustion");
        self.inner.current()
    }

    fn error(&self) -> Option<&SequenceError> {
        self.inner.error()
    }

    fn current_copy(&mut self) -> S::Item {
        self.inner.current_copy()
    }

    fn is_volatile(&self) -> bool {
        self.inner.is_volatile()
    }
}
