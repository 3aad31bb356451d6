// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`SkipExt::skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    to_skip: usize,
    done: bool,
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        while self.to_skip > 0 {
            self.to_skip -= 1;
            if !self.source.advance() {
                self.done = true;
                return false;
            }
        }
        if self.source.advance() {
            true
        } else {
            self.done = true;
            false
        }
    }

    fn current(&mut self) -> S::Item {
        self.source.current()
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }

    fn current_copy(&mut self) -> S::Item {
        self.source.current_copy()
    }

    fn is_volatile(&self) -> bool {
        self.source.is_volatile()
    }
}

impl<S: VolatileSequence> VolatileSequence for Skip<S> {
    type Element = S::Element;

    fn current_view(&mut self) -> &[S::Element] {
        self.source.current_view()
    }
}

/// Extension trait providing the `skip` operator for sequences.
pub trait SkipExt: Sequence + Sized {
    /// Drops the first `n` elements.
    ///
    /// Nothing is consumed until the first `advance()`. Skipping past the end
    /// yields an empty sequence.
    ///
    /// ```rust
    /// use strand_ops::SkipExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(seq![1, 2, 3, 4, 5].skip(2), &[3, 4, 5]);
    /// assert_sequence_eq(seq![1, 2, 3].skip(5), &[]);
    /// ```
    fn skip(self, n: usize) -> Skip<Self>;
}

impl<S: Sequence> SkipExt for S {
    fn skip(self, n: usize) -> Skip<Self> {
        Skip {
            source: self,
            to_skip: n,
            done: false,
        }
    }
}
