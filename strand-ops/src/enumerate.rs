// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Pair, Sequence, SequenceError};

/// Sequence returned by [`EnumerateExt::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    source: S,
    index: usize,
    next_index: usize,
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = Pair<usize, S::Item>;

    fn advance(&mut self) -> bool {
        let advanced = self.source.advance();
        if advanced {
            self.index = self.next_index;
            self.next_index += 1;
        }
        advanced
    }

    fn current(&mut self) -> Self::Item {
        Pair::new(self.index, self.source.current())
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }

    fn current_copy(&mut self) -> Self::Item {
        Pair::new(self.index, self.source.current_copy())
    }
}

/// Extension trait providing the `enumerate` operator for sequences.
pub trait EnumerateExt: Sequence + Sized {
    /// Pairs every element with a running index that starts at `start`.
    ///
    /// ```rust
    /// use strand_core::Pair;
    /// use strand_ops::EnumerateExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(
    ///     seq!["a", "b"].enumerate(42),
    ///     &[Pair::new(42, "a"), Pair::new(43, "b")],
    /// );
    /// ```
    fn enumerate(self, start: usize) -> Enumerate<Self>;
}

impl<S: Sequence> EnumerateExt for S {
    fn enumerate(self, start: usize) -> Enumerate<Self> {
        Enumerate {
            source: self,
            index: start,
            next_index: start,
        }
    }
}
