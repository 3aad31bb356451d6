// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Limit operator - caps a sequence at its first `n` elements.
//!
//! The source is never advanced past the `n`th element, so limiting an
//! infinite or blocking source is safe.
//!
//! ```rust
//! use strand_ops::LimitExt;
//! use strand_source::{infinite_range, seq};
//! use strand_test_utils::assert_sequence_eq;
//!
//! assert_sequence_eq(seq![1, 2, 3, 4, 5].limit(3), &[1, 2, 3]);
//! assert_sequence_eq(seq![1, 2, 3].limit(5), &[1, 2, 3]);
//! assert_sequence_eq(infinite_range::<u8>().limit(0), &[]);
//! ```
//!
//! Volatile sources stay volatile: the view of the source is lent through.

use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`LimitExt::limit`].
#[derive(Debug, Clone)]
pub struct Limit<S> {
    source: S,
    left: usize,
    done: bool,
}

impl<S: Sequence> Sequence for Limit<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done || self.left == 0 {
            self.done = true;
            return false;
        }
        if self.source.advance() {
            self.left -= 1;
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

impl<S: VolatileSequence> VolatileSequence for Limit<S> {
    type Element = S::Element;

    fn current_view(&mut self) -> &[S::Element] {
        self.source.current_view()
    }
}

/// Extension trait providing the `limit` operator for sequences.
pub trait LimitExt: Sequence + Sized {
    /// Yields at most `n` elements.
    fn limit(self, n: usize) -> Limit<Self>;
}

impl<S: Sequence> LimitExt for S {
    fn limit(self, n: usize) -> Limit<Self> {
        Limit {
            source: self,
            left: n,
            done: false,
        }
    }
}
