// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::limit::{Limit, LimitExt};
use crate::skip::{Skip, SkipExt};
use strand_core::Sequence;

/// Extension trait providing the `slice` operator for sequences.
pub trait SliceExt: Sequence + Sized {
    /// Yields the elements at positions `start..stop`.
    ///
    /// Equivalent to `skip(start).limit(stop - start)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > stop`.
    ///
    /// ```rust
    /// use strand_ops::SliceExt;
    /// use strand_source::seq;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(seq![1, 2, 3, 4, 5].slice(1, 3), &[2, 3]);
    /// assert_sequence_eq(seq![1, 2, 3, 4, 5].slice(3, 3), &[]);
    /// ```
    fn slice(self, start: usize, stop: usize) -> Limit<Skip<Self>>;
}

impl<S: Sequence> SliceExt for S {
    fn slice(self, start: usize, stop: usize) -> Limit<Skip<Self>> {
        assert!(start <= stop, "invalid slice: [{start}:{stop}]");
        self.skip(start).limit(stop - start)
    }
}
