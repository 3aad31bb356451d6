// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`StepByExt::step_by`].
#[derive(Debug, Clone)]
pub struct StepBy<S> {
    source: S,
    step: usize,
    started: bool,
    done: bool,
}

impl<S: Sequence> Sequence for StepBy<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let moves = if self.started { self.step } else { 1 };
        self.started = true;
        for _ in 0..moves {
            if !self.source.advance() {
                self.done = true;
                return false;
            }
        }
        true
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

impl<S: VolatileSequence> VolatileSequence for StepBy<S> {
    type Element = S::Element;

    fn current_view(&mut self) -> &[S::Element] {
        self.source.current_view()
    }
}

/// Extension trait providing the `step_by` operator for sequences.
pub trait StepByExt: Sequence + Sized {
    /// Yields every `step`th element, starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// ```rust
    /// use strand_ops::StepByExt;
    /// use strand_source::range;
    /// use strand_test_utils::assert_sequence_eq;
    ///
    /// assert_sequence_eq(range(10).step_by(4), &[0, 4, 8]);
    /// ```
    fn step_by(self, step: usize) -> StepBy<Self>;
}

impl<S: Sequence> StepByExt for S {
    fn step_by(self, step: usize) -> StepBy<Self> {
        assert!(step != 0, "step_by requires a non-zero step");
        StepBy {
            source: self,
            step,
            started: false,
            done: false,
        }
    }
}
