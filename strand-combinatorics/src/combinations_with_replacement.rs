// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `r`-tuples of non-decreasing positions, positions may repeat.

use crate::buffer::{materialize, Stage, TupleBuffer};
use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`combinations_with_replacement`] and
/// [`combinations_with_replacement_seq`].
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    buffer: TupleBuffer<T>,
    stage: Stage,
    error: Option<SequenceError>,
}

impl<T> CombinationsWithReplacement<T> {
    fn new(r: usize, items: Vec<T>, error: Option<SequenceError>) -> Self {
        let stage = if r > 0 && items.is_empty() {
            Stage::Done
        } else {
            Stage::Fresh
        };
        Self {
            indices: vec![0; r],
            buffer: TupleBuffer::with_capacity(r),
            items,
            stage,
            error,
        }
    }

    fn step(&mut self) -> bool {
        let last = self.items.len().saturating_sub(1);
        let Some(i) = self.indices.iter().rposition(|&index| index != last) else {
            return false;
        };
        let next = self.indices[i] + 1;
        self.indices[i..].fill(next);
        true
    }
}

impl<T: Clone> Sequence for CombinationsWithReplacement<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> bool {
        let more = match self.stage {
            Stage::Fresh => true,
            Stage::Running => self.step(),
            Stage::Done => false,
        };
        if more {
            self.stage = Stage::Running;
            self.buffer.fill(&self.items, &self.indices);
        } else {
            self.stage = Stage::Done;
        }
        more
    }

    fn current(&mut self) -> Vec<T> {
        self.buffer.to_vec()
    }

    fn error(&self) -> Option<&SequenceError> {
        self.error.as_ref()
    }

    fn is_volatile(&self) -> bool {
        true
    }
}

impl<T: Clone> VolatileSequence for CombinationsWithReplacement<T> {
    type Element = T;

    fn current_view(&mut self) -> &[T] {
        self.buffer.as_slice()
    }
}

/// Yields every `r`-element multiset of `items` as a tuple of non-decreasing
/// positions, in lexicographic order.
///
/// `r == 0` yields a single empty tuple. No items with `r > 0` yields nothing.
///
/// ```rust
/// use strand_combinatorics::combinations_with_replacement;
/// use strand_core::into_iter;
///
/// let pairs: Vec<String> = into_iter(combinations_with_replacement(2, vec!['a', 'b', 'c']))
///     .map(|t| t.into_iter().collect())
///     .collect();
/// assert_eq!(pairs, vec!["aa", "ab", "ac", "bb", "bc", "cc"]);
/// ```
pub fn combinations_with_replacement<T: Clone>(
    r: usize,
    items: Vec<T>,
) -> CombinationsWithReplacement<T> {
    CombinationsWithReplacement::new(r, items, None)
}

/// Drains `seq`, then behaves like [`combinations_with_replacement`] over its
/// elements.
pub fn combinations_with_replacement_seq<S>(
    seq: S,
    r: usize,
) -> CombinationsWithReplacement<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let (items, error) = materialize(seq);
    CombinationsWithReplacement::new(r, items, error)
}
