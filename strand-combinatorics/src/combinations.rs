// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `r`-subsets of a list, each position used at most once.

use crate::buffer::{materialize, Stage, TupleBuffer};
use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`combinations`] and [`combinations_seq`].
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    buffer: TupleBuffer<T>,
    stage: Stage,
    error: Option<SequenceError>,
}

impl<T> Combinations<T> {
    fn new(r: usize, items: Vec<T>, error: Option<SequenceError>) -> Self {
        let stage = if r > items.len() {
            Stage::Done
        } else {
            Stage::Fresh
        };
        Self {
            indices: (0..r).collect(),
            buffer: TupleBuffer::with_capacity(r),
            items,
            stage,
            error,
        }
    }

    // Bumps the rightmost index that still has room and packs the ones after
    // it directly behind it.
    fn step(&mut self) -> bool {
        let n = self.items.len();
        let r = self.indices.len();
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] != i + n - r) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Sequence for Combinations<T> {
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

impl<T: Clone> VolatileSequence for Combinations<T> {
    type Element = T;

    fn current_view(&mut self) -> &[T] {
        self.buffer.as_slice()
    }
}

/// Yields every `r`-element subsequence of `items` in lexicographic order of
/// positions.
///
/// `r == 0` yields a single empty tuple. `r > items.len()` yields nothing.
///
/// ```rust
/// use strand_combinatorics::combinations;
/// use strand_core::into_iter;
///
/// let triples: Vec<String> = into_iter(combinations(3, vec!['a', 'b', 'c', 'd']))
///     .map(|t| t.into_iter().collect())
///     .collect();
/// assert_eq!(triples, vec!["abc", "abd", "acd", "bcd"]);
/// ```
pub fn combinations<T: Clone>(r: usize, items: Vec<T>) -> Combinations<T> {
    Combinations::new(r, items, None)
}

/// Drains `seq`, then behaves like [`combinations`] over its elements.
pub fn combinations_seq<S>(seq: S, r: usize) -> Combinations<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let (items, error) = materialize(seq);
    Combinations::new(r, items, error)
}
