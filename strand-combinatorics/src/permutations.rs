// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered `r`-arrangements of a list.
//!
//! The walk keeps a permutation of all positions plus one countdown per
//! output slot. A slot whose countdown is still running swaps in the next
//! candidate. A slot whose countdown hits zero rotates its candidate to the
//! end and resets, carrying into the slot on its left.

use crate::buffer::{materialize, Stage, TupleBuffer};
use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`permutations`] and [`permutations_seq`].
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    buffer: TupleBuffer<T>,
    stage: Stage,
    error: Option<SequenceError>,
}

impl<T> Permutations<T> {
    fn new(r: usize, items: Vec<T>, error: Option<SequenceError>) -> Self {
        let n = items.len();
        let stage = if r > n { Stage::Done } else { Stage::Fresh };
        Self {
            indices: (0..n).collect(),
            cycles: (0..r.min(n)).map(|i| n - i).collect(),
            buffer: TupleBuffer::with_capacity(r),
            items,
            stage,
            error,
        }
    }

    fn step(&mut self) -> bool {
        let n = self.items.len();
        for i in (0..self.cycles.len()).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Sequence for Permutations<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> bool {
        let more = match self.stage {
            Stage::Fresh => true,
            Stage::Running => self.step(),
            Stage::Done => false,
        };
        if more {
            self.stage = Stage::Running;
            let r = self.cycles.len();
            self.buffer.fill(&self.items, &self.indices[..r]);
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

impl<T: Clone> VolatileSequence for Permutations<T> {
    type Element = T;

    fn current_view(&mut self) -> &[T] {
        self.buffer.as_slice()
    }
}

/// Yields every ordered arrangement of `r` distinct positions of `items`, in
/// lexicographic order of positions.
///
/// `r == 0` yields a single empty tuple. `r > items.len()` yields nothing.
///
/// ```rust
/// use strand_combinatorics::permutations;
/// use strand_core::into_iter;
///
/// let orders: Vec<String> = into_iter(permutations(2, vec!['a', 'b', 'c']))
///     .map(|t| t.into_iter().collect())
///     .collect();
/// assert_eq!(orders, vec!["ab", "ac", "ba", "bc", "ca", "cb"]);
/// ```
pub fn permutations<T: Clone>(r: usize, items: Vec<T>) -> Permutations<T> {
    Permutations::new(r, items, None)
}

/// Drains `seq`, then behaves like [`permutations`] over its elements.
pub fn permutations_seq<S>(seq: S, r: usize) -> Permutations<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let (items, error) = materialize(seq);
    Permutations::new(r, items, error)
}
