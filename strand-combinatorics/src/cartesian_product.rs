// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cartesian product of several lists, the equivalent of nested loops.

use crate::buffer::{materialize, Stage, TupleBuffer};
use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`cartesian_product`] and [`cartesian_product_seq`].
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    lists: Vec<Vec<T>>,
    indices: Vec<usize>,
    buffer: TupleBuffer<T>,
    stage: Stage,
    error: Option<SequenceError>,
}

impl<T> CartesianProduct<T> {
    fn new(lists: Vec<Vec<T>>, error: Option<SequenceError>) -> Self {
        let stage = if lists.is_empty() || lists.iter().any(Vec::is_empty) {
            Stage::Done
        } else {
            Stage::Fresh
        };
        Self {
            indices: vec![0; lists.len()],
            buffer: TupleBuffer::with_capacity(lists.len()),
            lists,
            stage,
            error,
        }
    }

    // Odometer: the rightmost index turns fastest and carries leftwards.
    fn step(&mut self) -> bool {
        for (position, list) in self.lists.iter().enumerate().rev() {
            self.indices[position] += 1;
            if self.indices[position] < list.len() {
                return true;
            }
            self.indices[position] = 0;
        }
        false
    }
}

impl<T: Clone> CartesianProduct<T> {
    fn fill(&mut self) {
        self.buffer.clear();
        for (list, &index) in self.lists.iter().zip(&self.indices) {
            self.buffer.push(list[index].clone());
        }
    }
}

impl<T: Clone> Sequence for CartesianProduct<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> bool {
        let more = match self.stage {
            Stage::Fresh => true,
            Stage::Running => self.step(),
            Stage::Done => false,
        };
        if more {
            self.stage = Stage::Running;
            self.fill();
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

impl<T: Clone> VolatileSequence for CartesianProduct<T> {
    type Element = T;

    fn current_view(&mut self) -> &[T] {
        self.buffer.as_slice()
    }
}

/// Yields one element from each of `lists`, in list order, for every
/// combination of positions. The last list varies fastest.
///
/// No lists, or any empty list, yields nothing.
///
/// ```rust
/// use strand_combinatorics::cartesian_product;
/// use strand_core::into_iter;
///
/// let cells: Vec<String> = into_iter(cartesian_product(vec![vec!['A', 'B'], vec!['x', 'y']]))
///     .map(|t| t.into_iter().collect())
///     .collect();
/// assert_eq!(cells, vec!["Ax", "Ay", "Bx", "By"]);
/// ```
pub fn cartesian_product<T: Clone>(lists: Vec<Vec<T>>) -> CartesianProduct<T> {
    CartesianProduct::new(lists, None)
}

/// Drains `seq` and each sequence it yields, then behaves like
/// [`cartesian_product`] over the collected lists.
///
/// The reported error is the outer sequence's, or else the first one found
/// among the inner sequences in order.
pub fn cartesian_product_seq<S>(seq: S) -> CartesianProduct<<S::Item as Sequence>::Item>
where
    S: Sequence,
    S::Item: Sequence,
    <S::Item as Sequence>::Item: Clone,
{
    let (inner, outer_error) = materialize(seq);
    let mut error = outer_error;
    let mut lists = Vec::with_capacity(inner.len());
    for sequence in inner {
        let (list, inner_error) = materialize(sequence);
        error = error.or(inner_error);
        lists.push(list);
    }
    CartesianProduct::new(lists, error)
}
