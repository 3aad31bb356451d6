// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Every subset of a list, enumerated by a bitmask counter.

use crate::buffer::{materialize, Stage, TupleBuffer};
use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Largest input [`power_set`] accepts. Bigger inputs have more than 10^18
/// subsets.
pub const MAX_POWER_SET_ITEMS: usize = 63;

/// Sequence returned by [`power_set`] and [`power_set_seq`].
#[derive(Debug, Clone)]
pub struct PowerSet<T> {
    items: Vec<T>,
    mask: u64,
    end: u64,
    buffer: TupleBuffer<T>,
    stage: Stage,
    error: Option<SequenceError>,
}

impl<T> PowerSet<T> {
    fn new(items: Vec<T>, error: Option<SequenceError>) -> Self {
        assert!(
            items.len() <= MAX_POWER_SET_ITEMS,
            "power_set supports at most {MAX_POWER_SET_ITEMS} elements, got {}",
            items.len()
        );
        Self {
            end: 1u64 << items.len(),
            mask: 0,
            buffer: TupleBuffer::with_capacity(items.len()),
            items,
            stage: Stage::Fresh,
            error,
        }
    }
}

impl<T: Clone> PowerSet<T> {
    // Only the set bits are visited.
    fn fill(&mut self) {
        self.buffer.clear();
        let mut bits = self.mask;
        while bits != 0 {
            let index = bits.trailing_zeros() as usize;
            self.buffer.push(self.items[index].clone());
            bits &= bits - 1;
        }
    }
}

impl<T: Clone> Sequence for PowerSet<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> bool {
        let more = match self.stage {
            Stage::Fresh => true,
            Stage::Running => {
                self.mask += 1;
                self.mask < self.end
            }
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

impl<T: Clone> VolatileSequence for PowerSet<T> {
    type Element = T;

    fn current_view(&mut self) -> &[T] {
        self.buffer.as_slice()
    }
}

/// Yields all `2^n` subsets of `items`, starting with the empty one.
///
/// Subset `k` holds the items at the set bits of `k`, in input order.
///
/// # Panics
///
/// Panics if `items` has more than [`MAX_POWER_SET_ITEMS`] elements.
///
/// ```rust
/// use strand_combinatorics::power_set;
/// use strand_core::into_iter;
///
/// let subsets: Vec<Vec<i32>> = into_iter(power_set(vec![1, 2])).collect();
/// assert_eq!(subsets, vec![vec![], vec![1], vec![2], vec![1, 2]]);
/// ```
pub fn power_set<T: Clone>(items: Vec<T>) -> PowerSet<T> {
    PowerSet::new(items, None)
}

/// Drains `seq`, then behaves like [`power_set`] over its elements.
///
/// # Panics
///
/// Panics if `seq` yields more than [`MAX_POWER_SET_ITEMS`] elements.
pub fn power_set_seq<S>(seq: S) -> PowerSet<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let (items, error) = materialize(seq);
    PowerSet::new(items, error)
}
