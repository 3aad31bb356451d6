// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{into_iter, to_non_volatile, Sequence, SequenceError};

/// Where a generator is in its walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Fresh,
    Running,
    Done,
}

/// Tuple buffer shared by the generators, refilled in place on every step.
#[derive(Debug, Clone)]
pub(crate) struct TupleBuffer<T> {
    slots: Vec<T>,
}

impl<T> TupleBuffer<T> {
    pub(crate) fn with_capacity(width: usize) -> Self {
        Self {
            slots: Vec::with_capacity(width),
        }
    }
}

impl<T: Clone> TupleBuffer<T> {
    /// Replaces the contents with `items[i]` for each `i` in `indices`.
    pub(crate) fn fill(&mut self, items: &[T], indices: &[usize]) {
        self.slots.clear();
        self.slots
            .extend(indices.iter().map(|&index| items[index].clone()));
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    pub(crate) fn push(&mut self, item: T) {
        self.slots.push(item);
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.slots.clone()
    }
}

/// Drains `seq`, keeping its terminal error.
pub(crate) fn materialize<S: Sequence>(seq: S) -> (Vec<S::Item>, Option<SequenceError>) {
    let mut elements = into_iter(to_non_volatile(seq));
    let items: Vec<S::Item> = elements.by_ref().collect();
    let error = elements.error().cloned();
    if let Some(error) = &error {
        strand_core::debug!("combinatorial input ended with an error: {}", error);
    }
    (items, error)
}
