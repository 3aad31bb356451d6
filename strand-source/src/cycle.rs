// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Replaying a fixed list of elements.

use strand_core::{into_iter, Sequence};

/// Replays its elements a fixed number of times.
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    items: Vec<T>,
    index: usize,
    started: bool,
    completed: usize,
    loops: usize,
}

impl<T: Clone> Sequence for Cycle<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.items.is_empty() || self.completed >= self.loops {
            return false;
        }
        if !self.started {
            self.started = true;
        } else {
            self.index += 1;
            if self.index == self.items.len() {
                self.index = 0;
                self.completed += 1;
            }
        }
        self.completed < self.loops
    }

    fn current(&mut self) -> T {
        self.items[self.index].clone()
    }
}

/// Yields `items` in order, `loops` times over.
///
/// ```
/// use strand_core::{into_iter, Sequence};
/// use strand_source::cycle;
///
/// let letters: String = into_iter(cycle(3, vec!['a', 'b'])).collect();
/// assert_eq!(letters, "ababab");
/// assert_eq!(into_iter(cycle(0, vec!['a'])).count(), 0);
/// ```
pub fn cycle<T: Clone>(loops: usize, items: Vec<T>) -> Cycle<T> {
    Cycle {
        items,
        index: 0,
        started: false,
        completed: 0,
        loops,
    }
}

/// Drains `seq` and yields its elements `loops` times over.
///
/// The source is consumed eagerly and its error, if any, is discarded.
pub fn cycle_seq<S>(seq: S, loops: usize) -> Cycle<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    cycle(loops, into_iter(seq).collect())
}

/// Replays its elements forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    items: Vec<T>,
    index: Option<usize>,
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.index = Some(match self.index {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        });
        true
    }

    fn current(&mut self) -> T {
        let index = self
            .index
            .unwrap_or_else(|| panic!("current() called without a successful advance()"));
        self.items[index].clone()
    }
}

/// Yields `items` in order, over and over.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn repeat<T: Clone>(items: Vec<T>) -> Repeat<T> {
    assert!(!items.is_empty(), "can't repeat zero elements");
    Repeat { items, index: None }
}

/// Drains `seq` and replays its elements forever.
///
/// # Panics
///
/// Panics if `seq` yields no elements.
pub fn repeat_seq<S>(seq: S) -> Repeat<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    repeat(into_iter(seq).collect())
}
