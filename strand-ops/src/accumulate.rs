// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running folds over a sequence.
//!
//! `accumulate` yields every partial result of a left fold, starting from the
//! first element. `accumulate_with_initial` starts from a provided value and
//! yields it before touching the source.
//!
//! ```rust
//! use strand_ops::AccumulateExt;
//! use strand_source::{empty, seq};
//! use strand_test_utils::assert_sequence_eq;
//!
//! assert_sequence_eq(seq![1, 2, 3, 4, 5].accumulate(|acc, x| acc + x), &[1, 3, 6, 10, 15]);
//! assert_sequence_eq(seq![1, 2].accumulate_with_initial(|acc, x| acc + x, 5), &[5, 6, 8]);
//! assert_sequence_eq(empty::<i32>().accumulate_with_initial(|acc, x| acc + x, 5), &[5]);
//! ```

use strand_core::{Sequence, SequenceError};

#[derive(Debug, Clone)]
enum State<T, R> {
    // Accumulator is taken from the first source element.
    Seed(fn(T) -> R),
    // Accumulator holds the initial value, not yet yielded.
    Initial,
    Running,
    Finished,
}

/// Sequence returned by [`AccumulateExt::accumulate`] and
/// [`AccumulateExt::accumulate_with_initial`].
#[derive(Debug, Clone)]
pub struct Accumulate<S: Sequence, F, R> {
    source: S,
    f: F,
    acc: Option<R>,
    state: State<S::Item, R>,
}

impl<S, F, R> Sequence for Accumulate<S, F, R>
where
    S: Sequence,
    F: FnMut(R, S::Item) -> R,
    R: Clone,
{
    type Item = R;

    fn advance(&mut self) -> bool {
        match self.state {
            State::Seed(seed) => {
                if self.source.advance() {
                    self.acc = Some(seed(self.source.current()));
                    self.state = State::Running;
                    true
                } else {
                    self.state = State::Finished;
                    false
                }
            }
            State::Initial => {
                self.state = State::Running;
                true
            }
            State::Running => match self.acc.take() {
                Some(acc) if self.source.advance() => {
                    self.acc = Some((self.f)(acc, self.source.current()));
                    true
                }
                _ => {
                    self.state = State::Finished;
                    false
                }
            },
            State::Finished => false,
        }
    }

    fn current(&mut self) -> R {
        self.acc
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the running-fold operators for sequences.
pub trait AccumulateExt: Sequence + Sized {
    /// Yields the running results of folding the elements with `f`, using
    /// the first element as the starting accumulator.
    fn accumulate<F>(self, f: F) -> Accumulate<Self, F, Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item;

    /// Yields `initial`, then the running results of folding the elements
    /// into it with `f`.
    fn accumulate_with_initial<R, F>(self, f: F, initial: R) -> Accumulate<Self, F, R>
    where
        F: FnMut(R, Self::Item) -> R;
}

impl<S: Sequence> AccumulateExt for S {
    fn accumulate<F>(self, f: F) -> Accumulate<Self, F, Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate {
            source: self,
            f,
            acc: None,
            state: State::Seed(|first| first),
        }
    }

    fn accumulate_with_initial<R, F>(self, f: F, initial: R) -> Accumulate<Self, F, R>
    where
        F: FnMut(R, Self::Item) -> R,
    {
        Accumulate {
            source: self,
            f,
            acc: Some(initial),
            state: State::Initial,
        }
    }
}
