// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Arithmetic progressions.
//!
//! Every step performs one addition. Integers wrap on overflow, and floats
//! may accumulate rounding error over long runs.

use strand_core::{Numeric, NumericOrd, Sequence};

/// Unbounded arithmetic progression.
#[derive(Debug, Clone)]
pub struct InfiniteRange<T> {
    current: T,
    step: T,
    started: bool,
}

impl<T: Numeric> Sequence for InfiniteRange<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.started {
            self.current = self.current.wrapping_add(self.step);
        } else {
            self.started = true;
        }
        true
    }

    fn current(&mut self) -> T {
        self.current
    }
}

/// `0, 1, 2, ...`
pub fn infinite_range<T: Numeric>() -> InfiniteRange<T> {
    infinite_range_with_step(T::ZERO, T::ONE)
}

/// `start, start + 1, start + 2, ...`
pub fn infinite_range_from<T: Numeric>(start: T) -> InfiniteRange<T> {
    infinite_range_with_step(start, T::ONE)
}

/// `start, start + step, start + 2 * step, ...`
///
/// ```
/// use strand_core::Sequence;
/// use strand_source::infinite_range_with_step;
///
/// let mut bytes = infinite_range_with_step(254u8, 1);
/// assert!(bytes.advance());
/// assert_eq!(bytes.current(), 254);
/// assert!(bytes.advance());
/// assert_eq!(bytes.current(), 255);
/// assert!(bytes.advance());
/// assert_eq!(bytes.current(), 0);
/// ```
pub fn infinite_range_with_step<T: Numeric>(start: T, step: T) -> InfiniteRange<T> {
    InfiniteRange {
        current: start,
        step,
        started: false,
    }
}

/// Arithmetic progression that ends before `stop`.
#[derive(Debug, Clone)]
pub struct Range<T> {
    current: T,
    stop: T,
    step: T,
    started: bool,
    done: bool,
}

impl<T: NumericOrd> Sequence for Range<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.started {
            self.current = self.current.wrapping_add(self.step);
        } else {
            self.started = true;
        }
        self.done = !(self.current < self.stop);
        !self.done
    }

    fn current(&mut self) -> T {
        self.current
    }
}

/// `0, 1, ..., stop - 1`
pub fn range<T: NumericOrd>(stop: T) -> Range<T> {
    range_with_step(T::ZERO, stop, T::ONE)
}

/// `start, start + 1, ...` while below `stop`.
pub fn range_from<T: NumericOrd>(start: T, stop: T) -> Range<T> {
    range_with_step(start, stop, T::ONE)
}

/// `start, start + step, ...` while below `stop`.
///
/// The range ends at the first value that is not below `stop`. Integers
/// wrap like in [`infinite_range_with_step`], so a step that jumps over
/// `stop` can wrap around and keep going: `range_with_step(250u8, 255, 10)`
/// yields `250, 4, 14, ...`. A negative `step` either yields nothing (when
/// `start >= stop`) or counts down until it wraps to a value not below
/// `stop`. A zero `step` below `stop` never ends.
///
/// ```
/// use strand_core::into_iter;
/// use strand_source::range_with_step;
///
/// let wrapped: Vec<u8> = into_iter(range_with_step(250u8, 255, 10)).take(3).collect();
/// assert_eq!(wrapped, vec![250, 4, 14]);
/// ```
pub fn range_with_step<T: NumericOrd>(start: T, stop: T, step: T) -> Range<T> {
    Range {
        current: start,
        stop,
        step,
        started: false,
        done: false,
    }
}
