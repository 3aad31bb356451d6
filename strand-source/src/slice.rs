// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::borrow::Cow;
use strand_core::Sequence;

/// Index-based sequence over a borrowed or owned slice.
///
/// Never errors.
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T>
where
    T: Clone,
{
    items: Cow<'a, [T]>,
    // One past the index of the current element; 0 before the first advance.
    position: usize,
}

impl<'a, T> SliceSource<'a, T>
where
    T: Clone,
{
    /// Number of elements not yet visited.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    /// Returns the underlying elements, visited or not.
    pub fn into_items(self) -> Cow<'a, [T]> {
        self.items
    }
}

impl<T> Sequence for SliceSource<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.position < self.items.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn current(&mut self) -> T {
        self.items[self.position - 1].clone()
    }
}

/// Sequence over the elements of a slice, cloning each on read.
///
/// ```
/// use strand_core::Sequence;
/// use strand_source::over_slice;
///
/// let names = ["ann", "bob"];
/// let mut seq = over_slice(&names);
/// assert!(seq.advance());
/// assert_eq!(seq.current(), "ann");
/// ```
pub fn over_slice<T: Clone>(items: &[T]) -> SliceSource<'_, T> {
    SliceSource {
        items: Cow::Borrowed(items),
        position: 0,
    }
}

/// Sequence taking ownership of a vector.
pub fn from_vec<T: Clone>(items: Vec<T>) -> SliceSource<'static, T> {
    SliceSource {
        items: Cow::Owned(items),
        position: 0,
    }
}
