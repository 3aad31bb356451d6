// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Draining consumers.

use std::collections::HashMap;
use std::hash::Hash;
use strand_core::{into_iter, Result, Sequence};

/// Extension trait providing the draining consumers for sequences.
pub trait ConsumeExt: Sequence + Sized {
    /// Drains the sequence and returns how many elements it had.
    fn count(self) -> usize;

    /// Drains the sequence, discarding every element.
    fn exhaust(self);

    /// Calls `f` on every element.
    fn for_each<F>(self, f: F)
    where
        F: FnMut(Self::Item);

    /// Calls `f` on every element until it fails.
    ///
    /// Returns the first error from `f`. If `f` never fails, the sequence's
    /// own terminal error is returned instead, so a clean `Ok(())` means every
    /// element was processed.
    ///
    /// ```rust
    /// use strand_core::SequenceError;
    /// use strand_ops::ConsumeExt;
    /// use strand_source::seq;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = seq![1, 2, 3, 4].for_each_with_error(|x| {
    ///     if x == 3 {
    ///         return Err(SequenceError::processing("three"));
    ///     }
    ///     seen.push(x);
    ///     Ok(())
    /// });
    ///
    /// assert!(outcome.is_err());
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    fn for_each_with_error<F>(self, f: F) -> Result<()>
    where
        F: FnMut(Self::Item) -> Result<()>;

    /// Groups every element under the key returned by `key`, regardless of
    /// order. Each group keeps its elements in sequence order.
    ///
    /// ```rust
    /// use strand_ops::ConsumeExt;
    /// use strand_source::seq;
    ///
    /// let by_initial = seq!["Alice", "Bob", "Adam"].aggregate_by(|name| name.as_bytes()[0]);
    /// assert_eq!(by_initial[&b'A'], vec!["Alice", "Adam"]);
    /// assert_eq!(by_initial[&b'B'], vec!["Bob"]);
    /// ```
    fn aggregate_by<K, F>(self, key: F) -> HashMap<K, Vec<Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K;
}

impl<S: Sequence> ConsumeExt for S {
    fn count(mut self) -> usize {
        let mut count = 0;
        while self.advance() {
            count += 1;
        }
        count
    }

    fn exhaust(mut self) {
        while self.advance() {}
    }

    fn for_each<F>(self, f: F)
    where
        F: FnMut(Self::Item),
    {
        into_iter(self).for_each(f);
    }

    fn for_each_with_error<F>(mut self, mut f: F) -> Result<()>
    where
        F: FnMut(Self::Item) -> Result<()>,
    {
        while self.advance() {
            f(self.current_copy())?;
        }
        match self.error() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn aggregate_by<K, F>(self, mut key: F) -> HashMap<K, Vec<Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: HashMap<K, Vec<Self::Item>> = HashMap::new();
        for item in into_iter(self) {
            groups.entry(key(&item)).or_default().push(item);
        }
        groups
    }
}
