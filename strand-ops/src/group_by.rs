// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Group-by operator - splits a sequence into runs of equal keys.
//!
//! Only *contiguous* elements are grouped: a key that shows up again after a
//! different one starts a new group. Sort the input first (or use
//! [`aggregate_by`](crate::ConsumeExt::aggregate_by)) for SQL-like grouping.
//!
//! Each group is yielded as a [`Pair`] of its key and a [`Group`] sequence
//! over its elements. One run is held in memory at a time, plus the first
//! element of the next run.
//!
//! ```rust
//! use strand_core::Pair;
//! use strand_ops::{CollectExt, GroupByExt, MapExt};
//! use strand_source::seq;
//!
//! let groups = seq!["Alice", "Andrew", "Bob", "Adam"]
//!     .group_by(|name| name.as_bytes()[0])
//!     .map(|Pair { first, second }| (first, second.into_vec()))
//!     .into_vec();
//!
//! assert_eq!(
//!     groups,
//!     vec![
//!         (b'A', vec!["Alice", "Andrew"]),
//!         (b'B', vec!["Bob"]),
//!         (b'A', vec!["Adam"]),
//!     ]
//! );
//! ```

use strand_core::{Pair, Sequence, SequenceError};
use strand_source::{from_vec, SliceSource};

/// Sequence over the elements of one group.
pub type Group<T> = SliceSource<'static, T>;

/// Sequence returned by [`GroupByExt::group_by`] and
/// [`GroupByExt::group_by_func`].
#[derive(Debug, Clone)]
pub struct GroupBy<S: Sequence, F, E, K> {
    source: S,
    key: F,
    eq: E,
    // First element of the next run, with its key.
    pending: Option<(K, S::Item)>,
    run: Option<(K, Vec<S::Item>)>,
    source_done: bool,
}

impl<S, F, E, K> Sequence for GroupBy<S, F, E, K>
where
    S: Sequence,
    S::Item: Clone + 'static,
    F: FnMut(&S::Item) -> K,
    E: FnMut(&K, &K) -> bool,
    K: Clone,
{
    type Item = Pair<K, Group<S::Item>>;

    fn advance(&mut self) -> bool {
        if self.pending.is_none() {
            if self.source_done || !self.source.advance() {
                self.source_done = true;
                self.run = None;
                return false;
            }
            let item = self.source.current();
            self.pending = Some(((self.key)(&item), item));
        }

        let Some((run_key, first)) = self.pending.take() else {
            return false;
        };
        let mut items = vec![first];
        while self.source.advance() {
            let item = self.source.current();
            let key = (self.key)(&item);
            if (self.eq)(&run_key, &key) {
                items.push(item);
            } else {
                self.pending = Some((key, item));
                break;
            }
        }
        if self.pending.is_none() {
            self.source_done = true;
        }
        self.run = Some((run_key, items));
        true
    }

    fn current(&mut self) -> Self::Item {
        match &self.run {
            Some((key, items)) => Pair::new(key.clone(), from_vec(items.clone())),
            None => panic!("current() called without a successful advance()"),
        }
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the group-by operators for sequences.
pub trait GroupByExt: Sequence + Sized {
    /// Groups contiguous elements whose keys compare equal.
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, fn(&K, &K) -> bool, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq;

    /// Groups contiguous elements whose keys satisfy `eq`.
    ///
    /// Each new element's key is compared against the key of the first
    /// element of the current run, which is also the key reported for the
    /// group.
    fn group_by_func<K, F, E>(self, key: F, eq: E) -> GroupBy<Self, F, E, K>
    where
        F: FnMut(&Self::Item) -> K,
        E: FnMut(&K, &K) -> bool;
}

impl<S: Sequence> GroupByExt for S {
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, fn(&K, &K) -> bool, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        self.group_by_func(key, PartialEq::eq as fn(&K, &K) -> bool)
    }

    fn group_by_func<K, F, E>(self, key: F, eq: E) -> GroupBy<Self, F, E, K>
    where
        F: FnMut(&Self::Item) -> K,
        E: FnMut(&K, &K) -> bool,
    {
        GroupBy {
            source: self,
            key,
            eq,
            pending: None,
            run: None,
            source_done: false,
        }
    }
}
