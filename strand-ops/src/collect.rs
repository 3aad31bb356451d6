// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Collectors - drain a sequence into a container, a channel or an iterator.
//!
//! Every collector wraps its input with [`to_non_volatile`] first, so
//! elements of volatile sequences such as [`zip`](crate::zip) are stored as
//! independent values.
//!
//! The plain collectors (`into_vec`, `into_map`, `into_string`) treat a
//! terminal error like a normal end. Their `try_` counterparts report it.
//!
//! ```rust
//! use strand_core::SequenceError;
//! use strand_ops::CollectExt;
//! use strand_source::{error, seq};
//!
//! assert_eq!(seq![1, 2, 3].into_vec(), vec![1, 2, 3]);
//!
//! let failed = error::<i32>(SequenceError::processing("boom")).try_into_vec();
//! assert!(failed.is_err());
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::mpsc;
use std::thread;
use strand_core::{
    into_iter, to_non_volatile, IntoIter, NonVolatile, Pair, Result, Sequence, SequenceError,
};

/// Sending half of a channel that can be fed synchronously.
pub trait BlockingSender<T> {
    /// Blocks until `item` is accepted, failing with
    /// [`SequenceError::ChannelSend`] once the receiving side is gone.
    fn deliver(&self, item: T) -> Result<()>;
}

impl<T> BlockingSender<T> for mpsc::Sender<T> {
    fn deliver(&self, item: T) -> Result<()> {
        self.send(item).map_err(|_| SequenceError::ChannelSend)
    }
}

impl<T> BlockingSender<T> for mpsc::SyncSender<T> {
    fn deliver(&self, item: T) -> Result<()> {
        self.send(item).map_err(|_| SequenceError::ChannelSend)
    }
}

impl<T> BlockingSender<T> for async_channel::Sender<T> {
    fn deliver(&self, item: T) -> Result<()> {
        self.send_blocking(item).map_err(|_| SequenceError::ChannelSend)
    }
}

fn drain<S: Sequence, B: FromIterator<S::Item>>(seq: S) -> Result<B> {
    let mut elements = into_iter(to_non_volatile(seq));
    let collected = elements.by_ref().collect();
    match elements.error() {
        Some(error) => Err(error.clone()),
        None => Ok(collected),
    }
}

/// Extension trait providing the collectors for sequences.
pub trait CollectExt: Sequence + Sized {
    /// Collects every element into a `Vec`.
    fn into_vec(self) -> Vec<Self::Item>;

    /// Collects key-value pairs into a `HashMap`. Later pairs overwrite
    /// earlier ones with the same key.
    ///
    /// ```rust
    /// use strand_core::Pair;
    /// use strand_ops::CollectExt;
    /// use strand_source::seq;
    ///
    /// let map = seq![Pair::new("a", 1), Pair::new("b", 2), Pair::new("a", 3)].into_map();
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map["a"], 3);
    /// ```
    fn into_map<K, V>(self) -> HashMap<K, V>
    where
        Self: Sequence<Item = Pair<K, V>>,
        K: Eq + Hash;

    /// Concatenates every `char` into a `String`.
    fn into_string(self) -> String
    where
        Self: Sequence<Item = char>;

    /// Like [`into_vec`](CollectExt::into_vec), failing with the terminal
    /// error if the sequence has one.
    fn try_into_vec(self) -> Result<Vec<Self::Item>>;

    /// Like [`into_map`](CollectExt::into_map), failing with the terminal
    /// error if the sequence has one.
    fn try_into_map<K, V>(self) -> Result<HashMap<K, V>>
    where
        Self: Sequence<Item = Pair<K, V>>,
        K: Eq + Hash;

    /// Like [`into_string`](CollectExt::into_string), failing with the
    /// terminal error if the sequence has one.
    fn try_into_string(self) -> Result<String>
    where
        Self: Sequence<Item = char>;

    /// Moves the sequence to a worker thread that feeds its elements into a
    /// rendezvous channel, closed once the sequence is exhausted.
    ///
    /// Dropping the receiver stops the worker at its next send. A receiver
    /// that is kept alive but never read leaves the worker blocked.
    ///
    /// ```rust
    /// use strand_ops::CollectExt;
    /// use strand_source::seq;
    ///
    /// let receiver = seq![1, 2, 3].into_channel();
    /// let mut received = Vec::new();
    /// while let Ok(value) = receiver.recv_blocking() {
    ///     received.push(value);
    /// }
    /// assert_eq!(received, vec![1, 2, 3]);
    /// ```
    fn into_channel(self) -> async_channel::Receiver<Self::Item>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static;

    /// Sends every element over `sender` on the current thread.
    ///
    /// The channel is left open. Fails with
    /// [`SequenceError::ChannelSend`] if the receiver goes away.
    fn send_over<B>(self, sender: &B) -> Result<()>
    where
        B: BlockingSender<Self::Item>;

    /// Adapts the sequence into a [`std::iter::Iterator`].
    fn into_std_iter(self) -> IntoIter<NonVolatile<Self>>;

    /// Bridges the sequence into a [`futures::Stream`]. Each poll pulls one
    /// element synchronously.
    #[cfg(feature = "futures")]
    fn into_stream(self) -> futures::stream::Iter<IntoIter<NonVolatile<Self>>>;
}

impl<S: Sequence> CollectExt for S {
    fn into_vec(self) -> Vec<Self::Item> {
        into_iter(to_non_volatile(self)).collect()
    }

    fn into_map<K, V>(self) -> HashMap<K, V>
    where
        Self: Sequence<Item = Pair<K, V>>,
        K: Eq + Hash,
    {
        into_iter(to_non_volatile(self)).map(Pair::into_tuple).collect()
    }

    fn into_string(self) -> String
    where
        Self: Sequence<Item = char>,
    {
        into_iter(to_non_volatile(self)).collect()
    }

    fn try_into_vec(self) -> Result<Vec<Self::Item>> {
        drain(self)
    }

    fn try_into_map<K, V>(self) -> Result<HashMap<K, V>>
    where
        Self: Sequence<Item = Pair<K, V>>,
        K: Eq + Hash,
    {
        let pairs: Vec<Pair<K, V>> = drain(self)?;
        Ok(pairs.into_iter().map(Pair::into_tuple).collect())
    }

    fn try_into_string(self) -> Result<String>
    where
        Self: Sequence<Item = char>,
    {
        drain(self)
    }

    fn into_channel(self) -> async_channel::Receiver<Self::Item>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
    {
        let (sender, receiver) = async_channel::bounded(1);
        thread::spawn(move || {
            for item in into_iter(to_non_volatile(self)) {
                if sender.send_blocking(item).is_err() {
                    strand_core::warn!("into_channel receiver dropped, stopping worker");
                    return;
                }
            }
        });
        receiver
    }

    fn send_over<B>(self, sender: &B) -> Result<()>
    where
        B: BlockingSender<Self::Item>,
    {
        for item in into_iter(to_non_volatile(self)) {
            if let Err(error) = sender.deliver(item) {
                strand_core::warn!("send_over failed: {}", error);
                return Err(error);
            }
        }
        Ok(())
    }

    fn into_std_iter(self) -> IntoIter<NonVolatile<Self>> {
        into_iter(to_non_volatile(self))
    }

    #[cfg(feature = "futures")]
    fn into_stream(self) -> futures::stream::Iter<IntoIter<NonVolatile<Self>>> {
        futures::stream::iter(self.into_std_iter())
    }
}
