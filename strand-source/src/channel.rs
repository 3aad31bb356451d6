// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Channel-backed sequences.
//!
//! [`ChannelSource::advance`] blocks the calling thread until a value arrives
//! or every sender is dropped. A producer that never closes its end leaves the
//! consumer blocked forever.

use std::sync::mpsc;
use strand_core::Sequence;

/// Receiving half of a channel that can be waited on synchronously.
pub trait BlockingReceiver {
    /// Type of received values
    type Item;

    /// Blocks until a value arrives, returning `None` once the channel is
    /// closed and drained.
    fn receive(&mut self) -> Option<Self::Item>;
}

impl<T> BlockingReceiver for mpsc::Receiver<T> {
    type Item = T;

    fn receive(&mut self) -> Option<T> {
        self.recv().ok()
    }
}

impl<T> BlockingReceiver for async_channel::Receiver<T> {
    type Item = T;

    fn receive(&mut self) -> Option<T> {
        self.recv_blocking().ok()
    }
}

/// Sequence draining a [`BlockingReceiver`].
#[derive(Debug)]
pub struct ChannelSource<R>
where
    R: BlockingReceiver,
{
    receiver: R,
    value: Option<R::Item>,
    closed: bool,
}

impl<R> Sequence for ChannelSource<R>
where
    R: BlockingReceiver,
    R::Item: Clone,
{
    type Item = R::Item;

    fn advance(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.value = self.receiver.receive();
        self.closed = self.value.is_none();
        !self.closed
    }

    fn current(&mut self) -> R::Item {
        self.value
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }
}

/// Yields values received over `receiver` until the channel closes.
pub fn over_channel<R>(receiver: R) -> ChannelSource<R>
where
    R: BlockingReceiver,
{
    ChannelSource {
        receiver,
        value: None,
        closed: false,
    }
}
