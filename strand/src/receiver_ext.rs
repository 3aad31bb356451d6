// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods turning channel receivers into sequences.

use strand_source::{over_channel, BlockingReceiver, ChannelSource};

/// Extension trait for channel receivers to create sequences.
pub trait ReceiverExt: BlockingReceiver + Sized {
    /// Converts the receiver into a sequence that blocks on every `advance()`
    /// until a value arrives, and ends once all senders are gone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::mpsc;
    /// use strand::prelude::*;
    ///
    /// let (tx, rx) = mpsc::channel();
    /// for reading in [21, 23, 19] {
    ///     tx.send(reading).unwrap();
    /// }
    /// drop(tx);
    ///
    /// let warm = rx.into_sequence().filter(|t| *t > 20).into_vec();
    /// assert_eq!(warm, vec![21, 23]);
    /// ```
    fn into_sequence(self) -> ChannelSource<Self>;
}

impl<R: BlockingReceiver> ReceiverExt for R {
    fn into_sequence(self) -> ChannelSource<Self> {
        over_channel(self)
    }
}
