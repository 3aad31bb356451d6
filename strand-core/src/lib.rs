// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core protocol of the strand sequence library.
//!
//! A [`Sequence`] is a pull-based cursor: the consumer calls
//! [`advance`](Sequence::advance) to move to the next element,
//! [`current`](Sequence::current) to read it, and once `advance` reports
//! exhaustion, [`error`](Sequence::error) to tell a clean end of data from a
//! failure.
//!
//! ```
//! use strand_core::{Sequence, SequenceError};
//!
//! struct Countdown(u32);
//!
//! impl Sequence for Countdown {
//!     type Item = u32;
//!
//!     fn advance(&mut self) -> bool {
//!         if self.0 == 0 {
//!             return false;
//!         }
//!         self.0 -= 1;
//!         true
//!     }
//!
//!     fn current(&mut self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let mut seq = Countdown(3);
//! let mut seen = Vec::new();
//! while seq.advance() {
//!     seen.push(seq.current());
//! }
//! assert_eq!(seen, vec![2, 1, 0]);
//! assert!(seq.error().is_none());
//! ```

pub mod error;
pub mod into_iter;
pub mod logging;
pub mod non_volatile;
pub mod numeric;
pub mod pair;
pub mod sequence;

pub use self::error::{IntoSequenceError, Result, SequenceError};
pub use self::into_iter::{into_iter, IntoIter};
pub use self::non_volatile::{to_non_volatile, NonVolatile};
pub use self::numeric::{Numeric, NumericOrd};
pub use self::pair::Pair;
pub use self::sequence::{BoxSequence, Sequence, VolatileSequence};
