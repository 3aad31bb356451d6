// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallible map operator.
//!
//! The function runs once per source element, during `advance()`. The first
//! `Err` halts the sequence and becomes its terminal error, taking precedence
//! over anything the source reports. If `f` never fails, the source's own
//! error is forwarded.
//!
//! ```rust
//! use strand_core::{IntoSequenceError, Sequence};
//! use strand_ops::MapWithErrorExt;
//! use strand_source::seq;
//! use strand_test_utils::collect_all;
//!
//! let mut checked = seq![1, 2, -1, 3].map_with_error(|x: i32| {
//!     u32::try_from(x).map_err(IntoSequenceError::into_sequence_error)
//! });
//!
//! assert_eq!(collect_all(&mut checked), vec![1, 2]);
//! assert!(checked.error().is_some());
//! ```

use strand_core::{Result, Sequence, SequenceError};

/// Sequence returned by [`MapWithErrorExt::map_with_error`].
#[derive(Debug)]
pub struct MapWithError<S, F, U> {
    source: S,
    f: F,
    value: Option<U>,
    error: Option<SequenceError>,
    done: bool,
}

impl<S, F, U> Sequence for MapWithError<S, F, U>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<U>,
    U: Clone,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.source.advance() {
            self.done = true;
            return false;
        }
        match (self.f)(self.source.current()) {
            Ok(value) => {
                self.value = Some(value);
                true
            }
            Err(e) => {
                strand_core::debug!("map_with_error halted: {}", e);
                self.value = None;
                self.error = Some(e);
                self.done = true;
                false
            }
        }
    }

    fn current(&mut self) -> U {
        self.value
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }

    fn error(&self) -> Option<&SequenceError> {
        self.error.as_ref().or_else(|| self.source.error())
    }
}

/// Extension trait providing the `map_with_error` operator for sequences.
pub trait MapWithErrorExt: Sequence + Sized {
    /// Applies a fallible `f` to every element, stopping at the first error.
    fn map_with_error<U, F>(self, f: F) -> MapWithError<Self, F, U>
    where
        F: FnMut(Self::Item) -> Result<U>,
        U: Clone;
}

impl<S: Sequence> MapWithErrorExt for S {
    fn map_with_error<U, F>(self, f: F) -> MapWithError<Self, F, U>
    where
        F: FnMut(Self::Item) -> Result<U>,
        U: Clone,
    {
        MapWithError {
            source: self,
            f,
            value: None,
            error: None,
            done: false,
        }
    }
}
