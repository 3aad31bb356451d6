// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in sequences.
//!
//! This module provides a sequence wrapper that stops early and reports a
//! terminal error, for testing error propagation through combinators.

use strand_core::{Sequence, SequenceError};

/// A sequence wrapper that fails after a given number of elements.
///
/// # Examples
///
/// ```rust
/// use strand_core::Sequence;
/// use strand_test_utils::ErrorInjectingSequence;
/// # use strand_core::SequenceError;
/// # struct Naturals(u32);
/// # impl Sequence for Naturals {
/// #     type Item = u32;
/// #     fn advance(&mut self) -> bool { self.0 += 1; true }
/// #     fn current(&mut self) -> u32 { self.0 }
/// # }
///
/// let mut failing = ErrorInjectingSequence::new(Naturals(0), 2);
///
/// assert!(failing.advance());
/// assert_eq!(failing.current(), 1);
/// assert!(failing.advance());
/// assert_eq!(failing.current(), 2);
///
/// // The third advance hits the injected error
/// assert!(!failing.advance());
/// assert!(matches!(failing.error(), Some(SequenceError::Processing { .. })));
/// ```
pub struct ErrorInjectingSequence<S> {
    inner: S,
    fail_after: usize,
    count: usize,
    error: Option<SequenceError>,
    failed: bool,
    ended: bool,
}

impl<S> ErrorInjectingSequence<S> {
    /// Creates a wrapper that yields at most `fail_after` elements of `inner`
    /// before failing with a processing error.
    ///
    /// If `inner` runs out first, the wrapper ends without an error.
    pub fn new(inner: S, fail_after: usize) -> Self {
        Self::with_error(
            inner,
            fail_after,
            SequenceError::processing("Injected test error"),
        )
    }

    /// Like [`new`](Self::new), failing with `error` instead.
    pub fn with_error(inner: S, fail_after: usize, error: SequenceError) -> Self {
        Self {
            inner,
            fail_after,
            count: 0,
            error: Some(error),
            failed: false,
            ended: false,
        }
    }
}

impl<S> Sequence for ErrorInjectingSequence<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.failed || self.ended {
            return false;
        }
        if self.count == self.fail_after {
            self.failed = true;
            return false;
        }
        self.count += 1;
        self.ended = !self.inner.advance();
        !self.ended
    }

    fn current(&mut self) -> S::Item {
        self.inner.current()
    }

    fn error(&self) -> Option<&SequenceError> {
        if self.failed {
            self.error.as_ref()
        } else {
            self.inner.error()
        }
    }
}
