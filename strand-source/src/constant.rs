// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::marker::PhantomData;
use strand_core::{Sequence, SequenceError};

/// Sequence with no elements.
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        false
    }

    fn current(&mut self) -> T {
        panic!("can't read from an empty sequence")
    }
}

/// Returns a sequence with no elements and no error.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// Sequence with no elements that ends with an error.
#[derive(Debug)]
pub struct ErrorSource<T> {
    error: SequenceError,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Sequence for ErrorSource<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        false
    }

    fn current(&mut self) -> T {
        panic!("can't read from an error sequence")
    }

    fn error(&self) -> Option<&SequenceError> {
        Some(&self.error)
    }
}

/// Returns a sequence with no elements whose terminal error is `error`.
///
/// Handy for tests and for reporting a failure that happened before any
/// element could be produced.
pub fn error<T>(error: SequenceError) -> ErrorSource<T> {
    ErrorSource {
        error,
        _marker: PhantomData,
    }
}
