// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal errors reported by sequences.
//!
//! Exhaustion is never an error: it is the ordinary `false` result of
//! [`Sequence::advance`](crate::Sequence::advance). A [`SequenceError`] only
//! appears through [`Sequence::error`](crate::Sequence::error) once a
//! sequence stopped because production failed.
//!
//! # Examples
//!
//! ```
//! use strand_core::{Result, SequenceError};
//!
//! fn parse(raw: &str) -> Result<i32> {
//!     raw.parse::<i32>().map_err(SequenceError::user)
//! }
//!
//! assert!(parse("12").is_ok());
//! assert!(matches!(parse("x"), Err(SequenceError::User(_))));
//! ```

/// Root error type for every terminal sequence failure.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Reading from an I/O-backed source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record reader produced something it could not decode
    #[error("Malformed record: {context}")]
    Record {
        /// Description of the malformed record
        context: String,
    },

    /// Channel send operation failed
    ///
    /// This occurs when pushing elements to a channel whose receiver
    /// has been dropped.
    #[error("Channel send failed: receiver dropped")]
    ChannelSend,

    /// General failure while producing an element
    #[error("Sequence processing error: {context}")]
    Processing {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// This wraps errors produced by closures handed to combinators such as
    /// `map_with_error` or `for_each_with_error`.
    #[error("User error: {0}")]
    User(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SequenceError {
    /// Create a processing error with the given context
    pub fn processing(context: impl Into<String>) -> Self {
        Self::Processing {
            context: context.into(),
        }
    }

    /// Create a malformed-record error with the given context
    pub fn record(context: impl Into<String>) -> Self {
        Self::Record {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::User(Box::new(error))
    }

    /// Check whether the error came from reading an external source
    #[must_use]
    pub const fn is_source_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Record { .. })
    }
}

/// Specialized Result type for sequence operations
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Extension trait for converting any error into a `SequenceError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so
/// closures can write `.map_err(IntoSequenceError::into_sequence_error)`.
pub trait IntoSequenceError {
    /// Convert this error into a `SequenceError::User`
    fn into_sequence_error(self) -> SequenceError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoSequenceError for E {
    fn into_sequence_error(self) -> SequenceError {
        SequenceError::user(self)
    }
}

impl Clone for SequenceError {
    fn clone(&self) -> Self {
        match self {
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), e.to_string())),
            Self::Record { context } => Self::Record {
                context: context.clone(),
            },
            Self::ChannelSend => Self::ChannelSend,
            Self::Processing { context } => Self::Processing {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::User(e) => Self::Processing {
                context: format!("User error: {e}"),
            },
        }
    }
}
