// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the strand workspace.
//!
//! This crate is meant for development and testing only. It depends on
//! `strand-core` alone, so every other crate of the workspace can pull it in
//! as a dev-dependency.
//!
//! # Key Types
//!
//! ## Fixtures
//!
//! Plain data records used across test suites:
//!
//! ```rust
//! use strand_test_utils::test_data::{person_alice, TestData};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     TestData::Animal(_) => panic!("Expected person"),
//! }
//! ```
//!
//! ## `ErrorInjectingSequence`
//!
//! Cuts a sequence short and reports an injected error, for testing how
//! combinators forward terminal errors.
//!
//! ## `StrictSequence`
//!
//! Counts `advance()` calls on the wrapped sequence and panics if it is
//! advanced again after reporting exhaustion.
//!
//! # Module Organization
//!
//! - `person`, `animal` - fixture types
//! - `test_data` - `TestData` enum and predefined fixtures
//! - `error_injection` - `ErrorInjectingSequence`
//! - `strict` - `StrictSequence`
//! - `helpers` - collection and assertion helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod error_injection;
pub mod helpers;
pub mod person;
pub mod strict;
pub mod test_data;

pub use error_injection::ErrorInjectingSequence;
pub use helpers::{assert_sequence_eq, assert_set_eq, collect_all, collect_with_error};
pub use strict::StrictSequence;
pub use test_data::TestData;
