// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::num::ParseIntError;
use strand_core::{IntoSequenceError, Sequence, SequenceError};
use strand_ops::{CollectExt, MapWithErrorExt};
use strand_source::{empty, seq};
use strand_test_utils::{collect_with_error, ErrorInjectingSequence, StrictSequence};

fn parse(raw: &str) -> strand_core::Result<i32> {
    raw.parse::<i32>()
        .map_err(|e: ParseIntError| e.into_sequence_error())
}

#[test]
fn test_map_with_error_stops_at_first_failure() -> anyhow::Result<()> {
    // Arrange
    let checked = seq![1, 2, -1, -2, 3, 4].map_with_error(|x| {
        if x < 0 {
            Err(SequenceError::processing("x can't be negative"))
        } else {
            Ok(x * 2)
        }
    });

    // Act
    let (items, error) = collect_with_error(checked);

    // Assert
    assert_eq!(items, vec![2, 4]);
    assert_eq!(
        error.map(|e| e.to_string()),
        Some("Sequence processing error: x can't be negative".to_string())
    );
    Ok(())
}

#[test]
fn test_map_with_error_wraps_user_errors() -> anyhow::Result<()> {
    // Arrange
    let parsed = seq!["1", "2", "three"].map_with_error(parse);

    // Act
    let result = parsed.try_into_vec();

    // Assert
    let message = result.map_err(|e| e.to_string()).err().unwrap_or_default();
    assert!(message.contains("invalid digit"), "{message}");
    assert_eq!(seq!["4", "5"].map_with_error(parse).try_into_vec()?, vec![4, 5]);
    Ok(())
}

#[test]
fn test_map_with_error_halts_source_pulls() -> anyhow::Result<()> {
    // Arrange
    let strict = StrictSequence::new(seq!["7", "x", "9"]);
    let advances = strict.advances();
    let mut parsed = strict.map_with_error(parse);

    // Act
    while parsed.advance() {}
    let again = parsed.advance();

    // Assert
    assert!(!again);
    assert_eq!(advances.get(), 2);
    assert!(parsed.error().is_some());
    Ok(())
}

#[test]
fn test_map_with_error_shadows_source_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 2, 3], 2);

    // Act
    let (items, error) = collect_with_error(
        failing.map_with_error(|x| if x == 2 { Err(SequenceError::record("two")) } else { Ok(x) }),
    );

    // Assert
    assert_eq!(items, vec![1]);
    assert!(matches!(error, Some(SequenceError::Record { .. })));
    Ok(())
}

#[test]
fn test_map_with_error_forwards_source_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 2, 3], 2);

    // Act
    let (items, error) = collect_with_error(failing.map_with_error(Ok));

    // Assert
    assert_eq!(items, vec![1, 2]);
    assert!(matches!(error, Some(SequenceError::Processing { .. })));
    assert!(empty::<i32>().map_with_error(Ok).try_into_vec()?.is_empty());
    Ok(())
}
