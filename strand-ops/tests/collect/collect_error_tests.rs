// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Pair, SequenceError};
use strand_ops::{CollectExt, MapWithErrorExt};
use strand_source::{error, over_str, seq};
use strand_test_utils::ErrorInjectingSequence;

#[test]
fn test_into_vec_ignores_terminal_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 2, 3], 2);

    // Act
    let collected = failing.into_vec();

    // Assert
    assert_eq!(collected, vec![1, 2]);
    Ok(())
}

#[test]
fn test_try_into_vec_reports_terminal_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 2, 3], 2);

    // Act
    let result = failing.try_into_vec();

    // Assert
    assert!(matches!(result, Err(SequenceError::Processing { .. })));
    assert_eq!(seq![1, 2, 3].try_into_vec()?, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_try_into_map_reports_terminal_error() -> anyhow::Result<()> {
    // Arrange
    let pairs = ErrorInjectingSequence::with_error(
        seq![Pair::new(1, "a"), Pair::new(2, "b")],
        1,
        SequenceError::record("truncated"),
    );

    // Act
    let result = pairs.try_into_map();

    // Assert
    assert!(matches!(result, Err(SequenceError::Record { .. })));
    Ok(())
}

#[test]
fn test_try_into_string_reports_user_error() -> anyhow::Result<()> {
    // Arrange
    let digits = over_str("12x4").map_with_error(|c| {
        if c.is_ascii_digit() {
            Ok(c)
        } else {
            Err(SequenceError::processing(format!("not a digit: {c}")))
        }
    });

    // Act
    let result = digits.try_into_string();

    // Assert
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("Sequence processing error: not a digit: x".to_string())
    );
    assert_eq!(over_str("42").try_into_string()?, "42");
    Ok(())
}

#[test]
fn test_error_source_collects_nothing() -> anyhow::Result<()> {
    assert!(error::<char>(SequenceError::processing("dummy"))
        .into_string()
        .is_empty());
    assert!(error::<char>(SequenceError::processing("dummy"))
        .try_into_string()
        .is_err());
    Ok(())
}
