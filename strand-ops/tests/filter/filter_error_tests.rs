// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_ops::{DropWhileExt, FilterExt, TakeWhileExt};
use strand_source::seq;
use strand_test_utils::{collect_with_error, ErrorInjectingSequence};

#[test]
fn test_filter_forwards_source_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 2, 3, 4, 5], 4);

    // Act
    let (items, error) = collect_with_error(failing.filter(|x| x % 2 == 1));

    // Assert
    assert_eq!(items, vec![1, 3]);
    assert!(error.is_some());
    Ok(())
}

#[test]
fn test_drop_while_forwards_error_while_dropping() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 1, 1, 5], 2);

    // Act
    let (items, error) = collect_with_error(failing.drop_while(|x| *x == 1));

    // Assert
    assert!(items.is_empty());
    assert!(error.is_some());
    Ok(())
}

#[test]
fn test_take_while_forwards_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 2, 3], 1);

    // Act
    let (items, error) = collect_with_error(failing.take_while(|_| true));

    // Assert
    assert_eq!(items, vec![1]);
    assert!(error.is_some());
    Ok(())
}
