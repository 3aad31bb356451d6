// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Pair, SequenceError};
use strand_ops::PairwiseExt;
use strand_source::{error, seq};
use strand_test_utils::{collect_with_error, ErrorInjectingSequence};

#[test]
fn test_pairwise_longest_reports_error_after_both_end() -> anyhow::Result<()> {
    // Arrange
    let failing = error::<i32>(SequenceError::processing("some error"));

    // Act
    let (pairs, error) = collect_with_error(failing.pairwise_longest(seq!["a", "b"], 0, "-"));

    // Assert
    assert_eq!(pairs, vec![Pair::new(0, "a"), Pair::new(0, "b")]);
    assert_eq!(
        error.map(|e| e.to_string()),
        Some("Sequence processing error: some error".to_string())
    );
    Ok(())
}

#[test]
fn test_pairwise_reports_error_of_either_side() -> anyhow::Result<()> {
    // Arrange
    let left = seq![1, 2, 3].pairwise(ErrorInjectingSequence::new(seq!['a', 'b', 'c'], 1));
    let right = ErrorInjectingSequence::new(seq![1, 2, 3], 2).pairwise(seq!['a', 'b', 'c']);

    // Act
    let (left_pairs, left_error) = collect_with_error(left);
    let (right_pairs, right_error) = collect_with_error(right);

    // Assert
    assert_eq!(left_pairs, vec![Pair::new(1, 'a')]);
    assert!(left_error.is_some());
    assert_eq!(right_pairs, vec![Pair::new(1, 'a'), Pair::new(2, 'b')]);
    assert!(right_error.is_some());
    Ok(())
}
