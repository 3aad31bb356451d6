// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{BoxSequence, Sequence};
use strand_ops::{chain_all, chain_from, zip, ChainExt, ChainMapExt, LimitExt};
use strand_source::{empty, infinite_range, range, seq};
use strand_test_utils::{assert_sequence_eq, StrictSequence};

#[test]
fn test_chain_two_sequences() -> anyhow::Result<()> {
    assert_sequence_eq(seq![1, 2].chain(seq![3, 4]), &[1, 2, 3, 4]);
    assert_sequence_eq(empty::<i32>().chain(seq![3, 4]), &[3, 4]);
    assert_sequence_eq(seq![1, 2].chain(empty()), &[1, 2]);
    Ok(())
}

#[test]
fn test_chain_mixed_source_types() -> anyhow::Result<()> {
    // Arrange
    let bounded = range(3u32);
    let unbounded = infinite_range::<u32>();

    // Act
    let chained = bounded.chain(unbounded).limit(5);

    // Assert
    assert_sequence_eq(chained, &[0, 1, 2, 0, 1]);
    Ok(())
}

#[test]
fn test_chain_all_concatenates_in_order() -> anyhow::Result<()> {
    assert_sequence_eq(
        chain_all(vec![seq![1, 2], seq![3, 4], seq![5, 6]]),
        &[1, 2, 3, 4, 5, 6],
    );
    assert_sequence_eq(chain_all(vec![seq![], seq![1], seq![]]), &[1]);
    assert_sequence_eq(chain_all(Vec::<BoxSequence<'_, i32>>::new()), &[]);
    Ok(())
}

#[test]
fn test_chain_all_of_boxed_sequences() -> anyhow::Result<()> {
    // Arrange
    let sources: Vec<BoxSequence<'_, u8>> = vec![Box::new(range(2u8)), Box::new(seq![7u8, 8])];

    // Act & Assert
    assert_sequence_eq(chain_all(sources), &[0, 1, 7, 8]);
    Ok(())
}

#[test]
fn test_chain_from_sequence_of_sequences() -> anyhow::Result<()> {
    assert_sequence_eq(
        chain_from(seq![seq![1, 2], seq![3, 4], seq![5, 6]]),
        &[1, 2, 3, 4, 5, 6],
    );
    assert_sequence_eq(chain_from(seq![seq![], seq![1], seq![]]), &[1]);
    Ok(())
}

#[test]
fn test_chain_map_flattens() -> anyhow::Result<()> {
    assert_sequence_eq(
        seq![1, 5, 10].chain_map(|x| seq![x, x + 2]),
        &[1, 3, 5, 7, 10, 12],
    );
    assert_sequence_eq(seq![3u8, 0, 2].chain_map(range), &[0, 1, 2, 0, 1]);
    Ok(())
}

#[test]
fn test_chain_never_readvances_exhausted_sources() -> anyhow::Result<()> {
    // Arrange
    let first = StrictSequence::new(seq![1]);
    let second = StrictSequence::new(seq![2]);
    let mut chained = first.chain(second);

    // Act
    let mut seen = Vec::new();
    while chained.advance() {
        seen.push(chained.current());
    }

    // Assert
    assert_eq!(seen, vec![1, 2]);
    assert!(!chained.advance());
    assert!(!chained.advance());
    Ok(())
}

#[test]
fn test_chain_from_reports_volatility_of_active_inner() -> anyhow::Result<()> {
    // Arrange
    let mut rows = chain_from(seq![
        zip(vec![seq![1, 2], seq![10, 20]]),
        zip(vec![seq![3], seq![30]]),
    ]);
    let mut plain = chain_from(seq![seq![1, 2], seq![3]]);

    // Act & Assert
    assert!(!rows.is_volatile());
    assert!(rows.advance());
    assert!(rows.is_volatile());
    assert_eq!(rows.current_copy(), vec![1, 10]);
    assert!(plain.advance());
    assert!(!plain.is_volatile());
    Ok(())
}
