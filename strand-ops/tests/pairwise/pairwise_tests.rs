// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::Pair;
use strand_ops::PairwiseExt;
use strand_source::{empty, infinite_range, seq};
use strand_test_utils::test_data::{animal_dog, person_alice};
use strand_test_utils::{assert_sequence_eq, StrictSequence};

#[test]
fn test_pairwise_stops_at_shorter() -> anyhow::Result<()> {
    assert_sequence_eq(
        seq![1, 2, 3].pairwise(seq!["a", "b", "c"]),
        &[Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")],
    );
    assert_sequence_eq(seq![1, 2, 3].pairwise(seq!["a"]), &[Pair::new(1, "a")]);
    assert_sequence_eq(empty::<i32>().pairwise(seq!["a", "b"]), &[]);
    Ok(())
}

#[test]
fn test_pairwise_does_not_pull_second_after_first_ends() -> anyhow::Result<()> {
    // Arrange
    let second = StrictSequence::new(infinite_range::<u8>());
    let advances = second.advances();

    // Act
    assert_sequence_eq(
        seq![person_alice(), animal_dog()].pairwise(second),
        &[Pair::new(person_alice(), 0), Pair::new(animal_dog(), 1)],
    );

    // Assert
    assert_eq!(advances.get(), 2);
    Ok(())
}

#[test]
fn test_pairwise_longest_fills_shorter_side() -> anyhow::Result<()> {
    assert_sequence_eq(
        seq![1, 2, 3].pairwise_longest(seq!["a", "b", "c"], 0, "-"),
        &[Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")],
    );
    assert_sequence_eq(
        seq![1, 2, 3].pairwise_longest(seq!["a"], 0, "-"),
        &[Pair::new(1, "a"), Pair::new(2, "-"), Pair::new(3, "-")],
    );
    assert_sequence_eq(
        empty::<i32>().pairwise_longest(seq!["a", "b"], 0, "-"),
        &[Pair::new(0, "a"), Pair::new(0, "b")],
    );
    assert_sequence_eq(empty::<i32>().pairwise_longest(empty::<&str>(), 0, "-"), &[]);
    Ok(())
}

#[test]
fn test_pairwise_longest_never_readvances_finished_side() -> anyhow::Result<()> {
    // Arrange
    let first = StrictSequence::new(seq![1]);
    let second = StrictSequence::new(seq!['a', 'b', 'c']);

    // Act & Assert
    assert_sequence_eq(
        first.pairwise_longest(second, 0, '?'),
        &[Pair::new(1, 'a'), Pair::new(0, 'b'), Pair::new(0, 'c')],
    );
    Ok(())
}
