// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Pair, SequenceError};
use strand_ops::prelude::*;
use strand_source::{cycle, from_vec, infinite_range, over_lines, over_str, seq};
use strand_test_utils::test_data::{
    animal_bird, animal_dog, animal_spider, person_alice, person_bob, person_charlie, TestData,
};
use strand_test_utils::{collect_with_error, ErrorInjectingSequence};

#[test]
fn test_filter_map_limit_over_infinite_source() -> anyhow::Result<()> {
    // Arrange
    let naturals = infinite_range::<u64>();

    // Act
    let result = naturals
        .filter(|x| x % 3 == 0)
        .map(|x| x * x)
        .skip(1)
        .limit(4)
        .into_vec();

    // Assert
    assert_eq!(result, vec![9, 36, 81, 144]);
    Ok(())
}

#[test]
fn test_legs_per_animal_through_pipeline() -> anyhow::Result<()> {
    // Arrange
    let data = seq![
        person_alice(),
        animal_dog(),
        person_bob(),
        animal_spider(),
        animal_bird(),
        person_charlie()
    ];

    // Act
    let total_legs = data
        .filter(|d| matches!(d, TestData::Animal(_)))
        .map(|d| match d {
            TestData::Animal(a) => a.legs,
            TestData::Person(_) => 0,
        })
        .sum();

    // Assert
    assert_eq!(total_legs, 14);
    Ok(())
}

#[test]
fn test_word_frequencies_from_lines() -> anyhow::Result<()> {
    // Arrange
    let input = "b a\nc a\n\na b a\n";

    // Act
    let words = over_lines(input.as_bytes())
        .chain_map(|line| from_vec(line.split_whitespace().map(str::to_string).collect()))
        .sort()
        .group_by(|w| w.clone())
        .map(|Pair { first, second }| (first, second.count()))
        .into_vec();

    // Assert
    assert_eq!(
        words,
        vec![
            ("a".to_string(), 4),
            ("b".to_string(), 2),
            ("c".to_string(), 1)
        ]
    );
    Ok(())
}

#[test]
fn test_cycle_enumerate_compress() -> anyhow::Result<()> {
    // Arrange
    let letters = cycle(3, vec!['a', 'b', 'c']);

    // Act
    let every_other = letters
        .enumerate(0)
        .compress(cycle(5, vec![true, false]))
        .map(|Pair { first, second }| format!("{first}{second}"))
        .into_vec();

    // Assert
    assert_eq!(every_other, vec!["0a", "2c", "4b", "6a", "8c"]);
    Ok(())
}

#[test]
fn test_running_totals_then_pairwise_differences() -> anyhow::Result<()> {
    // Arrange
    let totals = seq![3, 1, 4, 1, 5].accumulate(|acc, x| acc + x).into_vec();

    // Act
    let deltas = from_vec(totals.clone())
        .pairwise(from_vec(totals).skip(1))
        .map(|Pair { first, second }| second - first)
        .into_vec();

    // Assert
    assert_eq!(deltas, vec![1, 4, 1, 5]);
    Ok(())
}

#[test]
fn test_error_flows_through_long_pipeline() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::with_error(
        infinite_range::<i32>(),
        10,
        SequenceError::record("sensor offline"),
    );

    // Act
    let (items, error) = collect_with_error(
        failing
            .filter(|x| x % 2 == 0)
            .map(|x| x + 100)
            .step_by(2)
            .enumerate(0),
    );

    // Assert
    assert_eq!(
        items,
        vec![Pair::new(0, 100), Pair::new(1, 104), Pair::new(2, 108)]
    );
    assert_eq!(
        error.map(|e| e.to_string()),
        Some("Malformed record: sensor offline".to_string())
    );
    Ok(())
}

#[test]
fn test_text_statistics() -> anyhow::Result<()> {
    // Arrange
    let text = "hello, world";

    // Act
    let vowels = over_str(text).filter(|c| "aeiou".contains(*c)).count();
    let upper = over_str(text)
        .take_while(|c| c.is_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .into_string();
    let has_space = over_str(text).any_func(|c| c.is_whitespace());

    // Assert
    assert_eq!(vowels, 3);
    assert_eq!(upper, "HELLO");
    assert!(has_space);
    Ok(())
}
