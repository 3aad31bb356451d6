// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashMap;
use strand_core::SequenceError;
use strand_ops::{ConsumeExt, InspectExt};
use strand_source::{empty, from_vec, over_str, seq};
use strand_test_utils::test_data::{people, person};
use strand_test_utils::StrictSequence;

#[test]
fn test_count_drains_the_sequence() -> anyhow::Result<()> {
    assert_eq!(seq![1, 2, 3].count(), 3);
    assert_eq!(empty::<i32>().count(), 0);
    assert_eq!(over_str("héllo").count(), 5);
    Ok(())
}

#[test]
fn test_exhaust_pulls_every_element() -> anyhow::Result<()> {
    // Arrange
    let strict = StrictSequence::new(seq![1, 2, 3]);
    let advances = strict.advances();

    // Act
    strict.exhaust();

    // Assert
    assert_eq!(advances.get(), 4);
    Ok(())
}

#[test]
fn test_for_each_visits_in_order() -> anyhow::Result<()> {
    // Arrange
    let mut rendered = String::new();

    // Act
    seq![1, 2, 3].for_each(|x| rendered.push_str(&x.to_string()));

    // Assert
    assert_eq!(rendered, "123");
    Ok(())
}

#[test]
fn test_for_each_with_error_stops_at_first_failure() -> anyhow::Result<()> {
    // Arrange
    let mut rendered = String::new();
    let mut pulled = 0;

    // Act
    let result = seq![1, -1, 2]
        .inspect(|_| pulled += 1)
        .for_each_with_error(|x| {
            if x < 0 {
                return Err(SequenceError::processing("x can't be negative"));
            }
            rendered.push_str(&x.to_string());
            Ok(())
        });

    // Assert
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("Sequence processing error: x can't be negative".to_string())
    );
    assert_eq!(rendered, "1");
    assert_eq!(pulled, 2);
    Ok(())
}

#[test]
fn test_for_each_with_error_succeeds_on_clean_input() -> anyhow::Result<()> {
    // Arrange
    let mut total = 0;

    // Act
    seq![1, 2, 3].for_each_with_error(|x| {
        total += x;
        Ok(())
    })?;

    // Assert
    assert_eq!(total, 6);
    Ok(())
}

#[test]
fn test_aggregate_by_groups_regardless_of_order() -> anyhow::Result<()> {
    // Arrange
    let names = seq![
        "Alice", "Andrew", "Bob", "Casey", "Adam", "Amelia", "Chloe", "Craig", "Brian"
    ];

    // Act
    let groups = names.aggregate_by(|name| name.chars().next());

    // Assert
    assert_eq!(
        groups,
        HashMap::from([
            (Some('A'), vec!["Alice", "Andrew", "Adam", "Amelia"]),
            (Some('B'), vec!["Bob", "Brian"]),
            (Some('C'), vec!["Casey", "Chloe", "Craig"]),
        ])
    );
    Ok(())
}

#[test]
fn test_aggregate_by_city() -> anyhow::Result<()> {
    // Act
    let by_city = from_vec(people()).aggregate_by(|p| p.city.clone());

    // Assert
    assert_eq!(by_city.len(), 2);
    assert_eq!(
        by_city["Lisbon"],
        vec![person("Alice", 25, "Lisbon"), person("Charlie", 35, "Lisbon")]
    );
    assert_eq!(
        by_city["Oslo"],
        vec![person("Bob", 30, "Oslo"), person("Diane", 40, "Oslo")]
    );
    Ok(())
}
