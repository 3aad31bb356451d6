// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_ops::QuantifyExt;
use strand_source::{empty, from_vec, infinite_range, seq};
use strand_test_utils::person::Person;
use strand_test_utils::test_data::person;
use strand_test_utils::StrictSequence;

fn is_adult(p: &Person) -> bool {
    p.age >= 18
}

#[test]
fn test_any() -> anyhow::Result<()> {
    assert!(seq![false, true, false].any());
    assert!(!seq![false, false].any());
    assert!(seq![true, true].any());
    assert!(!empty::<bool>().any());
    Ok(())
}

#[test]
fn test_all() -> anyhow::Result<()> {
    assert!(!seq![false, true, false].all());
    assert!(!seq![false, false].all());
    assert!(seq![true, true].all());
    assert!(empty::<bool>().all());
    Ok(())
}

#[test]
fn test_none() -> anyhow::Result<()> {
    assert!(!seq![false, true, false].none());
    assert!(seq![false, false].none());
    assert!(!seq![true, true].none());
    assert!(empty::<bool>().none());
    Ok(())
}

#[test]
fn test_func_variants() -> anyhow::Result<()> {
    // Arrange
    let mixed = || from_vec(vec![person("Alice", 30, "Lisbon"), person("Bob", 16, "Oslo")]);
    let minors = || from_vec(vec![person("Bob", 16, "Oslo"), person("Charlie", 17, "Oslo")]);

    // Act & Assert
    assert!(mixed().any_func(is_adult));
    assert!(!minors().any_func(is_adult));
    assert!(!mixed().all_func(is_adult));
    assert!(minors().none_func(is_adult));
    assert!(!mixed().none_func(is_adult));
    assert!(empty::<Person>().all_func(is_adult));
    Ok(())
}

#[test]
fn test_any_short_circuits() -> anyhow::Result<()> {
    // Arrange
    let strict = StrictSequence::new(infinite_range::<u32>());
    let advances = strict.advances();

    // Act
    let found = strict.any_func(|x| *x == 3);

    // Assert
    assert!(found);
    assert_eq!(advances.get(), 4);
    Ok(())
}

#[test]
fn test_all_short_circuits() -> anyhow::Result<()> {
    // Arrange
    let strict = StrictSequence::new(infinite_range::<u32>());
    let advances = strict.advances();

    // Act
    let every = strict.all_func(|x| *x < 2);

    // Assert
    assert!(!every);
    assert_eq!(advances.get(), 3);
    Ok(())
}
