// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_ops::{MapExt, ReduceExt};
use strand_source::{empty, from_vec, range, range_from, seq};
use strand_test_utils::person::Person;
use strand_test_utils::test_data::{people, person};

fn add(acc: i32, x: i32) -> i32 {
    acc + x
}

fn younger(a: &Person, b: &Person) -> bool {
    a.age < b.age
}

fn older(a: &Person, b: &Person) -> bool {
    a.age > b.age
}

#[test]
fn test_reduce() -> anyhow::Result<()> {
    assert_eq!(seq![1, 2, 3, 4, 5].reduce(add), Some(15));
    assert_eq!(seq![1].reduce(add), Some(1));
    assert_eq!(empty::<i32>().reduce(add), None);
    Ok(())
}

#[test]
fn test_reduce_with_initial() -> anyhow::Result<()> {
    assert_eq!(seq![1, 2, 3, 4, 5].reduce_with_initial(add, 0), 15);
    assert_eq!(seq![1, 2, 3, 4, 5].reduce_with_initial(add, 5), 20);
    assert_eq!(seq![1].reduce_with_initial(add, 5), 6);
    assert_eq!(empty::<i32>().reduce_with_initial(add, 5), 5);
    assert_eq!(
        seq!["a", "b"].reduce_with_initial(|acc: String, s| acc + s, String::from(">")),
        ">ab"
    );
    Ok(())
}

#[test]
fn test_sum_and_product() -> anyhow::Result<()> {
    assert_eq!(range_from(1, 6).sum(), 15);
    assert_eq!(range_from(1, 6).product(), 120);
    assert_eq!(empty::<i32>().sum(), 0);
    assert_eq!(empty::<i32>().product(), 1);
    assert_eq!(seq![0.5, 0.25].sum(), 0.75);
    Ok(())
}

#[test]
fn test_sum_wraps_on_overflow() -> anyhow::Result<()> {
    assert_eq!(seq![250u8, 10].sum(), 4);
    assert_eq!(range(6u8).map(|x| x + 1).product(), 208);
    Ok(())
}

#[test]
fn test_min_and_max() -> anyhow::Result<()> {
    assert_eq!(seq![2, 5, 1, 9, 3].min(), Some(1));
    assert_eq!(seq![2, 5, 1, 9, 3].max(), Some(9));
    assert_eq!(empty::<i32>().min(), None);
    assert_eq!(empty::<i32>().max(), None);
    Ok(())
}

#[test]
fn test_min_func_and_max_func() -> anyhow::Result<()> {
    assert_eq!(
        from_vec(people()).min_func(younger),
        Some(person("Alice", 25, "Lisbon"))
    );
    assert_eq!(
        from_vec(people()).max_func(older),
        Some(person("Diane", 40, "Oslo"))
    );
    assert_eq!(empty::<Person>().min_func(younger), None);
    Ok(())
}

#[test]
fn test_extremes_keep_first_of_equals() -> anyhow::Result<()> {
    // Arrange
    let twins = vec![
        person("Bob", 30, "Oslo"),
        person("Eve", 30, "Rome"),
        person("Zoe", 30, "Oslo"),
    ];

    // Act
    let youngest = from_vec(twins.clone()).min_func(younger);
    let oldest = from_vec(twins).max_func(older);

    // Assert
    assert_eq!(youngest.map(|p| p.name), Some("Bob".to_string()));
    assert_eq!(oldest.map(|p| p.name), Some("Bob".to_string()));
    Ok(())
}
