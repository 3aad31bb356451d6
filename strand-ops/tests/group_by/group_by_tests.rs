// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{Pair, Sequence};
use strand_ops::{CollectExt, GroupByExt, MapExt};
use strand_source::{empty, from_vec, seq};
use strand_test_utils::{collect_with_error, ErrorInjectingSequence};

#[derive(Debug, Clone, PartialEq)]
struct Department {
    id: u32,
    name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    id: u32,
    name: &'static str,
    department: Department,
}

fn initial(name: &&str) -> u8 {
    name.as_bytes()[0]
}

fn collect_groups<K, S>(seq: S) -> Vec<(K, Vec<&'static str>)>
where
    S: Sequence<Item = Pair<K, strand_ops::Group<&'static str>>>,
{
    seq.map(|Pair { first, second }| (first, second.into_vec()))
        .into_vec()
}

#[test]
fn test_group_by_sorted_input() -> anyhow::Result<()> {
    // Arrange
    let names = seq![
        "Alice", "Adam", "Amelia", "Andrew", "Bob", "Brian", "Casey", "Chloe", "Craig"
    ];

    // Act
    let groups = collect_groups(names.group_by(initial));

    // Assert
    assert_eq!(
        groups,
        vec![
            (b'A', vec!["Alice", "Adam", "Amelia", "Andrew"]),
            (b'B', vec!["Bob", "Brian"]),
            (b'C', vec!["Casey", "Chloe", "Craig"]),
        ]
    );
    Ok(())
}

#[test]
fn test_group_by_keys_only() -> anyhow::Result<()> {
    // Arrange
    let names = seq![
        "Alice", "Adam", "Amelia", "Andrew", "Bob", "Brian", "Casey", "Chloe", "Craig"
    ];

    // Act
    let keys = names.group_by(initial).map(|group| group.first).into_vec();

    // Assert
    assert_eq!(keys, b"ABC".to_vec());
    Ok(())
}

#[test]
fn test_group_by_unordered_input_repeats_keys() -> anyhow::Result<()> {
    // Arrange
    let names = seq![
        "Alice", "Andrew", "Bob", "Casey", "Adam", "Amelia", "Chloe", "Craig", "Brian"
    ];

    // Act
    let groups = collect_groups(names.group_by(initial));

    // Assert
    assert_eq!(
        groups,
        vec![
            (b'A', vec!["Alice", "Andrew"]),
            (b'B', vec!["Bob"]),
            (b'C', vec!["Casey"]),
            (b'A', vec!["Adam", "Amelia"]),
            (b'C', vec!["Chloe", "Craig"]),
            (b'B', vec!["Brian"]),
        ]
    );
    Ok(())
}

#[test]
fn test_group_by_func_with_custom_equality() -> anyhow::Result<()> {
    // Arrange
    let departments = [
        Department { id: 1, name: "HR" },
        Department { id: 1, name: "Human Resources" },
        Department { id: 2, name: "IT" },
        Department { id: 2, name: "Computers" },
        Department { id: 3, name: "Sales" },
    ];
    let staff = [
        ("Alice", 0),
        ("Andrew", 0),
        ("Bob", 1),
        ("Casey", 2),
        ("Adam", 3),
        ("Amelia", 2),
        ("Chloe", 3),
        ("Craig", 4),
        ("Brian", 4),
    ];
    let employees: Vec<Employee> = staff
        .iter()
        .zip(1..)
        .map(|(&(name, dep), id)| Employee {
            id,
            name,
            department: departments[dep].clone(),
        })
        .collect();

    // Act
    let groups = from_vec(employees.clone())
        .group_by_func(|e| e.department.clone(), |a, b| a.id == b.id)
        .map(|Pair { first, second }| (first, second.into_vec()))
        .into_vec();

    // Assert
    assert_eq!(
        groups,
        vec![
            (departments[0].clone(), employees[0..3].to_vec()),
            (departments[2].clone(), employees[3..7].to_vec()),
            (departments[4].clone(), employees[7..9].to_vec()),
        ]
    );
    assert_eq!(groups[1].0.name, "IT");
    let it_staff: Vec<(u32, &str)> = groups[1].1.iter().map(|e| (e.id, e.name)).collect();
    assert_eq!(it_staff, vec![(4, "Casey"), (5, "Adam"), (6, "Amelia"), (7, "Chloe")]);
    Ok(())
}

#[test]
fn test_group_by_empty_and_single() -> anyhow::Result<()> {
    assert!(collect_groups(empty::<&'static str>().group_by(initial)).is_empty());
    assert_eq!(
        collect_groups(seq!["Zed"].group_by(initial)),
        vec![(b'Z', vec!["Zed"])]
    );
    Ok(())
}

#[test]
fn test_group_by_forwards_source_error() -> anyhow::Result<()> {
    // Arrange
    let failing = ErrorInjectingSequence::new(seq![1, 1, 2, 2, 3], 3);

    // Act
    let (groups, error) = collect_with_error(
        failing
            .group_by(|x| *x)
            .map(|Pair { first, second }| (first, second.remaining())),
    );

    // Assert
    assert_eq!(groups, vec![(1, 2), (2, 1)]);
    assert!(error.is_some());
    Ok(())
}
