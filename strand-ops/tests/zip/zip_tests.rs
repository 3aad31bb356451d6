// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::{BoxSequence, Sequence, VolatileSequence};
use strand_ops::{zip, zip_longest, CollectExt, MapExt, ZipExt, ZipLongestExt};
use strand_source::{empty, over_str, seq};
use strand_test_utils::StrictSequence;

fn rows<S>(seq: S) -> Vec<String>
where
    S: Sequence<Item = Vec<char>>,
{
    seq.map(|row| row.into_iter().collect::<String>()).into_vec()
}

fn text(s: &'static str) -> BoxSequence<'static, char> {
    Box::new(over_str(s))
}

fn nothing() -> BoxSequence<'static, char> {
    Box::new(empty::<char>())
}

#[test]
fn test_zip_stops_at_shortest() -> anyhow::Result<()> {
    assert_eq!(
        rows(zip(vec![over_str("abc"), over_str("123"), over_str("xyz")])),
        vec!["a1x", "b2y", "c3z"]
    );
    assert_eq!(
        rows(zip(vec![over_str("abc"), over_str("12"), over_str("x")])),
        vec!["a1x"]
    );
    assert!(rows(zip(vec![text("abc"), nothing()])).is_empty());
    Ok(())
}

#[test]
fn test_zip_of_nothing_is_empty() -> anyhow::Result<()> {
    assert!(rows(zip(Vec::<BoxSequence<'_, char>>::new())).is_empty());
    Ok(())
}

#[test]
fn test_zip_method_puts_self_first() -> anyhow::Result<()> {
    assert_eq!(
        rows(over_str("ab").zip(vec![over_str("cd"), over_str("ef")])),
        vec!["ace", "bdf"]
    );
    Ok(())
}

#[test]
fn test_zip_lends_reused_buffer() -> anyhow::Result<()> {
    // Arrange
    let mut zipped = zip(vec![seq![1, 2], seq![10, 20]]);

    // Act & Assert
    assert!(zipped.is_volatile());
    assert!(zipped.advance());
    let first_copy = zipped.current_copy();
    let first_again = zipped.current_copy();
    assert_eq!(zipped.current_view(), &[1, 10]);
    assert!(zipped.advance());
    assert_eq!(zipped.current_view(), &[2, 20]);
    assert_eq!(first_copy, vec![1, 10]);
    assert_eq!(first_again, first_copy);
    assert!(!zipped.advance());
    Ok(())
}

#[test]
fn test_zip_does_not_pull_sources_after_shortest() -> anyhow::Result<()> {
    // Arrange
    let short = StrictSequence::new(seq![1]);
    let long = StrictSequence::new(seq![1, 2, 3]);
    let long_advances = long.advances();

    // Act
    let collected = zip(vec![short, long]).into_vec();

    // Assert
    assert_eq!(collected, vec![vec![1, 1]]);
    assert_eq!(long_advances.get(), 1);
    Ok(())
}

#[test]
fn test_zip_longest_pads_with_fill() -> anyhow::Result<()> {
    assert_eq!(
        rows(zip_longest('-', vec![over_str("abc"), over_str("123"), over_str("xyz")])),
        vec!["a1x", "b2y", "c3z"]
    );
    assert_eq!(
        rows(zip_longest('-', vec![over_str("ab"), over_str("123"), over_str("x")])),
        vec!["a1x", "b2-", "-3-"]
    );
    assert_eq!(
        rows(zip_longest('-', vec![text("ab"), nothing()])),
        vec!["a-", "b-"]
    );
    assert!(rows(zip_longest('-', Vec::<BoxSequence<'_, char>>::new())).is_empty());
    Ok(())
}

#[test]
fn test_zip_longest_method_puts_self_first() -> anyhow::Result<()> {
    assert_eq!(
        rows(over_str("a").zip_longest('.', vec![over_str("bc")])),
        vec!["ab", ".c"]
    );
    Ok(())
}

#[test]
fn test_zip_longest_never_readvances_finished_source() -> anyhow::Result<()> {
    // Arrange
    let short = StrictSequence::new(seq![1]);
    let long = StrictSequence::new(seq![1, 2, 3]);

    // Act
    let collected = zip_longest(0, vec![short, long]).into_vec();

    // Assert
    assert_eq!(collected, vec![vec![1, 1], vec![0, 2], vec![0, 3]]);
    Ok(())
}
