// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequences over hash maps.
//!
//! Visit order is the map's own iteration order, which is unspecified.

use crate::iter::{from_iter, FromIter};
use std::collections::hash_map;
use std::collections::HashMap;
use std::iter::Map;
use strand_core::Pair;

/// Sequence of key/value pairs from [`over_map`].
pub type MapEntries<K, V> = FromIter<Map<hash_map::IntoIter<K, V>, fn((K, V)) -> Pair<K, V>>>;

/// Sequence of keys from [`over_map_keys`].
pub type MapKeys<K, V> = FromIter<hash_map::IntoKeys<K, V>>;

/// Sequence of values from [`over_map_values`].
pub type MapValues<K, V> = FromIter<hash_map::IntoValues<K, V>>;

/// Yields every entry of `map` as a [`Pair`].
pub fn over_map<K, V, S>(map: HashMap<K, V, S>) -> MapEntries<K, V>
where
    K: Clone,
    V: Clone,
{
    from_iter(map.into_iter().map(Pair::from as fn((K, V)) -> Pair<K, V>))
}

/// Yields every key of `map`.
pub fn over_map_keys<K, V, S>(map: HashMap<K, V, S>) -> MapKeys<K, V>
where
    K: Clone,
{
    from_iter(map.into_keys())
}

/// Yields every value of `map`.
pub fn over_map_values<K, V, S>(map: HashMap<K, V, S>) -> MapValues<K, V>
where
    V: Clone,
{
    from_iter(map.into_values())
}
