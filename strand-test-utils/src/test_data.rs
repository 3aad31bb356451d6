// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{animal::Animal, person::Person};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

impl TestData {
    /// Name of the person or species of the animal.
    pub fn label(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.species,
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => p.fmt(f),
            Self::Animal(a) => a.fmt(f),
        }
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice".to_string(), 25, "Lisbon".to_string()))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob".to_string(), 30, "Oslo".to_string()))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie".to_string(), 35, "Lisbon".to_string()))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane".to_string(), 40, "Oslo".to_string()))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal::new("Dog".to_string(), 4))
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal::new("Spider".to_string(), 8))
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal::new("Bird".to_string(), 2))
}

pub fn person(name: &str, age: u32, city: &str) -> Person {
    Person::new(name.to_string(), age, city.to_string())
}

/// Alice, Bob, Charlie and Diane as plain [`Person`] values, in that order.
pub fn people() -> Vec<Person> {
    vec![
        person("Alice", 25, "Lisbon"),
        person("Bob", 30, "Oslo"),
        person("Charlie", 35, "Lisbon"),
        person("Diane", 40, "Oslo"),
    ]
}
