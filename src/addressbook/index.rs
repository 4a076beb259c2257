//! # Display Indexes
//!
//! Persons are addressed by 1-based positions in the listing shown to the user,
//! not by any stored identifier. Entries of the person list get plain numbers
//! (`1`, `2`, ...) and entries of the favorites list get an `f` prefix
//! (`f1`, `f2`, ...). An index is only meaningful against the list it was
//! produced from.

use crate::list::UniquePersonList;
use crate::model::Person;
use serde::{Serialize, Serializer};
use std::rc::Rc;
use std::str::FromStr;

/// A user-facing index for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Regular(usize),
    Favorite(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Regular(i) => write!(f, "{}", i),
            DisplayIndex::Favorite(i) => write!(f, "f{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |digits: &str| match digits.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("Invalid index format: {}", s)),
        };
        match s.strip_prefix('f') {
            Some(rest) => parse(rest).map(DisplayIndex::Favorite),
            None => parse(s).map(DisplayIndex::Regular),
        }
    }
}

impl Serialize for DisplayIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayPerson {
    pub index: DisplayIndex,
    pub person: Rc<Person>,
}

pub fn index_persons<'a, I>(persons: I) -> Vec<DisplayPerson>
where
    I: IntoIterator<Item = &'a Rc<Person>>,
{
    persons
        .into_iter()
        .enumerate()
        .map(|(i, person)| DisplayPerson {
            index: DisplayIndex::Regular(i + 1),
            person: Rc::clone(person),
        })
        .collect()
}

pub fn index_favorites(favorites: &[Rc<Person>]) -> Vec<DisplayPerson> {
    favorites
        .iter()
        .enumerate()
        .map(|(i, person)| DisplayPerson {
            index: DisplayIndex::Favorite(i + 1),
            person: Rc::clone(person),
        })
        .collect()
}

/// Looks up the record behind a regular index.
pub fn resolve(list: &UniquePersonList, index: usize) -> Option<Rc<Person>> {
    index
        .checked_sub(1)
        .and_then(|i| list.get(i))
        .map(Rc::clone)
}
