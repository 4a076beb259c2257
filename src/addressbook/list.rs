//! # Unique Person List
//!
//! An ordered, duplicate-free sequence of [`Person`] records. This is the backing
//! store of the [`AddressBook`](crate::book::AddressBook).
//!
//! Records are held as `Rc<Person>` so that other views (the favorites list) can
//! point at the very same record without owning a copy of it. Cloning a list
//! produces an independent container whose elements are the same records.
//!
//! Uniqueness is decided by `Person` value equality, never by pointer identity.

use crate::error::{AddressBookError, Result};
use crate::model::Person;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquePersonList {
    persons: Vec<Rc<Person>>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `persons`, failing on the first duplicate.
    pub fn from_persons<I>(persons: I) -> Result<Self>
    where
        I: IntoIterator<Item = Person>,
    {
        let mut list = Self::new();
        for person in persons {
            list.add(Rc::new(person))?;
        }
        Ok(list)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.as_ref() == person)
    }

    /// Appends `person` unless an equal record is already present.
    pub fn add(&mut self, person: Rc<Person>) -> Result<()> {
        if self.contains(&person) {
            return Err(AddressBookError::DuplicatePerson(
                person.name().as_str().to_string(),
            ));
        }
        debug!(name = person.name().as_str(), "person added to list");
        self.persons.push(person);
        Ok(())
    }

    /// Removes the first record equal to `person`.
    pub fn remove(&mut self, person: &Person) -> Result<Rc<Person>> {
        let position = self
            .persons
            .iter()
            .position(|p| p.as_ref() == person)
            .ok_or_else(|| AddressBookError::PersonNotFound(person.name().as_str().to_string()))?;
        debug!(name = person.name().as_str(), "person removed from list");
        Ok(self.persons.remove(position))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Person>> {
        self.persons.get(index)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Person>> {
        self.persons.iter()
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Rc<Person>;
    type IntoIter = std::slice::Iter<'a, Rc<Person>>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
