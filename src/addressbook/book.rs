//! # Address Book
//!
//! The aggregate every command operates on. It owns two containers:
//!
//! - `all_persons`: the canonical [`UniquePersonList`].
//! - `favorite_persons`: an ordered list of handles to records of that list.
//!
//! The two are not linked. Removing a person from the book does not touch the
//! favorites unless [`FavoritePolicy::prune_favorites_on_remove`] is set, so by
//! default a favorite can outlive the record it was taken from. Likewise the
//! favorites list accepts repeats unless
//! [`FavoritePolicy::reject_duplicate_favorites`] is set.
//!
//! Two books are equal when their `all_persons` are equal; favorites are not
//! compared.

use crate::error::{AddressBookError, Result};
use crate::list::UniquePersonList;
use crate::model::Person;
use std::rc::Rc;
use tracing::debug;

/// How the favorites list reacts to changes of the person list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoritePolicy {
    /// Drop equal favorites when a person is removed or the book is cleared.
    pub prune_favorites_on_remove: bool,
    /// Refuse to favorite a person that is already a favorite.
    pub reject_duplicate_favorites: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    all_persons: UniquePersonList,
    favorite_persons: Vec<Rc<Person>>,
    policy: FavoritePolicy,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book seeded with a copy of `persons`.
    ///
    /// Later changes to `persons` do not affect the book.
    pub fn from_persons(persons: &UniquePersonList) -> Self {
        Self {
            all_persons: persons.clone(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: FavoritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FavoritePolicy {
        self.policy
    }

    pub fn add_person(&mut self, person: Person) -> Result<Rc<Person>> {
        let person = Rc::new(person);
        self.all_persons.add(Rc::clone(&person))?;
        Ok(person)
    }

    pub fn add_favorite(&mut self, person: Rc<Person>) -> Result<()> {
        if self.policy.reject_duplicate_favorites
            && self.favorite_persons.iter().any(|f| f == &person)
        {
            return Err(AddressBookError::DuplicatePerson(
                person.name().as_str().to_string(),
            ));
        }
        debug!(name = person.name().as_str(), "person added to favorites");
        self.favorite_persons.push(person);
        Ok(())
    }

    pub fn contains_person(&self, person: &Person) -> bool {
        self.all_persons.contains(person)
    }

    pub fn remove_person(&mut self, person: &Person) -> Result<Rc<Person>> {
        let removed = self.all_persons.remove(person)?;
        if self.policy.prune_favorites_on_remove {
            self.favorite_persons.retain(|f| f.as_ref() != person);
        }
        Ok(removed)
    }

    /// Empties the person list. Favorites are kept unless the policy prunes them.
    pub fn clear(&mut self) {
        self.all_persons.clear();
        if self.policy.prune_favorites_on_remove {
            self.favorite_persons.clear();
        }
        debug!(
            favorites = self.favorite_persons.len(),
            "address book cleared"
        );
    }

    /// A copy of the person list as it is now.
    pub fn all_persons(&self) -> UniquePersonList {
        self.all_persons.clone()
    }

    pub fn favorite_persons(&self) -> &[Rc<Person>] {
        &self.favorite_persons
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.all_persons == other.all_persons
    }
}

impl Eq for AddressBook {}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::fixtures::person;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_policy(mut self, policy: FavoritePolicy) -> Self {
            self.book = self.book.with_policy(policy);
            self
        }

        pub fn with_person(mut self, name: &str) -> Self {
            self.book.add_person(person(name)).unwrap();
            self
        }

        pub fn with_favorite(mut self, name: &str) -> Self {
            let record = self.book.add_person(person(name)).unwrap();
            self.book.add_favorite(record).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::BookFixture;
    use super::*;
    use crate::model::fixtures::person;

    #[test]
    fn add_person_propagates_duplicate() {
        let mut book = BookFixture::new().with_person("Alice Tan").book;
        let err = book.add_person(person("Alice Tan")).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));
        assert_eq!(book.all_persons().len(), 1);
    }

    #[test]
    fn remove_person_propagates_not_found() {
        let mut book = BookFixture::new().with_person("Alice Tan").book;
        let err = book.remove_person(&person("Bob Lee")).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound(_)));
        assert!(book.contains_person(&person("Alice Tan")));
    }

    #[test]
    fn seeding_copies_the_source_list() {
        let mut source = UniquePersonList::from_persons(vec![person("Alice Tan")]).unwrap();
        let book = AddressBook::from_persons(&source);

        source.add(Rc::new(person("Bob Lee"))).unwrap();
        source.remove(&person("Alice Tan")).unwrap();

        assert!(book.contains_person(&person("Alice Tan")));
        assert!(!book.contains_person(&person("Bob Lee")));
    }

    #[test]
    fn all_persons_is_a_detached_copy() {
        let book = BookFixture::new().with_person("Alice Tan").book;
        let mut copy = book.all_persons();
        copy.clear();
        assert_eq!(book.all_persons().len(), 1);
    }

    #[test]
    fn equality_ignores_favorites() {
        let plain = BookFixture::new().with_person("Alice Tan").book;
        let with_favorite = BookFixture::new().with_favorite("Alice Tan").book;
        assert_eq!(with_favorite.favorite_persons().len(), 1);
        assert_eq!(plain, with_favorite);
    }

    #[test]
    fn favorites_accept_repeats_by_default() {
        let mut book = BookFixture::new().with_favorite("Alice Tan").book;
        let record = Rc::clone(&book.favorite_persons()[0]);
        book.add_favorite(record).unwrap();
        assert_eq!(book.favorite_persons().len(), 2);
    }

    #[test]
    fn favorites_reject_repeats_when_configured() {
        let policy = FavoritePolicy {
            reject_duplicate_favorites: true,
            ..FavoritePolicy::default()
        };
        let mut book = BookFixture::new()
            .with_policy(policy)
            .with_favorite("Alice Tan")
            .book;
        let record = Rc::clone(&book.favorite_persons()[0]);
        let err = book.add_favorite(record).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));
        assert_eq!(book.favorite_persons().len(), 1);
    }

    #[test]
    fn clear_keeps_favorites_by_default() {
        let mut book = BookFixture::new().with_favorite("Alice Tan").book;
        book.clear();

        assert!(book.all_persons().is_empty());
        assert!(!book.contains_person(&person("Alice Tan")));
        assert_eq!(book.favorite_persons().len(), 1);
    }

    #[test]
    fn removal_keeps_favorites_by_default() {
        let mut book = BookFixture::new().with_favorite("Alice Tan").book;
        book.remove_person(&person("Alice Tan")).unwrap();
        assert_eq!(book.favorite_persons().len(), 1);
    }

    #[test]
    fn pruning_policy_drops_favorites_on_remove_and_clear() {
        let policy = FavoritePolicy {
            prune_favorites_on_remove: true,
            ..FavoritePolicy::default()
        };
        let mut book = BookFixture::new()
            .with_policy(policy)
            .with_favorite("Alice Tan")
            .with_favorite("Bob Lee")
            .book;

        book.remove_person(&person("Alice Tan")).unwrap();
        let names: Vec<_> = book
            .favorite_persons()
            .iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, vec!["Bob Lee"]);

        book.clear();
        assert!(book.favorite_persons().is_empty());
    }
}
