//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UIs.
//!
//! The facade:
//! - **Dispatches** to the command function of each operation
//! - **Normalizes inputs** (raw strings into validated [`Person`] fields,
//!   keyword lists into sets, display indexes into positions)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business rules stay in `commands/*.rs` and are tested there. Tests here only
//! check that the right command gets the right arguments.

use crate::book::AddressBook;
use crate::commands;
use crate::config::AddressBookConfig;
use crate::error::{AddressBookError, Result};
use crate::index::DisplayIndex;
use crate::model::{Address, Email, Name, Person, Phone};
use std::collections::HashSet;
use std::str::FromStr;

/// The main API facade for address book operations.
#[derive(Debug, Default)]
pub struct AddressBookApi {
    book: AddressBook,
}

impl AddressBookApi {
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    /// An empty address book following the favorites policy of `config`.
    pub fn from_config(config: &AddressBookConfig) -> Self {
        Self::new(AddressBook::new().with_policy(config.favorite_policy()))
    }

    pub fn add_person(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<commands::CmdResult> {
        let person = Person::new(
            Name::new(name)?,
            Phone::new(phone)?,
            Email::new(email)?,
            Address::new(address)?,
        );
        commands::add::run(&mut self.book, person)
    }

    pub fn delete_person(&mut self, index: &str) -> Result<commands::CmdResult> {
        match DisplayIndex::from_str(index).map_err(AddressBookError::Api)? {
            DisplayIndex::Regular(n) => commands::delete::run(&mut self.book, n),
            DisplayIndex::Favorite(_) => Err(AddressBookError::Api(format!(
                "Favorites cannot be deleted by index: {}",
                index
            ))),
        }
    }

    pub fn list_persons(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn find_persons<I: AsRef<str>>(&self, keywords: &[I]) -> Result<commands::CmdResult> {
        let keywords = keyword_set(keywords)?;
        commands::find::run(&self.book, &keywords)
    }

    pub fn favorite<I: AsRef<str>>(&mut self, keywords: &[I]) -> Result<commands::CmdResult> {
        let keywords = keyword_set(keywords)?;
        commands::favorite::run(&mut self.book, &keywords)
    }

    pub fn list_favorites(&self) -> Result<commands::CmdResult> {
        commands::favorites::run(&self.book)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.book)
    }

    pub fn help(&self) -> Result<commands::CmdResult> {
        commands::help::run()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

fn keyword_set<I: AsRef<str>>(inputs: &[I]) -> Result<HashSet<String>> {
    let keywords: HashSet<String> = inputs
        .iter()
        .flat_map(|s| s.as_ref().split_whitespace())
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        return Err(AddressBookError::Api(
            "At least one keyword is required".to_string(),
        ));
    }
    Ok(keywords)
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
