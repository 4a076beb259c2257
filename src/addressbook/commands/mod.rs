//! # Command Layer
//!
//! Each command lives in its own submodule as a plain function taking the
//! [`AddressBook`](crate::book::AddressBook) and the command's parameters:
//!
//! ```text
//! run(&mut AddressBook, params...) -> Result<CmdResult>
//! ```
//!
//! A command runs once against the book it is given and returns. There is no
//! command object to construct, bind and execute in separate steps.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_persons`: records that were added or removed
//! - `listed_persons`: records to display, paired with their [`DisplayIndex`](crate::index::DisplayIndex)
//! - `messages`: result messages with a level; the UI prints `content` verbatim
//!
//! ## Errors vs. Messages
//!
//! Expected outcomes of a command (a duplicate on `add`, a duplicate favorite)
//! are reported as messages. Anything the caller got wrong, such as an index
//! outside the list, comes back as an [`AddressBookError`](crate::error::AddressBookError).
//!
//! ## Command Modules
//!
//! - [`add`]: Add a person
//! - [`delete`]: Remove a person by index
//! - [`list`]: List all persons
//! - [`find`]: List persons whose names contain any keyword
//! - [`favorite`]: Add the first person matching any keyword to the favorites
//! - [`favorites`]: List the favorites
//! - [`clear`]: Remove all persons
//! - [`help`]: Usage of every command

use crate::index::DisplayPerson;
use crate::model::Person;
use serde::Serialize;
use std::rc::Rc;

pub mod add;
pub mod clear;
pub mod delete;
pub mod favorite;
pub mod favorites;
pub mod find;
pub mod help;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_persons: Vec<Rc<Person>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_persons: Vec<DisplayPerson>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_persons(mut self, persons: Vec<Rc<Person>>) -> Self {
        self.affected_persons = persons;
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<DisplayPerson>) -> Self {
        self.listed_persons = persons;
        self
    }

    /// Text of the first message, the line a presentation layer shows first.
    pub fn feedback(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

/// Message shared by the listing commands.
pub(crate) fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}
