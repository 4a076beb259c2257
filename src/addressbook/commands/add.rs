use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddressBookError, Result};
use crate::model::Person;
use tracing::info;

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

pub fn run(book: &mut AddressBook, person: Person) -> Result<CmdResult> {
    match book.add_person(person) {
        Ok(added) => {
            info!(name = added.name().as_str(), "person added");
            let message = CmdMessage::success(format!("New person added: {}", added));
            Ok(CmdResult::default()
                .with_affected_persons(vec![added])
                .with_message(message))
        }
        Err(AddressBookError::DuplicatePerson(_)) => {
            Ok(CmdResult::default().with_message(CmdMessage::error(MESSAGE_DUPLICATE_PERSON)))
        }
        Err(e) => Err(e),
    }
}
