use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddressBookError, Result};
use crate::index;
use tracing::info;

pub const MESSAGE_PERSON_NOT_FOUND: &str = "Person could not be found in address book";

/// Deletes the person shown at the 1-based `target` of the person list.
pub fn run(book: &mut AddressBook, target: usize) -> Result<CmdResult> {
    let person = index::resolve(&book.all_persons(), target)
        .ok_or(AddressBookError::InvalidIndex(target))?;

    match book.remove_person(&person) {
        Ok(removed) => {
            info!(name = removed.name().as_str(), "person deleted");
            let message = CmdMessage::success(format!("Deleted Person: {}", removed));
            Ok(CmdResult::default()
                .with_affected_persons(vec![removed])
                .with_message(message))
        }
        Err(AddressBookError::PersonNotFound(_)) => {
            Ok(CmdResult::default().with_message(CmdMessage::error(MESSAGE_PERSON_NOT_FOUND)))
        }
        Err(e) => Err(e),
    }
}
