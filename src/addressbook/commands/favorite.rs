//! Finds persons whose names contain any of the keywords and adds the first
//! of them to the favorites list.
//!
//! Only the first match in list order is added, however many persons match.
//! The documented intent of this command reads as "add every match", so the
//! single-match behavior may be a defect; it is kept as-is until that is
//! settled (see DESIGN.md).

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddressBookError, Result};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::info;

pub const MESSAGE_SUCCESS: &str = "New person added: ";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the favorite list";
pub const MESSAGE_COMPLETE: &str = "Adding to favorite list completed.";

pub fn run(book: &mut AddressBook, keywords: &HashSet<String>) -> Result<CmdResult> {
    let persons = book.all_persons();
    for person in &persons {
        if !person.name_matches_any(keywords) {
            continue;
        }

        return match book.add_favorite(Rc::clone(person)) {
            Ok(()) => {
                info!(name = person.name().as_str(), "favorite added");
                Ok(CmdResult::default()
                    .with_affected_persons(vec![Rc::clone(person)])
                    .with_message(CmdMessage::success(format!(
                        "{}{}",
                        MESSAGE_SUCCESS, person
                    ))))
            }
            Err(AddressBookError::DuplicatePerson(_)) => {
                Ok(CmdResult::default().with_message(CmdMessage::warning(MESSAGE_DUPLICATE_PERSON)))
            }
            Err(e) => Err(e),
        };
    }

    Ok(CmdResult::default().with_message(CmdMessage::info(MESSAGE_COMPLETE)))
}
