use crate::book::AddressBook;
use crate::commands::{persons_listed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayPerson};
use std::collections::HashSet;
use std::rc::Rc;

/// Lists every person whose name contains any of `keywords` (case-sensitive).
///
/// Matches keep the index they have in the full list, so they can be passed
/// straight to `delete`.
pub fn run(book: &AddressBook, keywords: &HashSet<String>) -> Result<CmdResult> {
    let listed: Vec<DisplayPerson> = book
        .all_persons()
        .iter()
        .enumerate()
        .filter(|(_, person)| person.name_matches_any(keywords))
        .map(|(i, person)| DisplayPerson {
            index: DisplayIndex::Regular(i + 1),
            person: Rc::clone(person),
        })
        .collect();

    let message = CmdMessage::info(persons_listed(listed.len()));
    Ok(CmdResult::default()
        .with_listed_persons(listed)
        .with_message(message))
}
