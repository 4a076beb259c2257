use crate::book::AddressBook;
use crate::commands::{persons_listed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_persons;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let listed = index_persons(&book.all_persons());
    let message = CmdMessage::info(persons_listed(listed.len()));
    Ok(CmdResult::default()
        .with_listed_persons(listed)
        .with_message(message))
}
