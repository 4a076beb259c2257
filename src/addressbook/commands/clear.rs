use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::info;

pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";

pub fn run(book: &mut AddressBook) -> Result<CmdResult> {
    book.clear();
    info!("address book cleared");
    Ok(CmdResult::default().with_message(CmdMessage::success(MESSAGE_SUCCESS)))
}
