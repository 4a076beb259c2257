use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_favorites;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let listed = index_favorites(book.favorite_persons());
    let message = CmdMessage::info(format!("{} favorite persons listed!", listed.len()));
    Ok(CmdResult::default()
        .with_listed_persons(listed)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;
    use crate::index::DisplayIndex;

    #[test]
    fn lists_favorites_with_f_indexes() {
        let book = BookFixture::new()
            .with_person("Alice Tan")
            .with_favorite("Bob Lee")
            .book;
        let result = run(&book).unwrap();

        assert_eq!(result.listed_persons.len(), 1);
        assert_eq!(result.listed_persons[0].index, DisplayIndex::Favorite(1));
        assert_eq!(result.feedback(), Some("1 favorite persons listed!"));
    }

    #[test]
    fn still_lists_favorites_after_clear() {
        let mut book = BookFixture::new().with_favorite("Bob Lee").book;
        book.clear();
        let result = run(&book).unwrap();
        assert_eq!(result.listed_persons[0].person.name().as_str(), "Bob Lee");
    }
}
