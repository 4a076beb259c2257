use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Usage lines, one per command, in the order they are shown.
pub const USAGES: &[&str] = &[
    "add NAME... --phone PHONE --email EMAIL --address ADDRESS...\n  Adds a person to the address book.",
    "delete INDEX\n  Deletes the person at INDEX of the person list.",
    "list\n  Lists all persons with their index.",
    "find KEYWORD [MORE_KEYWORDS]...\n  Lists all persons whose names contain any of the keywords (case-sensitive).",
    "favorite KEYWORD [MORE_KEYWORDS]...\n  Adds the first person whose name contains any of the keywords (case-sensitive) to the favorites.",
    "favorites\n  Lists the favorite persons.",
    "clear\n  Removes all persons from the address book.",
    "help\n  Shows this usage text.",
    "exit\n  Ends the session.",
];

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for usage in USAGES {
        result.add_message(CmdMessage::info(*usage));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let result = run().unwrap();
        assert_eq!(result.messages.len(), USAGES.len());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.starts_with("favorite KEYWORD")));
    }
}
