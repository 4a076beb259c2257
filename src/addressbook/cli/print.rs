use addressbook::api::{CmdMessage, CmdResult, MessageLevel};
use addressbook::error::Result;
use addressbook::index::{DisplayIndex, DisplayPerson};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 28;
const FAVORITE_MARKER: &str = "★";

pub(crate) fn print_result(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }
    print_persons(&result.listed_persons);
    print_messages(&result.messages);
    Ok(())
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_persons(persons: &[DisplayPerson]) {
    for dp in persons {
        let (prefix, idx_str) = match dp.index {
            DisplayIndex::Favorite(n) => (format!("  {} ", FAVORITE_MARKER), format!("f{}. ", n)),
            DisplayIndex::Regular(n) => ("    ".to_string(), format!("{}. ", n)),
        };

        let name = truncate_to_width(dp.person.name().as_str(), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        let details = format!(
            "{}  {}  {}",
            dp.person.phone().as_str(),
            dp.person.email().as_str(),
            dp.person.address().as_str()
        );
        let fixed_width = prefix.width() + idx_str.width() + NAME_WIDTH + 1;
        let details = truncate_to_width(&details, LINE_WIDTH.saturating_sub(fixed_width));

        let idx_colored = match dp.index {
            DisplayIndex::Favorite(_) => idx_str.yellow(),
            DisplayIndex::Regular(_) => idx_str.normal(),
        };

        println!(
            "{}{}{}{} {}",
            prefix,
            idx_colored,
            name.bold(),
            " ".repeat(padding),
            details.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
