//! Command parsing and dispatch for the assistant.
//!
//! This is the boundary where typed [`CommandError`]s become the fixed
//! user-facing messages.

use crate::error::CommandResult;
use crate::models::Directory;
use crate::services::{
    add_birthday, add_contact, change_contact, delete_contact, remove_phone, show_all,
    show_birthday, show_phone, upcoming_birthdays,
};
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::debug;

pub const MSG_GREETING: &str = "Welcome to the assistant bot!";
pub const MSG_HELLO: &str = "How can I help you?";
pub const MSG_GOODBYE: &str = "Good bye!";
pub const MSG_INVALID_COMMAND: &str = "Invalid command.";

/// A command word the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Whether the command can change the directory.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Command::Add
                | Command::Change
                | Command::AddBirthday
                | Command::Delete
                | Command::RemovePhone
        )
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "remove-phone" => Ok(Command::RemovePhone),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// Split a line into a lower-cased command word and its arguments.
///
/// Arguments are passed through unmodified. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Turn a use-case result into the text shown to the user.
pub fn respond(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|e| {
        debug!("Command failed: {}", e);
        e.user_message().to_string()
    })
}

/// Run one command against the directory and return the reply.
///
/// `today` is the date the birthday report is computed for.
pub fn dispatch(command: Command, args: &[String], book: &mut Directory, today: NaiveDate) -> String {
    match command {
        Command::Hello => MSG_HELLO.to_string(),
        Command::Add => respond(add_contact(args, book)),
        Command::Change => respond(change_contact(args, book)),
        Command::Phone => respond(show_phone(args, book)),
        Command::All => show_all(book),
        Command::AddBirthday => respond(add_birthday(args, book)),
        Command::ShowBirthday => respond(show_birthday(args, book)),
        Command::Birthdays => upcoming_birthdays(book, today),
        Command::Delete => respond(delete_contact(args, book)),
        Command::RemovePhone => respond(remove_phone(args, book)),
        Command::Exit => MSG_GOODBYE.to_string(),
    }
}
