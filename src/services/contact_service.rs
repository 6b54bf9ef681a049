//! Contact use cases.
//!
//! Every operation takes the command's positional arguments and the directory,
//! and answers with a human-readable status. Lookup misses are reported as a
//! status, not as an error.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::{Directory, Record};
use tracing::debug;

pub const MSG_ADDED: &str = "Contact added.";
pub const MSG_UPDATED: &str = "Contact updated.";
pub const MSG_REMOVED: &str = "Contact removed.";
pub const MSG_NOT_FOUND: &str = "Contact not found.";

/// Fail with `MissingArguments` unless at least `expected` tokens were given.
fn require_args(args: &[String], expected: usize) -> CommandResult<()> {
    if args.len() < expected {
        return Err(CommandError::MissingArguments {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// A new record is stored before the phone is validated, so an invalid
/// phone still leaves the (empty) contact behind.
pub fn add_contact(args: &[String], book: &mut Directory) -> CommandResult<String> {
    require_args(args, 2)?;
    let (name, phone) = (args[0].as_str(), args[1].as_str());

    let mut message = MSG_UPDATED;
    if !book.contains(name) {
        let _ = book.add_record(Record::new(ContactName::new(name)?));
        message = MSG_ADDED;
    }

    book.require_mut(name)?.add_phone(phone)?;
    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`.
pub fn change_contact(args: &[String], book: &mut Directory) -> CommandResult<String> {
    require_args(args, 3)?;
    let (name, old_phone, new_phone) = (args[0].as_str(), args[1].as_str(), args[2].as_str());

    match book.find_mut(name) {
        Some(record) => {
            if !record.edit_phone(old_phone, new_phone)? {
                debug!("No phone {} on {}, nothing changed", old_phone, name);
            }
            Ok(MSG_UPDATED.to_string())
        }
        None => Ok("Contact not found".to_string()),
    }
}

/// `phone <name>`: the contact's phones, e.g. `Alice - 0501234567; 0671234567`.
pub fn show_phone(args: &[String], book: &Directory) -> CommandResult<String> {
    require_args(args, 1)?;

    Ok(match book.find(&args[0]) {
        Some(record) => format!("{} - {}", record.name(), record.phones_display()),
        None => MSG_NOT_FOUND.to_string(),
    })
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(args: &[String], book: &mut Directory) -> CommandResult<String> {
    require_args(args, 2)?;

    match book.find_mut(&args[0]) {
        Some(record) => {
            record.add_birthday(&args[1])?;
            Ok(MSG_UPDATED.to_string())
        }
        None => Ok(MSG_NOT_FOUND.to_string()),
    }
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[String], book: &Directory) -> CommandResult<String> {
    require_args(args, 1)?;
    let name = args[0].as_str();

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("{} - {}", name, birthday),
            None => format!("{} - date not recorded.", name),
        },
        None => MSG_NOT_FOUND.to_string(),
    })
}

/// `delete <name>`.
pub fn delete_contact(args: &[String], book: &mut Directory) -> CommandResult<String> {
    require_args(args, 1)?;

    Ok(match book.delete(&args[0]) {
        Some(_) => MSG_REMOVED.to_string(),
        None => MSG_NOT_FOUND.to_string(),
    })
}

/// `remove-phone <name> <phone>`.
///
/// Looks the contact up by direct keyed access, so an unknown name is a
/// [`CommandError::UnknownContact`].
pub fn remove_phone(args: &[String], book: &mut Directory) -> CommandResult<String> {
    require_args(args, 2)?;
    let (name, phone) = (args[0].as_str(), args[1].as_str());

    if !book.require_mut(name)?.remove_phone(phone) {
        debug!("No phone {} on {}, nothing removed", phone, name);
    }
    Ok(MSG_UPDATED.to_string())
}

/// `all`: one line per contact, in insertion order.
pub fn show_all(book: &Directory) -> String {
    book.iter()
        .map(|(_, record)| format!("{}\n", record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn book_with(name: &str, phones: &[&str]) -> Directory {
        let mut book = Directory::new();
        let mut record = Record::new(ContactName::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        let _ = book.add_record(record);
        book
    }

    #[test]
    fn test_add_then_show_phone() {
        let mut book = Directory::new();
        assert_eq!(
            add_contact(&args(&["Alice", "1234567890"]), &mut book).unwrap(),
            "Contact added."
        );
        assert_eq!(
            show_phone(&args(&["Alice"]), &book).unwrap(),
            "Alice - 1234567890"
        );
    }

    #[test]
    fn test_add_existing_updates() {
        let mut book = book_with("Alice", &["1111111111"]);
        assert_eq!(
            add_contact(&args(&["Alice", "2222222222"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            show_phone(&args(&["Alice"]), &book).unwrap(),
            "Alice - 1111111111; 2222222222"
        );
    }

    #[test]
    fn test_add_invalid_phone_keeps_new_contact() {
        let mut book = Directory::new();
        let err = add_contact(&args(&["Alice", "12345"]), &mut book).unwrap_err();
        assert_eq!(
            err,
            CommandError::Validation(ValidationError::InvalidPhone { digits: 5 })
        );
        assert!(book.find("Alice").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_ignores_extra_args() {
        let mut book = Directory::new();
        add_contact(&args(&["Alice", "1234567890", "extra"]), &mut book).unwrap();
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_missing_arguments() {
        let mut book = Directory::new();
        assert_eq!(
            add_contact(&args(&["Alice"]), &mut book),
            Err(CommandError::MissingArguments {
                expected: 2,
                got: 1
            })
        );
        assert!(book.is_empty());
        assert!(matches!(
            change_contact(&args(&["Alice", "1"]), &mut book),
            Err(CommandError::MissingArguments { .. })
        ));
        assert!(matches!(
            show_phone(&[], &book),
            Err(CommandError::MissingArguments { .. })
        ));
        assert!(matches!(
            delete_contact(&[], &mut book),
            Err(CommandError::MissingArguments { .. })
        ));
    }

    #[test]
    fn test_change_contact() {
        let mut book = book_with("Alice", &["1111111111", "2222222222"]);
        assert_eq!(
            change_contact(&args(&["Alice", "1111111111", "3333333333"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            show_phone(&args(&["Alice"]), &book).unwrap(),
            "Alice - 3333333333; 2222222222"
        );
    }

    #[test]
    fn test_change_unknown_phone_still_reports_updated() {
        let mut book = book_with("Alice", &["1111111111"]);
        assert_eq!(
            change_contact(&args(&["Alice", "9999999999", "3333333333"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            show_phone(&args(&["Alice"]), &book).unwrap(),
            "Alice - 1111111111"
        );
    }

    #[test]
    fn test_change_missing_contact() {
        let mut book = Directory::new();
        assert_eq!(
            change_contact(&args(&["Ghost", "1111111111", "2222222222"]), &mut book).unwrap(),
            "Contact not found"
        );
    }

    #[test]
    fn test_change_invalid_new_phone() {
        let mut book = book_with("Alice", &["1111111111"]);
        let err =
            change_contact(&args(&["Alice", "1111111111", "12"]), &mut book).unwrap_err();
        assert_eq!(err.user_message(), "Give me name and phone please.");
    }

    #[test]
    fn test_show_phone_missing() {
        let book = Directory::new();
        assert_eq!(
            show_phone(&args(&["Ghost"]), &book).unwrap(),
            "Contact not found."
        );
    }

    #[test]
    fn test_birthdays() {
        let mut book = book_with("Bob", &[]);
        assert_eq!(
            show_birthday(&args(&["Bob"]), &book).unwrap(),
            "Bob - date not recorded."
        );
        assert_eq!(
            add_birthday(&args(&["Bob", "15.03.1990"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            show_birthday(&args(&["Bob"]), &book).unwrap(),
            "Bob - 15.03.1990"
        );
    }

    #[test]
    fn test_birthday_for_missing_contact() {
        let mut book = Directory::new();
        assert_eq!(
            add_birthday(&args(&["Ghost", "15.03.1990"]), &mut book).unwrap(),
            "Contact not found."
        );
        assert_eq!(
            show_birthday(&args(&["Ghost"]), &book).unwrap(),
            "Contact not found."
        );
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = book_with("Bob", &[]);
        let err = add_birthday(&args(&["Bob", "31.04.2020"]), &mut book).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::InvalidDate(_))
        ));
        assert!(book.find("Bob").unwrap().birthday().is_none());
    }

    #[test]
    fn test_delete_contact() {
        let mut book = book_with("Alice", &["1111111111"]);
        assert_eq!(
            delete_contact(&args(&["Ghost"]), &mut book).unwrap(),
            "Contact not found."
        );
        assert_eq!(book.len(), 1);

        assert_eq!(
            delete_contact(&args(&["Alice"]), &mut book).unwrap(),
            "Contact removed."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_phone() {
        let mut book = book_with("Alice", &["1111111111", "2222222222"]);
        assert_eq!(
            remove_phone(&args(&["Alice", "111-111-1111"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            show_phone(&args(&["Alice"]), &book).unwrap(),
            "Alice - 2222222222"
        );

        let err = remove_phone(&args(&["Ghost", "1111111111"]), &mut book).unwrap_err();
        assert_eq!(err.user_message(), "This contact is not exist :(");
    }

    #[test]
    fn test_show_all() {
        let mut book = book_with("Alice", &["1111111111"]);
        add_contact(&args(&["Bob", "2222222222"]), &mut book).unwrap();
        add_birthday(&args(&["Bob", "01.05.1985"]), &mut book).unwrap();

        assert_eq!(
            show_all(&book),
            "Contact name: Alice, phones: 1111111111, birthday: None\n\
             Contact name: Bob, phones: 2222222222, birthday: 01.05.1985\n"
        );
        assert_eq!(show_all(&Directory::new()), "");
    }
}
