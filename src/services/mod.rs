//! Application service layer.
//!
//! Services hold the contact book's use cases. Each operation works on a
//! [`Directory`](crate::models::Directory) handed in by the caller, never
//! performs I/O, and returns a status string or a typed
//! [`CommandError`](crate::error::CommandError).

mod birthday_service;
mod contact_service;

pub use birthday_service::{
    congratulation_date, shift_weekend, upcoming_birthdays, NEXT_WEEK_HEADER, NO_BIRTHDAYS,
};
pub use contact_service::{
    add_birthday, add_contact, change_contact, delete_contact, remove_phone, show_all,
    show_birthday, show_phone, MSG_ADDED, MSG_NOT_FOUND, MSG_REMOVED, MSG_UPDATED,
};
