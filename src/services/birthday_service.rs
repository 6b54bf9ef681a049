//! Upcoming birthday report.
//!
//! Finds who to congratulate within the next seven days, moving weekend
//! birthdays to the following Monday.
//!
//! The window only looks at the current calendar month: a birthday on the 2nd
//! of next month is never reported, even when it is three days away. The day
//! delta is taken after the weekend shift and compares day-of-month numbers,
//! so a late-month Saturday or Sunday shifted into next month always passes.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Birthday;
use crate::models::Directory;
use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

/// Header spliced in front of the report once a second birthday is found.
pub const NEXT_WEEK_HEADER: &str = "Next week:";

/// Report text when nobody has a birthday coming up.
pub const NO_BIRTHDAYS: &str = "No birthdays next week.";

/// Largest day-of-month distance from today that is still reported (today counts as day 0).
const WINDOW_DAYS: i64 = 6;

/// Move a Saturday or Sunday forward to the next Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date + Days::new(u64::from(7 - weekday))
    } else {
        date
    }
}

/// The date to congratulate on, if this birthday belongs in the report for `today`.
pub fn congratulation_date(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    if birthday.month() != today.month() || birthday.day() < today.day() {
        return None;
    }

    let Some(this_year) = NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day())
    else {
        warn!(
            "Birthday {} does not exist in {}, skipping",
            birthday,
            today.year()
        );
        return None;
    };

    let candidate = shift_weekend(this_year);
    let delta = i64::from(candidate.day()) - i64::from(today.day());
    (delta <= WINDOW_DAYS).then_some(candidate)
}

/// Build the upcoming birthday report for `today`.
///
/// Entries follow directory order, one `"<name> - DD.MM.YYYY"` line each.
/// When a second entry is found, everything collected so far is prefixed
/// with a blank line and [`NEXT_WEEK_HEADER`].
pub fn upcoming_birthdays(book: &Directory, today: NaiveDate) -> String {
    let mut report = String::new();
    let mut count = 0usize;

    for (name, record) in book.iter() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(date) = congratulation_date(birthday, today) else {
            continue;
        };

        debug!("Congratulate {} on {}", name, date);
        if count == 1 {
            report = format!("\n{}\n{}", NEXT_WEEK_HEADER, report);
        }
        report.push_str(&format!("{} - {}\n", name, date.format(DATE_FORMAT)));
        count += 1;
    }

    if report.is_empty() {
        return NO_BIRTHDAYS.to_string();
    }
    report
}
