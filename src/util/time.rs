//! Local clock helpers.
//!
//! Orders and journey entries are stamped with the browser's local time, matching what the user
//! sees on their own clock.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Year used for DO numbering.
pub fn current_year() -> i32 {
    Local::now().year()
}
