//! Card expiration date checks
//!
//! The form splits `MM/YYYY` into month and year; both parts are checked for
//! shape here before `cc_validator` parses the date.

use cc_validator::expiry;
use chrono::{Datelike, NaiveDate};

/// Parses a 1-2 digit month in 1..=12
fn parse_month(month: &str) -> Option<u32> {
    if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    month.parse().ok().filter(|m| (1..=12).contains(m))
}

/// Parses a 4 digit year
fn parse_year(year: &str) -> Option<i32> {
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn normalized(month: &str, year: &str) -> Option<(u32, i32, String)> {
    let month = parse_month(month)?;
    let year = parse_year(year)?;
    Some((month, year, format!("{:02}/{}", month, year)))
}

/// A card stays valid through the last day of its expiration month, so the
/// date is accepted when (year, month) is not before today's (year, month).
pub fn is_expiration_date_valid_on(month: &str, year: &str, today: NaiveDate) -> bool {
    let Some((month, year, date)) = normalized(month, year) else {
        return false;
    };

    expiry::parse_expiry(&date).is_ok() && (year, month) >= (today.year(), today.month())
}

/// Same check against the local clock
pub fn is_expiration_date_valid(month: &str, year: &str) -> bool {
    normalized(month, year).map_or(false, |(_, _, date)| expiry::validate_expiry(&date).is_ok())
}
