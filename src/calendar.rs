use chrono::NaiveDate;

use crate::errors::{LedgerError, Result};

/// build an InvalidDate error from the offending input
fn invalid(input: &str) -> LedgerError {
    LedgerError::InvalidDate {
        input: input.to_string(),
    }
}

/// parse a caller-supplied date; accepts exactly YYYYMMDD
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input));
    }
    let year: i32 = input[0..4].parse().map_err(|_| invalid(input))?;
    let month: u32 = input[4..6].parse().map_err(|_| invalid(input))?;
    let day: u32 = input[6..8].parse().map_err(|_| invalid(input))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid(input))
}

/// canonical YYYYMMDD rendering
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// days in a Gregorian month, leap-year february included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// first day of a month, inclusive range start
pub fn first_day(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| LedgerError::InvalidDate {
        input: format!("{year:04}{month:02}"),
    })
}

/// last day of a month, inclusive range end
pub fn last_day(year: i32, month: u32) -> Result<NaiveDate> {
    let first = first_day(year, month)?;
    Ok(first + chrono::Duration::days(i64::from(days_in_month(year, month)) - 1))
}

/// every day of a month in order
pub fn month_days(year: i32, month: u32) -> Result<impl Iterator<Item = NaiveDate>> {
    let first = first_day(year, month)?;
    Ok(first.iter_days().take(days_in_month(year, month) as usize))
}

/// check if year is a leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
