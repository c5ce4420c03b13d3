//! Birthdate parsing and the values derived from it.
//!
//! Registry exports write birthdates as `dd.mm.yyyy`, older exports as
//! `dd.mm.yy`, and some tools produce ISO `yyyy-mm-dd`. Anything else is
//! treated as unknown and rendered as [`NOT_AVAILABLE`].

use chrono::{Datelike, Local, Months, NaiveDate};

use herd_model::NOT_AVAILABLE;

/// Display format for derived dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a birthdate, trying `dd.mm.yyyy`, `dd.mm.yy` and `yyyy-mm-dd` in
/// that order.
///
/// Two-digit years map 00-68 to 2000-2068 and 69-99 to 1969-1999. Empty or
/// unparsable input returns `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    try_parse_dotted(trimmed).or_else(|| try_parse_iso(trimmed))
}

/// `dd.mm.yyyy`, then `dd.mm.yy`.
///
/// The year width is checked up front because `%Y` alone would accept
/// `20` as the year 20.
fn try_parse_dotted(value: &str) -> Option<NaiveDate> {
    let (_, year) = value.rsplit_once('.')?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let format = match year.len() {
        4 => "%d.%m.%Y",
        2 => "%d.%m.%y",
        _ => return None,
    };
    NaiveDate::parse_from_str(value, format).ok()
}

fn try_parse_iso(value: &str) -> Option<NaiveDate> {
    let (year, _) = value.split_once('-')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whole months between `birth` and `today`.
///
/// A month only counts once its anniversary day has been reached. Birthdates
/// in the future count as zero months.
pub fn age_in_months(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut months = (today.year() - birth.year()) * 12 + today.month() as i32
        - birth.month() as i32;
    if today.day() < birth.day() {
        months -= 1;
    }
    u32::try_from(months).unwrap_or(0)
}

/// Renders a month count as years and months, e.g. `"2 Jahre, 1 Monat"`.
pub fn format_age(total_months: u32) -> String {
    let years = total_months / 12;
    let months = total_months % 12;
    let year_part = if years == 1 {
        "1 Jahr".to_string()
    } else {
        format!("{years} Jahre")
    };
    let month_part = if months == 1 {
        "1 Monat".to_string()
    } else {
        format!("{months} Monate")
    };

    match (years, months) {
        (0, _) => month_part,
        (_, 0) => year_part,
        _ => format!("{year_part}, {month_part}"),
    }
}

/// Age of an animal born on `birthdate` as of `today`.
pub fn age_display_at(birthdate: &str, today: NaiveDate) -> String {
    match parse_date(birthdate) {
        Some(birth) => format_age(age_in_months(birth, today)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Age of an animal born on `birthdate` as of the local calendar date.
pub fn age_display(birthdate: &str) -> String {
    age_display_at(birthdate, Local::now().date_naive())
}

/// Adds calendar months, clamping to the last day of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Projected slaughter date: `birthdate` plus `months`, as `dd.mm.yyyy`.
pub fn slaughter_date_display(birthdate: &str, months: u32) -> String {
    parse_date(birthdate)
        .and_then(|birth| add_months(birth, months))
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
