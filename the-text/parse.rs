//! Conversions from text to booleans, numbers and dates.
//!
//! Number parsing honours the separators of an explicit [`Locale`]; nothing
//! here consults the process environment.

use chrono::{
  NaiveDate,
  NaiveDateTime,
};
use the_stdx::Locale;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `"true"`/`"1"` and `"false"`/`"0"`, case-insensitive, surrounding
/// whitespace ignored.
pub fn to_bool(text: &str) -> Option<bool> {
  match text.trim().to_lowercase().as_str() {
    "true" | "1" => Some(true),
    "false" | "0" => Some(false),
    _ => None,
  }
}

pub fn to_int(text: &str) -> Option<i64> {
  text.parse().ok()
}

/// Parses a decimal number written with `locale`'s separators.
///
/// ```
/// use the_text::{
///   Locale,
///   parse::to_double,
/// };
///
/// assert_eq!(to_double("1,234.5", &Locale::from_identifier("en_US").unwrap()), Some(1234.5));
/// assert_eq!(to_double("1.3", &Locale::from_identifier("fr_FR").unwrap()), None);
/// ```
pub fn to_double(text: &str, locale: &Locale) -> Option<f64> {
  normalize_number(text, locale)?.parse().ok()
}

pub fn to_float(text: &str, locale: &Locale) -> Option<f32> {
  normalize_number(text, locale)?.parse().ok()
}

pub fn is_numeric(text: &str, locale: &Locale) -> bool {
  to_double(text, locale).is_some()
}

/// Rewrites `text` into the form `f64::from_str` accepts: grouping separators
/// are dropped and the decimal separator becomes `.`.
///
/// A grouping separator must sit between two digits of the integer part.
fn normalize_number(text: &str, locale: &Locale) -> Option<String> {
  let text = text.trim();
  if text.is_empty() {
    return None;
  }

  let mut normalized = String::with_capacity(text.len());
  let mut in_integer_part = true;
  let mut pending_group = false;
  for ch in text.chars() {
    match ch {
      c if c == locale.decimal_separator() => {
        in_integer_part = false;
        normalized.push('.');
      },
      c if locale.is_grouping_separator(c) => {
        if !in_integer_part || pending_group || !normalized.ends_with(|c: char| c.is_ascii_digit())
        {
          return None;
        }
        pending_group = true;
        continue;
      },
      c @ '0'..='9' => normalized.push(c),
      c @ ('e' | 'E') => {
        in_integer_part = false;
        normalized.push(c);
      },
      c @ ('+' | '-') => normalized.push(c),
      _ => return None,
    }
    if pending_group && !ch.is_ascii_digit() {
      return None;
    }
    pending_group = false;
  }
  (!pending_group).then_some(normalized)
}

/// A `YYYY-MM-DD` date.
pub fn to_date(text: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// A `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn to_date_time(text: &str) -> Option<NaiveDateTime> {
  NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT).ok()
}

/// Parses `text` with a `strftime` style `format`. Formats without a time of
/// day resolve to midnight.
///
/// ```
/// use the_text::parse::to_date_with_format;
///
/// let date = to_date_with_format("07/03/2024", "%d/%m/%Y").unwrap();
/// assert_eq!(date.to_string(), "2024-03-07 00:00:00");
/// ```
pub fn to_date_with_format(text: &str, format: &str) -> Option<NaiveDateTime> {
  NaiveDateTime::parse_from_str(text, format).ok().or_else(|| {
    NaiveDate::parse_from_str(text, format)
      .ok()
      .and_then(|date| date.and_hms_opt(0, 0, 0))
  })
}
