//! Predicates and statistics over text.

use std::collections::{
  HashMap,
  HashSet,
};

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::chars::{
  char_is_emoji,
  char_is_punctuation_mark,
};

#[inline]
fn char_is_decimal_digit(ch: char) -> bool {
  get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// The most frequent grapheme, ignoring whitespace.
///
/// Counting happens in a single left-to-right pass; on a tie the grapheme that
/// reached the winning count first is returned.
///
/// ```
/// use the_text::query::most_common_character;
///
/// assert_eq!(most_common_character("aabbbc"), Some("b"));
/// assert_eq!(most_common_character("abba"), Some("b"));
/// ```
pub fn most_common_character(text: &str) -> Option<&str> {
  let mut counts: HashMap<&str, usize> = HashMap::new();
  let mut best: Option<(&str, usize)> = None;

  for g in text.graphemes(true).filter(|g| !is_blank(g)) {
    let count = counts.entry(g).or_default();
    *count += 1;
    if best.is_none_or(|(_, best_count)| *count > best_count) {
      best = Some((g, *count));
    }
  }

  best.map(|(g, _)| g)
}

pub fn has_letters(text: &str) -> bool {
  text.chars().any(char::is_alphabetic)
}

pub fn has_numbers(text: &str) -> bool {
  text.chars().any(char_is_decimal_digit)
}

/// Contains letters and no digits. `"abc"` is alphabetic, `"123abc"` is not.
pub fn is_alphabetic(text: &str) -> bool {
  has_letters(text) && !has_numbers(text)
}

/// Only letters and digits, with at least one of each: `"123abc"`.
pub fn is_alphanumeric(text: &str) -> bool {
  text.chars().all(char::is_alphanumeric) && has_letters(text) && has_numbers(text)
}

/// Non-empty and made of decimal digits only. `"1.3"` is not.
pub fn is_digits(text: &str) -> bool {
  !text.is_empty() && text.chars().all(char_is_decimal_digit)
}

/// Empty or whitespace (including line endings) only.
pub fn is_blank(text: &str) -> bool {
  text.chars().all(char::is_whitespace)
}

pub fn contains_emoji(text: &str) -> bool {
  text.chars().any(char_is_emoji)
}

/// Whether no grapheme occurs twice. Empty text has no unique characters.
pub fn has_unique_characters(text: &str) -> bool {
  if text.is_empty() {
    return false;
  }
  let mut seen = HashSet::new();
  text.graphemes(true).all(|g| seen.insert(g))
}

/// Substring search with optional case folding. An empty needle is never
/// found.
///
/// ```
/// use the_text::query::contains;
///
/// assert!(!contains("Hello World!", "O", true));
/// assert!(contains("Hello World!", "o", false));
/// ```
pub fn contains(text: &str, needle: &str, case_sensitive: bool) -> bool {
  if needle.is_empty() {
    return false;
  }
  if case_sensitive {
    text.contains(needle)
  } else {
    text.to_lowercase().contains(&needle.to_lowercase())
  }
}

/// Number of non-overlapping occurrences of `needle`; zero for an empty
/// needle.
pub fn count_of(text: &str, needle: &str, case_sensitive: bool) -> usize {
  if needle.is_empty() {
    return 0;
  }
  if case_sensitive {
    text.matches(needle).count()
  } else {
    text.to_lowercase().matches(&needle.to_lowercase()).count()
  }
}

pub fn starts_with(text: &str, prefix: &str, case_sensitive: bool) -> bool {
  if case_sensitive {
    text.starts_with(prefix)
  } else {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
  }
}

pub fn ends_with(text: &str, suffix: &str, case_sensitive: bool) -> bool {
  if case_sensitive {
    text.ends_with(suffix)
  } else {
    text.to_lowercase().ends_with(&suffix.to_lowercase())
  }
}

/// Words separated by whitespace or punctuation.
///
/// ```
/// use the_text::query::words;
///
/// assert_eq!(words("Swift is amazing"), ["Swift", "is", "amazing"]);
/// ```
pub fn words(text: &str) -> Vec<&str> {
  text
    .split(|c: char| c.is_whitespace() || char_is_punctuation_mark(c))
    .filter(|word| !word.is_empty())
    .collect()
}

pub fn word_count(text: &str) -> usize {
  words(text).len()
}

/// Unicode scalar values of `text`.
pub fn unicode_scalars(text: &str) -> Vec<u32> {
  text.chars().map(u32::from).collect()
}

pub fn without_spaces_and_newlines(text: &str) -> String {
  text.chars().filter(|&c| c != ' ' && c != '\n').collect()
}

/// `text` without leading and trailing whitespace and line endings.
pub fn trimmed(text: &str) -> &str {
  text.trim()
}

pub fn trim(text: &mut String) {
  let end = text.trim_end().len();
  text.truncate(end);
  let start = text.len() - text.trim_start().len();
  text.drain(..start);
}
