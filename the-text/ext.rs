//! Method syntax for the free functions of this crate.
//!
//! Methods whose natural name is already taken by an inherent `str` or
//! `String` method carry a distinguishing suffix (`contains_case`,
//! `truncate_graphemes`, ...), since inherent methods always win.

use std::{
  borrow::Cow,
  ops::{
    Range,
    RangeInclusive,
  },
};

use chrono::{
  NaiveDate,
  NaiveDateTime,
};
use the_stdx::Locale;
use url::Url;

use crate::{
  case_convention,
  codec,
  grapheme,
  line_ending,
  parse,
  path,
  query,
  slice,
  validate,
};

pub trait TextExt {
  fn camel_cased(&self) -> String;
  fn pascal_cased(&self) -> String;
  fn snake_cased(&self) -> String;
  fn kebab_cased(&self) -> String;
  fn slug(&self) -> String;
  fn latinized(&self) -> String;
  fn capitalized_first(&self) -> String;

  fn grapheme_count(&self) -> usize;
  fn characters(&self) -> Vec<&str>;
  fn grapheme_at(&self, index: usize) -> Option<&str>;
  fn grapheme_range(&self, range: Range<usize>) -> Option<&str>;
  fn grapheme_range_inclusive(&self, range: RangeInclusive<usize>) -> Option<&str>;
  fn first_character(&self) -> Option<&str>;
  fn last_character(&self) -> Option<&str>;
  fn reversed(&self) -> String;

  fn truncated(&self, length: usize, trailing: Option<&str>) -> Cow<'_, str>;
  fn slicing(&self, from: usize, length: usize) -> Option<&str>;
  fn padding_start(&self, length: usize, pad: &str) -> Cow<'_, str>;
  fn padding_end(&self, length: usize, pad: &str) -> Cow<'_, str>;
  fn repeated(&self, count: usize) -> String;
  fn removing_prefix(&self, prefix: &str) -> &str;
  fn removing_suffix(&self, suffix: &str) -> &str;
  fn split_lines(&self) -> Vec<&str>;

  fn most_common_character(&self) -> Option<&str>;
  fn has_letters(&self) -> bool;
  fn has_numbers(&self) -> bool;
  fn is_alphabetic(&self) -> bool;
  fn is_alphanumeric(&self) -> bool;
  fn is_digits(&self) -> bool;
  fn is_blank(&self) -> bool;
  fn contains_emoji(&self) -> bool;
  fn has_unique_characters(&self) -> bool;
  fn contains_case(&self, needle: &str, case_sensitive: bool) -> bool;
  fn count_of(&self, needle: &str, case_sensitive: bool) -> usize;
  fn starts_with_case(&self, prefix: &str, case_sensitive: bool) -> bool;
  fn ends_with_case(&self, suffix: &str, case_sensitive: bool) -> bool;
  fn words(&self) -> Vec<&str>;
  fn word_count(&self) -> usize;
  fn unicode_scalars(&self) -> Vec<u32>;
  fn without_spaces_and_newlines(&self) -> String;

  fn is_valid_email(&self) -> bool;
  fn is_valid_url(&self) -> bool;
  fn is_valid_schemed_url(&self) -> bool;
  fn is_valid_http_url(&self) -> bool;
  fn is_valid_https_url(&self) -> bool;
  fn is_valid_file_url(&self) -> bool;
  fn to_url(&self) -> Option<Url>;
  fn matches_pattern(&self, pattern: &str) -> bool;

  fn base64_encoded(&self) -> String;
  fn base64_decoded(&self) -> Option<String>;
  fn url_encoded(&self) -> Cow<'_, str>;
  fn url_decoded(&self) -> Cow<'_, str>;

  fn to_bool(&self) -> Option<bool>;
  fn to_int(&self) -> Option<i64>;
  fn to_double(&self, locale: &Locale) -> Option<f64>;
  fn to_float(&self, locale: &Locale) -> Option<f32>;
  fn is_numeric(&self, locale: &Locale) -> bool;
  fn to_date(&self) -> Option<NaiveDate>;
  fn to_date_time(&self) -> Option<NaiveDateTime>;
  fn to_date_with_format(&self, format: &str) -> Option<NaiveDateTime>;

  fn last_path_component(&self) -> &str;
  fn path_extension(&self) -> &str;
  fn deleting_last_path_component(&self) -> &str;
  fn deleting_path_extension(&self) -> &str;
  fn path_components(&self) -> Vec<&str>;
  fn appending_path_component(&self, component: &str) -> String;
  fn appending_path_extension(&self, extension: &str) -> Option<String>;
}

impl TextExt for str {
  fn camel_cased(&self) -> String {
    case_convention::to_camel_case(self)
  }

  fn pascal_cased(&self) -> String {
    case_convention::to_pascal_case(self)
  }

  fn snake_cased(&self) -> String {
    case_convention::to_snake_case(self)
  }

  fn kebab_cased(&self) -> String {
    case_convention::to_kebab_case(self)
  }

  fn slug(&self) -> String {
    case_convention::to_slug(self)
  }

  fn latinized(&self) -> String {
    case_convention::latinize(self)
  }

  fn capitalized_first(&self) -> String {
    case_convention::capitalize_first(self)
  }

  fn grapheme_count(&self) -> usize {
    grapheme::grapheme_count(self)
  }

  fn characters(&self) -> Vec<&str> {
    grapheme::graphemes(self)
  }

  fn grapheme_at(&self, index: usize) -> Option<&str> {
    grapheme::grapheme_at(self, index)
  }

  fn grapheme_range(&self, range: Range<usize>) -> Option<&str> {
    grapheme::grapheme_range(self, range)
  }

  fn grapheme_range_inclusive(&self, range: RangeInclusive<usize>) -> Option<&str> {
    grapheme::grapheme_range_inclusive(self, range)
  }

  fn first_character(&self) -> Option<&str> {
    grapheme::first_grapheme(self)
  }

  fn last_character(&self) -> Option<&str> {
    grapheme::last_grapheme(self)
  }

  fn reversed(&self) -> String {
    grapheme::reversed(self)
  }

  fn truncated(&self, length: usize, trailing: Option<&str>) -> Cow<'_, str> {
    slice::truncated(self, length, trailing)
  }

  fn slicing(&self, from: usize, length: usize) -> Option<&str> {
    slice::slicing(self, from, length)
  }

  fn padding_start(&self, length: usize, pad: &str) -> Cow<'_, str> {
    slice::padding_start(self, length, pad)
  }

  fn padding_end(&self, length: usize, pad: &str) -> Cow<'_, str> {
    slice::padding_end(self, length, pad)
  }

  fn repeated(&self, count: usize) -> String {
    slice::repeat(self, count)
  }

  fn removing_prefix(&self, prefix: &str) -> &str {
    slice::removing_prefix(self, prefix)
  }

  fn removing_suffix(&self, suffix: &str) -> &str {
    slice::removing_suffix(self, suffix)
  }

  fn split_lines(&self) -> Vec<&str> {
    line_ending::lines(self)
  }

  fn most_common_character(&self) -> Option<&str> {
    query::most_common_character(self)
  }

  fn has_letters(&self) -> bool {
    query::has_letters(self)
  }

  fn has_numbers(&self) -> bool {
    query::has_numbers(self)
  }

  fn is_alphabetic(&self) -> bool {
    query::is_alphabetic(self)
  }

  fn is_alphanumeric(&self) -> bool {
    query::is_alphanumeric(self)
  }

  fn is_digits(&self) -> bool {
    query::is_digits(self)
  }

  fn is_blank(&self) -> bool {
    query::is_blank(self)
  }

  fn contains_emoji(&self) -> bool {
    query::contains_emoji(self)
  }

  fn has_unique_characters(&self) -> bool {
    query::has_unique_characters(self)
  }

  fn contains_case(&self, needle: &str, case_sensitive: bool) -> bool {
    query::contains(self, needle, case_sensitive)
  }

  fn count_of(&self, needle: &str, case_sensitive: bool) -> usize {
    query::count_of(self, needle, case_sensitive)
  }

  fn starts_with_case(&self, prefix: &str, case_sensitive: bool) -> bool {
    query::starts_with(self, prefix, case_sensitive)
  }

  fn ends_with_case(&self, suffix: &str, case_sensitive: bool) -> bool {
    query::ends_with(self, suffix, case_sensitive)
  }

  fn words(&self) -> Vec<&str> {
    query::words(self)
  }

  fn word_count(&self) -> usize {
    query::word_count(self)
  }

  fn unicode_scalars(&self) -> Vec<u32> {
    query::unicode_scalars(self)
  }

  fn without_spaces_and_newlines(&self) -> String {
    query::without_spaces_and_newlines(self)
  }

  fn is_valid_email(&self) -> bool {
    validate::is_valid_email(self)
  }

  fn is_valid_url(&self) -> bool {
    validate::is_valid_url(self)
  }

  fn is_valid_schemed_url(&self) -> bool {
    validate::is_valid_schemed_url(self)
  }

  fn is_valid_http_url(&self) -> bool {
    validate::is_valid_http_url(self)
  }

  fn is_valid_https_url(&self) -> bool {
    validate::is_valid_https_url(self)
  }

  fn is_valid_file_url(&self) -> bool {
    validate::is_valid_file_url(self)
  }

  fn to_url(&self) -> Option<Url> {
    validate::to_url(self)
  }

  fn matches_pattern(&self, pattern: &str) -> bool {
    validate::matches(self, pattern)
  }

  fn base64_encoded(&self) -> String {
    codec::base64_encode(self)
  }

  fn base64_decoded(&self) -> Option<String> {
    codec::base64_decode(self)
  }

  fn url_encoded(&self) -> Cow<'_, str> {
    codec::url_encode(self)
  }

  fn url_decoded(&self) -> Cow<'_, str> {
    codec::url_decode(self)
  }

  fn to_bool(&self) -> Option<bool> {
    parse::to_bool(self)
  }

  fn to_int(&self) -> Option<i64> {
    parse::to_int(self)
  }

  fn to_double(&self, locale: &Locale) -> Option<f64> {
    parse::to_double(self, locale)
  }

  fn to_float(&self, locale: &Locale) -> Option<f32> {
    parse::to_float(self, locale)
  }

  fn is_numeric(&self, locale: &Locale) -> bool {
    parse::is_numeric(self, locale)
  }

  fn to_date(&self) -> Option<NaiveDate> {
    parse::to_date(self)
  }

  fn to_date_time(&self) -> Option<NaiveDateTime> {
    parse::to_date_time(self)
  }

  fn to_date_with_format(&self, format: &str) -> Option<NaiveDateTime> {
    parse::to_date_with_format(self, format)
  }

  fn last_path_component(&self) -> &str {
    path::last_path_component(self)
  }

  fn path_extension(&self) -> &str {
    path::path_extension(self)
  }

  fn deleting_last_path_component(&self) -> &str {
    path::deleting_last_path_component(self)
  }

  fn deleting_path_extension(&self) -> &str {
    path::deleting_path_extension(self)
  }

  fn path_components(&self) -> Vec<&str> {
    path::path_components(self)
  }

  fn appending_path_component(&self, component: &str) -> String {
    path::appending_path_component(self, component)
  }

  fn appending_path_extension(&self, extension: &str) -> Option<String> {
    path::appending_path_extension(self, extension)
  }
}

/// In-place counterparts of [`TextExt`]. Each returns `&mut Self` so calls
/// can be chained; a call whose precondition fails leaves the string as is.
pub trait TextMutExt {
  fn camelize(&mut self) -> &mut Self;
  fn latinize(&mut self) -> &mut Self;
  fn truncate_graphemes(&mut self, length: usize, trailing: Option<&str>) -> &mut Self;
  fn slice_graphemes(&mut self, from: usize, length: usize) -> &mut Self;
  fn slice_grapheme_range(&mut self, start: usize, end: usize) -> &mut Self;
  fn slice_from(&mut self, from: usize) -> &mut Self;
  fn pad_start(&mut self, length: usize, pad: &str) -> &mut Self;
  fn pad_end(&mut self, length: usize, pad: &str) -> &mut Self;
  fn reverse_graphemes(&mut self) -> &mut Self;
  fn trim_in_place(&mut self) -> &mut Self;
  fn url_encode(&mut self) -> &mut Self;
  fn url_decode(&mut self) -> &mut Self;
}

impl TextMutExt for String {
  fn camelize(&mut self) -> &mut Self {
    case_convention::camelize(self);
    self
  }

  fn latinize(&mut self) -> &mut Self {
    case_convention::latinize_in_place(self);
    self
  }

  fn truncate_graphemes(&mut self, length: usize, trailing: Option<&str>) -> &mut Self {
    slice::truncate(self, length, trailing);
    self
  }

  fn slice_graphemes(&mut self, from: usize, length: usize) -> &mut Self {
    slice::slice(self, from, length);
    self
  }

  fn slice_grapheme_range(&mut self, start: usize, end: usize) -> &mut Self {
    slice::slice_range(self, start, end);
    self
  }

  fn slice_from(&mut self, from: usize) -> &mut Self {
    slice::slice_at(self, from);
    self
  }

  fn pad_start(&mut self, length: usize, pad: &str) -> &mut Self {
    slice::pad_start(self, length, pad);
    self
  }

  fn pad_end(&mut self, length: usize, pad: &str) -> &mut Self {
    slice::pad_end(self, length, pad);
    self
  }

  fn reverse_graphemes(&mut self) -> &mut Self {
    grapheme::reverse(self);
    self
  }

  fn trim_in_place(&mut self) -> &mut Self {
    query::trim(self);
    self
  }

  fn url_encode(&mut self) -> &mut Self {
    codec::url_encode_in_place(self);
    self
  }

  fn url_decode(&mut self) -> &mut Self {
    codec::url_decode_in_place(self);
    self
  }
}
