//! Case conversions, slugs and diacritic folding.
//!
//! Words are separated by any non-alphanumeric character. Conversions that
//! join words (camel, pascal) discard the original casing of every letter;
//! the separated forms (snake, kebab) additionally split on lowercase to
//! uppercase transitions.

use unicode_normalization::{
  UnicodeNormalization,
  char::is_combining_mark,
};

use crate::grapheme::first_grapheme;

pub fn to_pascal_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  to_pascal_case_into(text, &mut res);
  res
}

pub fn to_pascal_case_into(text: &str, buf: &mut String) {
  text.chars().fold(true, |word_start, c| {
    if !c.is_alphanumeric() {
      return true;
    }
    if word_start {
      buf.extend(c.to_uppercase());
    } else {
      buf.extend(c.to_lowercase());
    }
    false
  });
}

/// `"sOme vAriable naMe"` becomes `"someVariableName"`.
pub fn to_camel_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  to_camel_case_into(text, &mut res);
  res
}

pub fn to_camel_case_into(text: &str, buf: &mut String) {
  text.chars().fold((true, true), |(first_word, word_start), c| {
    if !c.is_alphanumeric() {
      return (first_word && word_start, true);
    }
    if first_word || !word_start {
      buf.extend(c.to_lowercase());
    } else {
      buf.extend(c.to_uppercase());
    }
    (false, false)
  });
}

/// In-place [`to_camel_case`].
pub fn camelize(text: &mut String) {
  *text = to_camel_case(text);
}

pub fn to_upper_case(text: &str) -> String {
  text.chars().flat_map(char::to_uppercase).collect()
}

pub fn to_lower_case(text: &str) -> String {
  text.chars().flat_map(char::to_lowercase).collect()
}

pub fn to_snake_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  to_separated_case_into(text, &mut res, '_');
  res
}

pub fn to_kebab_case(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  to_separated_case_into(text, &mut res, '-');
  res
}

/// Shared implementation for snake_case and kebab-case.
/// Handles:
/// - Word boundaries from non-alphanumeric separators (_, -, space, etc.)
/// - Word boundaries from camelCase transitions (lowercase -> uppercase)
/// - Consecutive uppercase runs stay in one word ("HTTPServer" -> "httpserver")
fn to_separated_case_into(text: &str, buf: &mut String, sep: char) {
  // State: (has_content, prev_was_upper, pending_separator)
  text.chars().fold(
    (false, false, false),
    |(has_content, prev_was_upper, pending_sep), c| {
      if !c.is_alphanumeric() {
        return (has_content, false, has_content);
      }

      let is_upper = c.is_uppercase();
      if pending_sep || (has_content && is_upper && !prev_was_upper) {
        buf.push(sep);
      }

      buf.extend(c.to_lowercase());
      (true, is_upper, false)
    },
  );
}

/// URL slug: lowercased, diacritics stripped, every run of non-alphanumeric
/// characters collapsed into a single `-`, never leading or trailing.
///
/// `"Hello World!"` becomes `"hello-world"`.
pub fn to_slug(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  latinize(text).chars().fold((false, false), |(has_content, pending_dash), c| {
    if !c.is_alphanumeric() {
      return (has_content, has_content);
    }
    if pending_dash {
      res.push('-');
    }
    res.extend(c.to_lowercase());
    (true, false)
  });
  res
}

/// Strips diacritics: `"Hèllö Wórld!"` becomes `"Hello World!"`.
///
/// Letters without a canonical decomposition (`ø`, `ł`, ...) are kept as is.
pub fn latinize(text: &str) -> String {
  text
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .nfc()
    .collect()
}

pub fn latinize_in_place(text: &mut String) {
  *text = latinize(text);
}

/// Uppercases the first grapheme and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
  match first_grapheme(text) {
    Some(first) => {
      let mut res = to_upper_case(first);
      res.push_str(&text[first.len()..]);
      res
    },
    None => String::new(),
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
    assert_eq!(to_pascal_case("HELLO_WORLD"), "HelloWorld");
    assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
    assert_eq!(to_pascal_case("__leading__"), "Leading");
    assert_eq!(to_pascal_case(""), "");
    assert_eq!(to_pascal_case("a"), "A");
  }

  #[test]
  fn test_to_camel_case() {
    assert_eq!(to_camel_case("sOme vAriable naMe"), "someVariableName");
    assert_eq!(to_camel_case("hello_world"), "helloWorld");
    assert_eq!(to_camel_case("HELLO_WORLD"), "helloWorld");
    assert_eq!(to_camel_case("Hello\nWorld"), "helloWorld");
    assert_eq!(to_camel_case("HelloWorld"), "helloworld");
    assert_eq!(to_camel_case("  leading spaces"), "leadingSpaces");
    assert_eq!(to_camel_case(""), "");
    assert_eq!(to_camel_case("A"), "a");
  }

  #[test]
  fn test_camelize() {
    let mut text = String::from("sOme vaRiabLe Name");
    camelize(&mut text);
    assert_eq!(text, "someVariableName");
  }

  #[test]
  fn test_upper_and_lower() {
    assert_eq!(to_upper_case("Hello World"), "HELLO WORLD");
    assert_eq!(to_upper_case("café"), "CAFÉ");
    assert_eq!(to_upper_case("straße"), "STRASSE");
    assert_eq!(to_lower_case("CAFÉ"), "café");
    assert_eq!(to_lower_case(""), "");
  }

  #[test]
  fn test_to_snake_case() {
    assert_eq!(to_snake_case("helloWorld"), "hello_world");
    assert_eq!(to_snake_case("HelloWorld"), "hello_world");
    assert_eq!(to_snake_case("hello world"), "hello_world");
    assert_eq!(to_snake_case("HELLO_WORLD"), "hello_world");
    assert_eq!(to_snake_case("HTTPServer"), "httpserver");
    assert_eq!(to_snake_case("getHTTPResponse"), "get_httpresponse");
    assert_eq!(to_snake_case("__leading__trailing__"), "leading_trailing");
    assert_eq!(to_snake_case(""), "");
  }

  #[test]
  fn test_to_kebab_case() {
    assert_eq!(to_kebab_case("helloWorld"), "hello-world");
    assert_eq!(to_kebab_case("hello_world"), "hello-world");
    assert_eq!(to_kebab_case("--leading--trailing--"), "leading-trailing");
    assert_eq!(to_kebab_case("A"), "a");
  }

  #[test]
  fn test_to_slug() {
    assert_eq!(to_slug("Hello World!"), "hello-world");
    assert_eq!(to_slug("Swift is amazing"), "swift-is-amazing");
    assert_eq!(to_slug("  --Crème brûlée & co.--"), "creme-brulee-co");
    assert_eq!(to_slug("a   b"), "a-b");
    assert_eq!(to_slug("!!!"), "");
    assert_eq!(to_slug(""), "");
  }

  #[test]
  fn test_latinize() {
    assert_eq!(latinize("Hèllö Wórld!"), "Hello World!");
    assert_eq!(latinize("e\u{0301}"), "e");
    assert_eq!(latinize("øl"), "øl");

    let mut text = String::from("Ångström");
    latinize_in_place(&mut text);
    assert_eq!(text, "Angstrom");
  }

  #[test]
  fn test_capitalize_first() {
    assert_eq!(capitalize_first("hello world"), "Hello world");
    assert_eq!(capitalize_first("éclair"), "Éclair");
    assert_eq!(capitalize_first(""), "");
  }

  quickcheck::quickcheck! {
      fn slug_has_no_edge_dashes(text: String) -> bool {
          let slug = to_slug(&text);
          !slug.starts_with('-') && !slug.ends_with('-') && !slug.contains("--")
      }
  }
}
