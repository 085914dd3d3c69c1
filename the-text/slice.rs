//! Truncation, slicing, padding and repetition by grapheme count.
//!
//! Each operation has a pure form that borrows the input (returning a
//! sub-slice or a `Cow` that stays borrowed when nothing changes) and, where
//! it makes sense, an in-place form over `&mut String`. In-place forms whose
//! preconditions fail leave the string untouched.

use std::{
  borrow::Cow,
  ops::Range,
};

use unicode_segmentation::UnicodeSegmentation;

use crate::grapheme::{
  grapheme_byte_range,
  grapheme_count,
  grapheme_offset,
  grapheme_prefix,
};

pub const DEFAULT_TRAILING: &str = "...";

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                           eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim \
                           ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut \
                           aliquip ex ea commodo consequat. Duis aute irure dolor in \
                           reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
                           pariatur. Excepteur sint occaecat cupidatat non proident, sunt in \
                           culpa qui officia deserunt mollit anim id est laborum.";

/// Byte offset where a truncation to `length` graphemes cuts, if it cuts at
/// all. Truncating to zero is a no-op.
fn truncation_point(text: &str, length: usize) -> Option<usize> {
  if length == 0 {
    return None;
  }
  grapheme_offset(text, length).filter(|&end| end < text.len())
}

/// Keeps the first `length` graphemes and appends `trailing` when the text was
/// longer; returns `text` unchanged otherwise.
///
/// ```
/// use the_text::slice::truncated;
///
/// assert_eq!(truncated("This is a very long sentence", 14, Some("...")), "This is a very...");
/// assert_eq!(truncated("Short sentence", 14, Some("...")), "Short sentence");
/// ```
///
/// `length == 0` leaves the text unchanged.
pub fn truncated<'a>(text: &'a str, length: usize, trailing: Option<&str>) -> Cow<'a, str> {
  let Some(end) = truncation_point(text, length) else {
    return Cow::Borrowed(text);
  };
  match trailing {
    Some(trailing) if !trailing.is_empty() => {
      let mut res = String::with_capacity(end + trailing.len());
      res.push_str(&text[..end]);
      res.push_str(trailing);
      Cow::Owned(res)
    },
    _ => Cow::Borrowed(&text[..end]),
  }
}

/// In-place [`truncated`].
pub fn truncate(text: &mut String, length: usize, trailing: Option<&str>) {
  if let Some(end) = truncation_point(text, length) {
    text.truncate(end);
    text.push_str(trailing.unwrap_or_default());
  }
}

fn slicing_range(text: &str, from: usize, length: usize) -> Option<Range<usize>> {
  let start = grapheme_offset(text, from).filter(|&start| start < text.len())?;
  let len = grapheme_prefix(&text[start..], length).len();
  Some(start..start + len)
}

/// Up to `length` graphemes starting at grapheme `from`.
///
/// Returns the remainder when `from + length` runs past the end and `None`
/// when `from` is not a valid index.
///
/// ```
/// use the_text::slice::slicing;
///
/// assert_eq!(slicing("Hello World", 6, 5), Some("World"));
/// assert_eq!(slicing("Hello World", 6, 50), Some("World"));
/// assert_eq!(slicing("Hello World", 11, 1), None);
/// ```
pub fn slicing(text: &str, from: usize, length: usize) -> Option<&str> {
  slicing_range(text, from, length).map(|bytes| &text[bytes])
}

/// In-place [`slicing`]; leaves `text` unchanged when `from` is out of range.
pub fn slice(text: &mut String, from: usize, length: usize) {
  if let Some(bytes) = slicing_range(text, from, length) {
    keep_bytes(text, bytes);
  }
}

/// Keeps the graphemes in `start..end`. No-op when `end < start` or either
/// bound is out of range.
pub fn slice_range(text: &mut String, start: usize, end: usize) {
  if let Some(bytes) = grapheme_byte_range(text, start..end) {
    keep_bytes(text, bytes);
  }
}

/// Keeps everything from grapheme `from` on. No-op when `from` is not a valid
/// index.
pub fn slice_at(text: &mut String, from: usize) {
  if let Some(start) = grapheme_offset(text, from).filter(|&start| start < text.len()) {
    text.drain(..start);
  }
}

fn keep_bytes(text: &mut String, bytes: Range<usize>) {
  text.truncate(bytes.end);
  text.drain(..bytes.start);
}

/// The padding needed to grow `text` to `length` graphemes, or `None` when
/// no padding applies (already long enough, or an empty `pad`).
fn fill(text: &str, length: usize, pad: &str) -> Option<String> {
  if pad.is_empty() {
    tracing::trace!("ignoring padding request with an empty pad");
    return None;
  }
  let missing = length.checked_sub(grapheme_count(text)).filter(|&n| n > 0)?;
  Some(pad.graphemes(true).cycle().take(missing).collect())
}

/// Pads the start of `text` with repetitions of `pad` until it is `length`
/// graphemes long, cutting the last repetition to fit.
///
/// ```
/// use the_text::slice::padding_start;
///
/// assert_eq!(padding_start("hue", 10, " "), "       hue");
/// assert_eq!(padding_start("hue", 10, "br"), "brbrbrbhue");
/// ```
pub fn padding_start<'a>(text: &'a str, length: usize, pad: &str) -> Cow<'a, str> {
  match fill(text, length, pad) {
    Some(mut padded) => {
      padded.push_str(text);
      Cow::Owned(padded)
    },
    None => Cow::Borrowed(text),
  }
}

/// Pads the end of `text`; see [`padding_start`].
///
/// ```
/// use the_text::slice::padding_end;
///
/// assert_eq!(padding_end("hue", 10, "br"), "huebrbrbrb");
/// ```
pub fn padding_end<'a>(text: &'a str, length: usize, pad: &str) -> Cow<'a, str> {
  match fill(text, length, pad) {
    Some(padding) => Cow::Owned(format!("{text}{padding}")),
    None => Cow::Borrowed(text),
  }
}

pub fn pad_start(text: &mut String, length: usize, pad: &str) {
  if let Some(padding) = fill(text, length, pad) {
    text.insert_str(0, &padding);
  }
}

pub fn pad_end(text: &mut String, length: usize, pad: &str) {
  if let Some(padding) = fill(text, length, pad) {
    text.push_str(&padding);
  }
}

/// `text` repeated `count` times: `repeat("bar", 3) == "barbarbar"`.
pub fn repeat(text: &str, count: usize) -> String {
  text.repeat(count)
}

pub fn removing_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
  text.strip_prefix(prefix).unwrap_or(text)
}

pub fn removing_suffix<'a>(text: &'a str, suffix: &str) -> &'a str {
  text.strip_suffix(suffix).unwrap_or(text)
}

/// The first `length` characters of the standard lorem ipsum paragraph.
pub fn lorem_ipsum(length: usize) -> &'static str {
  grapheme_prefix(LOREM_IPSUM, length)
}

/// Length of the full lorem ipsum paragraph.
pub fn lorem_ipsum_len() -> usize {
  LOREM_IPSUM.len()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_truncated() {
    let text = "This is a very long sentence";
    assert_eq!(truncated(text, 14, Some(DEFAULT_TRAILING)), "This is a very...");
    assert_eq!(truncated(text, 14, None), "This is a very");
    assert_eq!(truncated(text, 4, Some("…")), "This…");
    assert_eq!(truncated("Short sentence", 14, Some("...")), "Short sentence");
    assert_eq!(truncated(text, 0, Some("...")), text);
    assert_eq!(truncated("", 3, Some("...")), "");
    assert_eq!(truncated("e\u{0301}e\u{0301}", 1, Some("!")), "e\u{0301}!");
  }

  #[test]
  fn truncated_borrows_when_unchanged() {
    assert!(matches!(truncated("short", 10, Some("...")), Cow::Borrowed(_)));
    assert!(matches!(truncated("longer", 2, None), Cow::Borrowed("lo")));
  }

  #[test]
  fn test_truncate_in_place() {
    let mut text = String::from("This is a very long sentence");
    truncate(&mut text, 14, Some("..."));
    assert_eq!(text, "This is a very...");

    let mut text = String::from("abc");
    truncate(&mut text, 0, Some("..."));
    assert_eq!(text, "abc");
    truncate(&mut text, 3, Some("..."));
    assert_eq!(text, "abc");
  }

  #[test]
  fn test_slicing() {
    assert_eq!(slicing("Hello World", 6, 5), Some("World"));
    assert_eq!(slicing("Hello World", 6, 50), Some("World"));
    assert_eq!(slicing("Hello World", 0, 0), Some(""));
    assert_eq!(slicing("Hello World", 11, 1), None);
    assert_eq!(slicing("Hello World", 40, 1), None);
    assert_eq!(slicing("", 0, 1), None);
    assert_eq!(slicing("🇺🇸🇫🇷🇩🇪", 1, 1), Some("🇫🇷"));
  }

  #[test]
  fn test_slice_in_place() {
    let mut text = String::from("Hello World");
    slice(&mut text, 6, 5);
    assert_eq!(text, "World");

    let mut text = String::from("Hello World");
    slice(&mut text, 20, 5);
    assert_eq!(text, "Hello World");

    let mut text = String::from("Hello World");
    slice_range(&mut text, 6, 11);
    assert_eq!(text, "World");
    slice_range(&mut text, 3, 1);
    assert_eq!(text, "World");
    slice_range(&mut text, 0, 30);
    assert_eq!(text, "World");

    let mut text = String::from("Hello World");
    slice_at(&mut text, 6);
    assert_eq!(text, "World");
    slice_at(&mut text, 5);
    assert_eq!(text, "World");
  }

  #[test]
  fn test_padding() {
    assert_eq!(padding_start("hue", 10, " "), "       hue");
    assert_eq!(padding_start("hue", 10, "br"), "brbrbrbhue");
    assert_eq!(padding_start("hue", 4, "br"), "bhue");
    assert_eq!(padding_end("hue", 10, " "), "hue       ");
    assert_eq!(padding_end("hue", 10, "br"), "huebrbrbrb");
    assert_eq!(padding_end("hue", 2, "br"), "hue");
    assert_eq!(padding_end("hue", 10, ""), "hue");
    assert_eq!(padding_start("", 3, "ab"), "aba");
    assert_eq!(padding_start("x", 3, "🇺🇸"), "🇺🇸🇺🇸x");
  }

  #[test]
  fn test_pad_in_place() {
    let mut text = String::from("hue");
    pad_start(&mut text, 5, "-");
    assert_eq!(text, "--hue");
    pad_end(&mut text, 7, "+");
    assert_eq!(text, "--hue++");
    pad_end(&mut text, 7, "+");
    assert_eq!(text, "--hue++");
  }

  #[test]
  fn test_repeat() {
    assert_eq!(repeat("bar", 3), "barbarbar");
    assert_eq!(repeat("bar", 0), "");
    assert_eq!(repeat("", 3), "");
  }

  #[test]
  fn test_prefix_and_suffix() {
    assert_eq!(removing_prefix("Hello, World!", "Hello, "), "World!");
    assert_eq!(removing_prefix("Hello, World!", "World"), "Hello, World!");
    assert_eq!(removing_suffix("Hello, World!", ", World!"), "Hello");
    assert_eq!(removing_suffix("Hello", ""), "Hello");
  }

  #[test]
  fn test_lorem_ipsum() {
    assert_eq!(lorem_ipsum(0), "");
    assert_eq!(lorem_ipsum(11), "Lorem ipsum");
    assert_eq!(lorem_ipsum(10_000).len(), lorem_ipsum_len());
    assert_eq!(lorem_ipsum_len(), 445);
  }

  quickcheck::quickcheck! {
      fn truncating_to_full_length_is_identity(text: String, extra: u8) -> bool {
          let length = grapheme_count(&text) + extra as usize;
          truncated(&text, length, Some("...")) == text.as_str()
      }

      fn padding_reaches_length(text: String, length: u8) -> bool {
          // Pads glued to arbitrary text can merge into its edge clusters.
          let text: String = text.chars().filter(char::is_ascii_alphanumeric).collect();
          let length = length as usize;
          let padded = padding_start(&padding_end(&text, length, "*"), length, "#").into_owned();
          grapheme_count(&padded) == grapheme_count(&text).max(length)
      }

      fn padding_is_recoverable(text: String, length: u8) -> bool {
          let text: String = text.chars().filter(char::is_ascii_alphanumeric).collect();
          let padded = padding_start(&padding_end(&text, length as usize, "*"), length as usize, "#")
            .into_owned();
          padded.trim_start_matches('#').trim_end_matches('*') == text
      }
  }
}
