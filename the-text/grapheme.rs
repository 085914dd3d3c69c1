//! Grapheme-indexed access to `str`.
//!
//! Every index in this crate counts user-perceived characters (extended
//! grapheme clusters), never bytes or scalar values. The helpers here turn
//! grapheme indices into byte offsets, validating bounds first so callers get
//! `None` instead of a panic or a split cluster.

use std::{
  iter,
  ops::{
    Range,
    RangeInclusive,
  },
};

use unicode_segmentation::UnicodeSegmentation;

/// All grapheme clusters of `text`, in order.
pub fn graphemes(text: &str) -> Vec<&str> {
  text.graphemes(true).collect()
}

#[must_use]
pub fn grapheme_count(text: &str) -> usize {
  if text.is_ascii() {
    // Fast path, except that "\r\n" is a single cluster.
    return text.len() - text.matches("\r\n").count();
  }
  text.graphemes(true).count()
}

/// Byte offset of the `n`th grapheme boundary.
///
/// `n == grapheme_count(text)` yields `text.len()`; anything beyond that is
/// out of range.
#[must_use]
pub fn grapheme_offset(text: &str, n: usize) -> Option<usize> {
  text
    .grapheme_indices(true)
    .map(|(idx, _)| idx)
    .chain(iter::once(text.len()))
    .nth(n)
}

/// The grapheme at `index`, or `None` when out of range.
///
/// ```
/// use the_text::grapheme::grapheme_at;
///
/// assert_eq!(grapheme_at("Hello World!", 3), Some("l"));
/// assert_eq!(grapheme_at("Hello World!", 20), None);
/// ```
pub fn grapheme_at(text: &str, index: usize) -> Option<&str> {
  text.graphemes(true).nth(index)
}

/// The graphemes in the half-open `range`, or `None` if any bound is past
/// the end of `text` or the range is reversed.
///
/// ```
/// use the_text::grapheme::grapheme_range;
///
/// assert_eq!(grapheme_range("Hello World!", 6..11), Some("World"));
/// assert_eq!(grapheme_range("Hello World!", 21..110), None);
/// ```
pub fn grapheme_range(text: &str, range: Range<usize>) -> Option<&str> {
  grapheme_byte_range(text, range).map(|bytes| &text[bytes])
}

/// Byte range covering the graphemes in `range`, validated like
/// [`grapheme_range`].
pub fn grapheme_byte_range(text: &str, range: Range<usize>) -> Option<Range<usize>> {
  if range.start > range.end {
    return None;
  }
  let start = grapheme_offset(text, range.start)?;
  let len = grapheme_offset(&text[start..], range.end - range.start)?;
  Some(start..start + len)
}

/// Closed-range variant of [`grapheme_range`].
///
/// ```
/// use the_text::grapheme::grapheme_range_inclusive;
///
/// assert_eq!(grapheme_range_inclusive("Hello World!", 6..=11), Some("World!"));
/// ```
pub fn grapheme_range_inclusive(text: &str, range: RangeInclusive<usize>) -> Option<&str> {
  let (start, end) = range.into_inner();
  grapheme_range(text, start..end.checked_add(1)?)
}

/// The first `n` graphemes of `text`, or all of it if it is shorter.
pub fn grapheme_prefix(text: &str, n: usize) -> &str {
  match grapheme_offset(text, n) {
    Some(end) => &text[..end],
    None => text,
  }
}

pub fn first_grapheme(text: &str) -> Option<&str> {
  text.graphemes(true).next()
}

pub fn last_grapheme(text: &str) -> Option<&str> {
  text.graphemes(true).next_back()
}

/// `text` with its graphemes in reverse order. Combining sequences and flags
/// survive intact.
pub fn reversed(text: &str) -> String {
  text.graphemes(true).rev().collect()
}

pub fn reverse(text: &mut String) {
  *text = reversed(text);
}
