#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,

  /// U+000B -- VerticalTab
  VT,

  /// U+000C -- FormFeed
  FF,

  /// U+000D -- CarriageReturn
  CR,

  /// U+0085 -- NextLine
  Nel,

  /// U+2028 -- Line Separator
  LS,

  /// U+2029 -- ParagraphSeparator
  PS,
}

impl LineEnding {
  #[inline]
  pub const fn len_bytes(&self) -> usize {
    self.as_str().len()
  }

  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
      Self::VT => "\u{000B}",
      Self::FF => "\u{000C}",
      Self::CR => "\u{000D}",
      Self::Nel => "\u{0085}",
      Self::LS => "\u{2028}",
      Self::PS => "\u{2029}",
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000B}' => Some(LineEnding::VT),
      '\u{000C}' => Some(LineEnding::FF),
      '\u{000D}' => Some(LineEnding::CR),
      '\u{0085}' => Some(LineEnding::Nel),
      '\u{2028}' => Some(LineEnding::LS),
      '\u{2029}' => Some(LineEnding::PS),
      _ => None,
    }
  }
}

/// Splits `text` into lines on every line ending.
///
/// CRLF counts as a single break and the returned lines never contain a line
/// ending. A trailing line ending does not produce an empty last line.
///
/// ```
/// use the_text::line_ending::lines;
///
/// assert_eq!(lines("Hello\ntest"), ["Hello", "test"]);
/// assert_eq!(lines("a\r\nb\n"), ["a", "b"]);
/// ```
pub fn lines(text: &str) -> Vec<&str> {
  let mut lines = Vec::new();
  let mut start = 0;
  let mut chars = text.char_indices().peekable();

  while let Some((idx, ch)) = chars.next() {
    let Some(mut ending) = LineEnding::from_char(ch) else {
      continue;
    };
    if ending == LineEnding::CR && matches!(chars.peek(), Some((_, '\u{000A}'))) {
      chars.next();
      ending = LineEnding::Crlf;
    }
    lines.push(&text[start..idx]);
    start = idx + ending.len_bytes();
  }

  if start < text.len() {
    lines.push(&text[start..]);
  }
  lines
}
