//! Character classification used by word splitting and emoji detection.

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

/// Punctuation proper (the Unicode `P*` categories), without symbols.
/// Used to split text into words.
#[inline]
pub fn char_is_punctuation_mark(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
  )
}

/// Whether `ch` falls in one of the emoji blocks (emoticons, pictographs,
/// dingbats, variation selectors and a few legacy symbols).
#[inline]
pub fn char_is_emoji(ch: char) -> bool {
  matches!(
    ch as u32,
    0x00A9 | 0x00AE | 0x3030
      | 0x1D000..=0x1F77F
      | 0x2100..=0x27BF
      | 0xFE00..=0xFE0F
      | 0x1F900..=0x1F9FF
  )
}
