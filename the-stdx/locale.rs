//! Explicit number-formatting conventions.
//!
//! Nothing in this workspace reads an ambient "current" locale. Callers pick a
//! [`Locale`] and pass it to the parsing helpers, so the same input parses the
//! same way on every machine.

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  de,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Locale {
  identifier:         &'static str,
  decimal_separator:  char,
  grouping_separator: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
  #[error("unknown locale identifier '{0}'")]
  Unknown(String),
}

const KNOWN_LOCALES: &[Locale] = &[
  Locale::new("en_US_POSIX", '.', None),
  Locale::new("en_US", '.', Some(',')),
  Locale::new("en_GB", '.', Some(',')),
  Locale::new("fr_FR", ',', Some('\u{202F}')),
  Locale::new("de_DE", ',', Some('.')),
  Locale::new("es_ES", ',', Some('.')),
  Locale::new("it_IT", ',', Some('.')),
  Locale::new("pt_BR", ',', Some('.')),
];

impl Locale {
  const fn new(
    identifier: &'static str,
    decimal_separator: char,
    grouping_separator: Option<char>,
  ) -> Self {
    Self {
      identifier,
      decimal_separator,
      grouping_separator,
    }
  }

  /// The invariant `en_US_POSIX` locale: `.` as decimal separator and no
  /// digit grouping. Use it to normalise machine-readable input.
  pub const fn posix() -> Self {
    Self::new("en_US_POSIX", '.', None)
  }

  /// Looks up a locale by identifier.
  ///
  /// Accepts both `fr_FR` and `fr-FR`; `C` and `POSIX` map to
  /// [`Locale::posix`].
  pub fn from_identifier(identifier: &str) -> Result<Self, LocaleError> {
    let normalized = identifier.trim().replace('-', "_");
    if normalized.eq_ignore_ascii_case("c") || normalized.eq_ignore_ascii_case("posix") {
      return Ok(Self::posix());
    }

    KNOWN_LOCALES
      .iter()
      .find(|locale| locale.identifier.eq_ignore_ascii_case(&normalized))
      .copied()
      .ok_or_else(|| LocaleError::Unknown(identifier.to_string()))
  }

  pub fn identifier(&self) -> &'static str {
    self.identifier
  }

  pub fn decimal_separator(&self) -> char {
    self.decimal_separator
  }

  pub fn grouping_separator(&self) -> Option<char> {
    self.grouping_separator
  }

  /// Whether `ch` separates digit groups in this locale.
  ///
  /// Locales that group with a space accept any space separator, since
  /// formatted numbers mix regular, no-break and narrow no-break spaces.
  pub fn is_grouping_separator(&self, ch: char) -> bool {
    match self.grouping_separator {
      Some(sep) if sep.is_whitespace() => ch.is_whitespace() && ch != '\n',
      Some(sep) => sep == ch,
      None => false,
    }
  }
}

impl Default for Locale {
  fn default() -> Self {
    Self::posix()
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.identifier)
  }
}

impl FromStr for Locale {
  type Err = LocaleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_identifier(s)
  }
}

impl TryFrom<String> for Locale {
  type Error = LocaleError;

  fn try_from(identifier: String) -> Result<Self, Self::Error> {
    Self::from_identifier(&identifier)
  }
}

// Not derived: the `&'static str` field would tie the derived impl to
// `Deserialize<'static>`.
impl<'de> Deserialize<'de> for Locale {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let identifier = String::deserialize(deserializer)?;
    Self::try_from(identifier).map_err(de::Error::custom)
  }
}

impl From<Locale> for String {
  fn from(locale: Locale) -> Self {
    locale.identifier.to_string()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn posix_is_default() {
    let locale = Locale::default();
    assert_eq!(locale, Locale::posix());
    assert_eq!(locale.identifier(), "en_US_POSIX");
    assert_eq!(locale.decimal_separator(), '.');
    assert_eq!(locale.grouping_separator(), None);
  }

  #[test]
  fn lookup_by_identifier() {
    let fr = Locale::from_identifier("fr_FR").unwrap();
    assert_eq!(fr.decimal_separator(), ',');
    assert_eq!(Locale::from_identifier("fr-FR").unwrap(), fr);
    assert_eq!("de_DE".parse::<Locale>().unwrap().grouping_separator(), Some('.'));
    assert_eq!(Locale::from_identifier("POSIX").unwrap(), Locale::posix());
    assert_eq!(Locale::from_identifier("C").unwrap(), Locale::posix());
  }

  #[test]
  fn unknown_identifier() {
    assert_eq!(
      Locale::from_identifier("xx_YY"),
      Err(LocaleError::Unknown("xx_YY".to_string()))
    );
    assert_eq!(
      LocaleError::Unknown("xx_YY".to_string()).to_string(),
      "unknown locale identifier 'xx_YY'"
    );
  }

  #[derive(Debug, Deserialize, PartialEq)]
  struct Settings {
    locale: Locale,
  }

  #[test]
  fn deserializes_from_borrowed_input() {
    let source = String::from("locale = \"de-DE\"");
    let settings: Settings = toml::from_str(&source).unwrap();
    assert_eq!(settings.locale.identifier(), "de_DE");

    let err = toml::from_str::<Settings>("locale = \"xx_YY\"").unwrap_err();
    assert!(err.to_string().contains("unknown locale identifier 'xx_YY'"));
  }

  #[test]
  fn space_grouping_accepts_any_space() {
    let fr = Locale::from_identifier("fr_FR").unwrap();
    assert!(fr.is_grouping_separator('\u{202F}'));
    assert!(fr.is_grouping_separator('\u{00A0}'));
    assert!(fr.is_grouping_separator(' '));
    assert!(!fr.is_grouping_separator('.'));

    let us = Locale::from_identifier("en_US").unwrap();
    assert!(us.is_grouping_separator(','));
    assert!(!us.is_grouping_separator(' '));
    assert!(!Locale::posix().is_grouping_separator(','));
  }
}
