//! Defaults for the text helpers, loadable from TOML.
//!
//! ```toml
//! trailing = "…"
//! pad = "0"
//! locale = "de_DE"
//! date-format = "%d.%m.%Y"
//! ```

use std::{
  borrow::Cow,
  fs,
  io,
  path::Path,
};

use chrono::{
  NaiveDate,
  NaiveDateTime,
};
use eyre::{
  Result,
  WrapErr,
};
use serde::{
  Deserialize,
  Serialize,
};
use the_stdx::Locale;

use crate::{
  parse,
  slice,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TextConfig {
  /// Appended to truncated text. Empty for none.
  pub trailing:         String,
  pub pad:              String,
  pub locale:           Locale,
  pub date_format:      String,
  pub date_time_format: String,
  pub lorem_length:     usize,
}

impl Default for TextConfig {
  fn default() -> Self {
    Self {
      trailing:         slice::DEFAULT_TRAILING.to_string(),
      pad:              " ".to_string(),
      locale:           Locale::posix(),
      date_format:      parse::DATE_FORMAT.to_string(),
      date_time_format: parse::DATE_TIME_FORMAT.to_string(),
      lorem_length:     slice::lorem_ipsum_len(),
    }
  }
}

impl TextConfig {
  pub fn parse(source: &str) -> Result<Self> {
    toml::from_str(source).wrap_err("failed to parse text config")
  }

  pub fn load(path: &Path) -> Result<Self> {
    let source = fs::read_to_string(path)
      .wrap_err_with(|| format!("failed to read text config '{}'", path.display()))?;
    Self::parse(&source).wrap_err_with(|| format!("invalid text config '{}'", path.display()))
  }

  /// Loads every existing file in `paths` and merges them, later files
  /// overriding earlier ones key by key. Missing files are skipped.
  pub fn load_layered<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
    let mut merged = toml::Value::Table(toml::Table::new());
    for path in paths {
      let path = path.as_ref();
      let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
          tracing::debug!(path = %path.display(), "skipping missing text config");
          continue;
        },
        Err(err) => {
          return Err(err)
            .wrap_err_with(|| format!("failed to read text config '{}'", path.display()));
        },
      };
      let layer: toml::Value = toml::from_str(&source)
        .wrap_err_with(|| format!("failed to parse text config '{}'", path.display()))?;
      merged = merge_toml_values(merged, layer, 3);
    }

    merged
      .try_into::<Self>()
      .wrap_err("failed to deserialize merged text config")
  }

  fn trailing(&self) -> Option<&str> {
    Some(self.trailing.as_str()).filter(|trailing| !trailing.is_empty())
  }

  pub fn truncated<'a>(&self, text: &'a str, length: usize) -> Cow<'a, str> {
    slice::truncated(text, length, self.trailing())
  }

  pub fn padding_start<'a>(&self, text: &'a str, length: usize) -> Cow<'a, str> {
    slice::padding_start(text, length, &self.pad)
  }

  pub fn padding_end<'a>(&self, text: &'a str, length: usize) -> Cow<'a, str> {
    slice::padding_end(text, length, &self.pad)
  }

  pub fn to_double(&self, text: &str) -> Option<f64> {
    parse::to_double(text, &self.locale)
  }

  pub fn to_date(&self, text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), &self.date_format).ok()
  }

  pub fn to_date_time(&self, text: &str) -> Option<NaiveDateTime> {
    parse::to_date_with_format(text.trim(), &self.date_time_format)
  }

  pub fn lorem_ipsum(&self) -> &'static str {
    slice::lorem_ipsum(self.lorem_length)
  }
}

/// Merges two TOML values, `right` winning on conflicts. Tables are merged
/// recursively up to `merge_depth` levels; below that, and for every other
/// kind of value, `right` replaces `left`.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (key, rvalue) in right_map {
        let merged = match left_map.remove(&key) {
          Some(lvalue) => merge_toml_values(lvalue, rvalue, merge_depth - 1),
          None => rvalue,
        };
        left_map.insert(key, merged);
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}

#[cfg(test)]
mod test {
  use std::io::Write;

  use super::*;

  #[test]
  fn defaults() {
    let config = TextConfig::default();
    assert_eq!(config.trailing, "...");
    assert_eq!(config.pad, " ");
    assert_eq!(config.locale, Locale::posix());
    assert_eq!(config.lorem_ipsum().len(), slice::lorem_ipsum_len());
    assert_eq!(TextConfig::parse("").unwrap(), config);
  }

  #[test]
  fn parse_overrides() {
    let config = TextConfig::parse(
      r#"
      trailing = "…"
      pad = "0"
      locale = "de-DE"
      date-format = "%d.%m.%Y"
      lorem-length = 11
      "#,
    )
    .unwrap();

    assert_eq!(config.truncated("Hello World", 5), "Hello…");
    assert_eq!(config.padding_start("42", 5), "00042");
    assert_eq!(config.padding_end("42", 4), "4200");
    assert_eq!(config.to_double("1.234,5"), Some(1234.5));
    assert_eq!(config.to_date("07.03.2024"), NaiveDate::from_ymd_opt(2024, 3, 7));
    assert_eq!(config.lorem_ipsum(), "Lorem ipsum");
  }

  #[test]
  fn empty_trailing_cuts_without_marker() {
    let config = TextConfig::parse(r#"trailing = """#).unwrap();
    assert_eq!(config.truncated("Hello World", 5), "Hello");
  }

  #[test]
  fn rejects_bad_config() {
    assert!(TextConfig::parse("locale = \"xx_XX\"").is_err());
    assert!(TextConfig::parse("unknown-key = 1").is_err());
    assert!(TextConfig::parse("pad = ").is_err());
  }

  #[test]
  fn load_reports_path() {
    let err = TextConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(format!("{err}").contains("/definitely/not/here.toml"));
  }

  #[test]
  fn layered_files_override_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let user = dir.path().join("user.toml");
    let missing = dir.path().join("missing.toml");

    let mut file = fs::File::create(&base).unwrap();
    writeln!(file, "pad = \"*\"\nlocale = \"fr_FR\"").unwrap();
    fs::write(&user, "locale = \"en_US\"\n").unwrap();

    let config = TextConfig::load_layered([&base, &missing, &user]).unwrap();
    assert_eq!(config.pad, "*");
    assert_eq!(config.locale.identifier(), "en_US");
    assert_eq!(config.trailing, "...");

    fs::write(&user, "locale = [").unwrap();
    assert!(TextConfig::load_layered([&base, &user]).is_err());
  }

  #[test]
  fn merge_prefers_right() {
    let left: toml::Value = toml::from_str("a = 1\n[t]\nx = 1\ny = 2").unwrap();
    let right: toml::Value = toml::from_str("b = 2\n[t]\ny = 3").unwrap();
    let merged = merge_toml_values(left, right, 3);

    assert_eq!(merged["a"].as_integer(), Some(1));
    assert_eq!(merged["b"].as_integer(), Some(2));
    assert_eq!(merged["t"]["x"].as_integer(), Some(1));
    assert_eq!(merged["t"]["y"].as_integer(), Some(3));
  }
}
