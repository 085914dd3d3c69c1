//! Email and URL validation, plus ad-hoc regular expression matching.

use once_cell::sync::Lazy;
use regex_automata::meta::{
  BuildError,
  Regex,
};
use thiserror::Error;
use url::Url;

const EMAIL_PATTERN: &str = r#"^(?:[\p{L}0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[\p{L}0-9](?:[a-z0-9-]*[\p{L}0-9])?\.)+[\p{L}0-9](?:[\p{L}0-9-]*[\p{L}0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[\p{L}0-9-]*[\p{L}0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
  Regex::builder()
    .build(EMAIL_PATTERN)
    .expect("email regex should compile")
});

// Relative references are checked by resolving them against this base.
static RELATIVE_BASE: Lazy<Url> =
  Lazy::new(|| Url::parse("http://localhost/").expect("base url should parse"));

#[derive(Debug, Error)]
pub enum PatternError {
  #[error("invalid pattern '{pattern}': {source}")]
  Invalid {
    pattern: String,
    #[source]
    source:  BuildError,
  },
}

/// A compiled regular expression, searched anywhere in the haystack.
#[derive(Debug, Clone)]
pub struct Pattern {
  regex: Regex,
}

impl Pattern {
  pub fn new(pattern: &str) -> Result<Self, PatternError> {
    let regex = Regex::new(pattern).map_err(|source| {
      PatternError::Invalid {
        pattern: pattern.to_string(),
        source,
      }
    })?;
    Ok(Self { regex })
  }

  pub fn is_match(&self, text: &str) -> bool {
    self.regex.is_match(text)
  }
}

/// Whether `pattern` matches somewhere in `text`.
///
/// An invalid pattern never matches; the compile error is logged.
pub fn matches(text: &str, pattern: &str) -> bool {
  match Pattern::new(pattern) {
    Ok(pattern) => pattern.is_match(text),
    Err(err) => {
      tracing::warn!(%err, "ignoring invalid pattern");
      false
    },
  }
}

/// RFC 5322 style address check. Unicode letters are accepted in the local
/// part and at the edges of domain labels.
///
/// ```
/// use the_text::validate::is_valid_email;
///
/// assert!(is_valid_email("john@doe.com"));
/// assert!(!is_valid_email("john@doe"));
/// ```
pub fn is_valid_email(text: &str) -> bool {
  EMAIL.is_match(text)
}

/// Parses `text` as an absolute URL.
pub fn to_url(text: &str) -> Option<Url> {
  Url::parse(text).ok()
}

/// Whether `text` is a URL reference: either an absolute URL or a relative
/// reference without whitespace.
///
/// ```
/// use the_text::validate::is_valid_url;
///
/// assert!(is_valid_url("https://google.com"));
/// assert!(is_valid_url("google.com"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(text: &str) -> bool {
  if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c.is_control()) {
    return false;
  }
  Url::parse(text).is_ok() || RELATIVE_BASE.join(text).is_ok()
}

/// Absolute URL with a scheme: `"https://google.com"` is, `"google.com"` is
/// not.
pub fn is_valid_schemed_url(text: &str) -> bool {
  to_url(text).is_some()
}

pub fn is_valid_http_url(text: &str) -> bool {
  has_scheme(text, "http")
}

pub fn is_valid_https_url(text: &str) -> bool {
  has_scheme(text, "https")
}

/// `"file://Documents/file.txt"` is a file URL.
pub fn is_valid_file_url(text: &str) -> bool {
  has_scheme(text, "file")
}

fn has_scheme(text: &str, scheme: &str) -> bool {
  to_url(text).is_some_and(|url| url.scheme() == scheme)
}
