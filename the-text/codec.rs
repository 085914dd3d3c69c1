//! Base64 and percent encoding.

use std::borrow::Cow;

use base64::{
  Engine as _,
  engine::general_purpose::STANDARD,
};
use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  percent_decode_str,
  utf8_percent_encode,
};

/// Characters left unescaped by [`url_encode`]: ASCII alphanumerics plus the
/// sub-delimiters allowed in a URL host.
const URL_HOST_ALLOWED: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'!')
  .remove(b'$')
  .remove(b'&')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')')
  .remove(b'*')
  .remove(b'+')
  .remove(b',')
  .remove(b'-')
  .remove(b'.')
  .remove(b':')
  .remove(b';')
  .remove(b'=')
  .remove(b'[')
  .remove(b']')
  .remove(b'_')
  .remove(b'~');

pub fn base64_encode_bytes(bytes: &[u8]) -> String {
  STANDARD.encode(bytes)
}

pub fn base64_decode_bytes(text: &str) -> Option<Vec<u8>> {
  match STANDARD.decode(text) {
    Ok(bytes) => Some(bytes),
    Err(err) => {
      tracing::trace!(%err, "not valid base64");
      None
    },
  }
}

/// `"Hello World!"` becomes `"SGVsbG8gV29ybGQh"`.
pub fn base64_encode(text: &str) -> String {
  base64_encode_bytes(text.as_bytes())
}

/// Decodes padded standard base64 into UTF-8 text. Returns `None` for
/// malformed input or when the payload is not UTF-8.
pub fn base64_decode(text: &str) -> Option<String> {
  String::from_utf8(base64_decode_bytes(text)?).ok()
}

/// Percent-encodes everything outside the URL host character set.
///
/// ```
/// use the_text::codec::url_encode;
///
/// assert_eq!(
///   url_encode("it's easy to encode strings"),
///   "it's%20easy%20to%20encode%20strings"
/// );
/// ```
pub fn url_encode(text: &str) -> Cow<'_, str> {
  utf8_percent_encode(text, URL_HOST_ALLOWED).into()
}

/// Decodes percent escapes. Input that would decode to invalid UTF-8 is
/// returned unchanged.
pub fn url_decode(text: &str) -> Cow<'_, str> {
  percent_decode_str(text).decode_utf8().unwrap_or_else(|err| {
    tracing::trace!(%err, "percent-decoded bytes are not utf-8");
    Cow::Borrowed(text)
  })
}

pub fn url_encode_in_place(text: &mut String) {
  let encoded = match url_encode(text) {
    Cow::Borrowed(_) => return,
    Cow::Owned(encoded) => encoded,
  };
  *text = encoded;
}

pub fn url_decode_in_place(text: &mut String) {
  let decoded = match url_decode(text) {
    Cow::Borrowed(_) => return,
    Cow::Owned(decoded) => decoded,
  };
  *text = decoded;
}
