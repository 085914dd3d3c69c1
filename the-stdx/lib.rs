//! Small extensions to the standard library shared by the text crates.

pub mod locale;
pub mod seq;

pub use locale::{
  Locale,
  LocaleError,
};
pub use seq::SeqExt;
