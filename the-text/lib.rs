pub mod case_convention;
pub mod chars;
pub mod codec;
pub mod config;
pub mod ext;
pub mod grapheme;
pub mod line_ending;
pub mod parse;
pub mod path;
pub mod query;
pub mod random;
pub mod slice;
pub mod validate;

pub use config::TextConfig;
pub use ext::{
  TextExt,
  TextMutExt,
};
pub use the_stdx::Locale;
