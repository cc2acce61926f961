//! The confidence-annotated property record and its value types.

pub mod language;
pub mod record;
pub mod value;

pub use language::{LanguageResolver, LanguageTag};
pub use record::Guess;
pub use value::Value;
