//! # Tsumugi Core
//!
//! The heart of the Tsumugi metadata engine. Extracts structured metadata
//! (title, numbering, codecs, languages...) from media release names and
//! weaves possibly-contradictory, confidence-tagged guesses into a single
//! coherent record.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsumugi_core::engine::guess;
//! use tsumugi_core::guess::Value;
//! use tsumugi_core::props;
//!
//! let merged = guess("[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv").unwrap();
//!
//! assert_eq!(merged.get(props::TITLE), Some(&Value::from("Jujutsu Kaisen")));
//! assert_eq!(merged.get(props::EPISODE), Some(&Value::Integer(24)));
//! ```
pub mod engine;
pub mod error;
pub mod guess;
pub mod matcher;
pub mod merge;
pub mod props;

// Re-export primary API
pub use engine::{guess, Engine, EngineConfig};
pub use error::{Result, TsumugiError};
pub use guess::{Guess, LanguageResolver, LanguageTag, Value};
pub use matcher::Matcher;
pub use merge::{
    choose_int, choose_string, combined_probability, merge_all, merge_append_guesses,
    merge_similar_guesses, CONFIDENCE_FLOOR,
};
