//! # Tsumugi
//!
//! Extracts structured metadata from media filenames and release names,
//! merging confidence-weighted guesses into a single coherent record.
//!
//! This facade wires the core engine to the bundled language registry.
//! Use [`tsumugi_core`] directly for a custom language resolver or none
//! at all.
//!
//! ```rust
//! use tsumugi::{guess, props, Value};
//!
//! let merged = guess("[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv").unwrap();
//! assert_eq!(merged.get(props::TITLE), Some(&Value::from("Jujutsu Kaisen")));
//! ```

pub use tsumugi_core::{
    props, Engine, EngineConfig, Guess, LanguageResolver, LanguageTag, Result, TsumugiError, Value,
};
pub use tsumugi_lang::{LangError, LanguageRegistry};

/// Creates an engine with the default configuration and the bundled
/// language registry attached.
///
/// # Errors
///
/// Returns `TsumugiError::RegexError` if the matcher patterns fail to
/// compile (cannot happen with the static patterns).
pub fn engine() -> Result<Engine> {
    Ok(Engine::with_defaults()?.with_language_resolver(Box::new(LanguageRegistry::new())))
}

/// Guesses all metadata for a single name, language detection included.
///
/// # Errors
///
/// Returns `TsumugiError::EmptyInput` for empty or whitespace-only input.
pub fn guess(input: &str) -> Result<Guess> {
    engine()?.guess(input)
}
