//! Top-level guessing engine.
//!
//! Wires the pattern matcher to the merge pipeline: per-property scalar
//! reconciliation, append accumulation, then the final reduction into one
//! [`Guess`].

use tracing::debug;

use crate::error::Result;
use crate::guess::{Guess, LanguageResolver};
use crate::matcher::Matcher;
use crate::merge::{choose_int, choose_string, merge_all, merge_append_guesses, merge_similar_guesses};
use crate::props;

/// Configuration for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Properties accumulated into lists instead of reconciled.
    pub append_props: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            append_props: props::APPEND_PROPS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the default append schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of append properties.
    #[must_use]
    pub fn with_append_props(mut self, append_props: Vec<String>) -> Self {
        self.append_props = append_props;
        self
    }
}

/// The guessing engine: matcher + merge pipeline.
pub struct Engine {
    config: EngineConfig,
    matcher: Matcher,
}

impl Engine {
    /// Creates an engine with the given configuration and no language
    /// resolver.
    ///
    /// # Errors
    ///
    /// Returns `TsumugiError::RegexError` if the matcher patterns fail to
    /// compile (cannot happen with the static patterns).
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            config,
            matcher: Matcher::new()?,
        })
    }

    /// Creates an engine with default configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    /// Attaches a language resolver, enabling language guesses.
    #[must_use]
    pub fn with_language_resolver(mut self, resolver: Box<dyn LanguageResolver>) -> Self {
        self.matcher = self.matcher.with_language_resolver(resolver);
        self
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extracts and merges all metadata for a filename or release name.
    ///
    /// # Errors
    ///
    /// Returns `TsumugiError::EmptyInput` for empty or whitespace-only
    /// input.
    pub fn guess(&self, input: &str) -> Result<Guess> {
        let mut guesses = self.matcher.guesses(input)?;
        debug!(count = guesses.len(), "raw guesses matched");

        for &prop in props::NUMERIC_PROPS {
            merge_similar_guesses(&mut guesses, prop, choose_int);
        }
        for &prop in props::TEXT_PROPS {
            merge_similar_guesses(&mut guesses, prop, choose_string);
        }
        for prop in &self.config.append_props {
            merge_append_guesses(&mut guesses, prop);
        }

        let append: Vec<&str> = self.config.append_props.iter().map(String::as_str).collect();
        Ok(merge_all(guesses, &append))
    }
}

/// Convenience function: guesses a single name with the default engine
/// (no language resolver).
///
/// # Errors
///
/// Same as [`Engine::guess`].
pub fn guess(input: &str) -> Result<Guess> {
    Engine::with_defaults()?.guess(input)
}
