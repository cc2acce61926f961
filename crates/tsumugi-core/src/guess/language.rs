use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// An identified human language, optionally qualified by a country
/// (e.g. Brazilian Portuguese).
///
/// Two tags compare equal when their ISO-639 codes match, regardless of
/// country, so accumulated language lists collapse country variants of the
/// same language during de-duplication.
#[derive(Debug, Clone)]
pub struct LanguageTag {
    alpha3: String,
    name: String,
    country: Option<String>,
}

impl LanguageTag {
    /// Creates a tag from an ISO-639-2 code and its English name.
    #[must_use]
    pub fn new(alpha3: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alpha3: alpha3.into(),
            name: name.into(),
            country: None,
        }
    }

    /// Qualifies the tag with an ISO-3166 alpha-2 country code.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into().to_lowercase());
        self
    }

    /// The ISO-639-2 three-letter code.
    #[must_use]
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// The English name of the language.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The country qualifier, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}({})", self.name, country),
            None => write!(f, "{}", self.name),
        }
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.alpha3 == other.alpha3
    }
}

impl Eq for LanguageTag {}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alpha3.hash(state);
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Name-to-language lookup seam.
///
/// The matcher offers every candidate word to a resolver; a `Some` return
/// means the word names a language. Implementations decide which spellings
/// resolve (codes, English names, scene synonyms) and which words are too
/// common to ever count as a language.
pub trait LanguageResolver: Send + Sync {
    /// Resolves a single word to a language, or `None` if it is not one.
    fn resolve(&self, word: &str) -> Option<LanguageTag>;
}
