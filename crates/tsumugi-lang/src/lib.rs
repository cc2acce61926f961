//! # Tsumugi Lang
//!
//! Compact language name/code registry backing the engine's
//! `resolve(name) -> language | not found` seam. Knows ISO-639
//! two- and three-letter codes, English names, release-scene synonyms
//! (e.g. "pob" for Brazilian Portuguese), and a stoplist of words far too
//! common to ever mean a language inside a release name.

mod tables;

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;
use tsumugi_core::guess::{LanguageResolver, LanguageTag};

use tables::{COMMON_WORDS, LANGUAGES, SYNONYMS};

/// Errors from strict language parsing.
#[derive(Debug, Error)]
pub enum LangError {
    /// The given string could not be identified as a language.
    #[error("could not identify {input:?} as a language")]
    Unrecognized {
        /// The string that failed to parse.
        input: String,
    },
}

#[derive(Clone, Copy)]
struct LangEntry {
    alpha3: &'static str,
    name: &'static str,
    country: Option<&'static str>,
}

/// Name/code lookup over the static tables.
///
/// `resolve` is deliberately conservative: stoplisted words never match,
/// whatever else they might spell.
pub struct LanguageRegistry {
    lookup: HashMap<String, LangEntry>,
    stoplist: HashSet<&'static str>,
}

impl LanguageRegistry {
    /// Builds the registry from the static tables.
    #[must_use]
    pub fn new() -> Self {
        let mut lookup = HashMap::new();

        for &(alpha3, alpha2, name) in LANGUAGES {
            let entry = LangEntry {
                alpha3,
                name,
                country: None,
            };
            lookup.insert(alpha3.to_string(), entry);
            if !alpha2.is_empty() {
                lookup.insert(alpha2.to_string(), entry);
            }
            lookup.insert(name.to_lowercase(), entry);
        }

        for &(spelling, alpha3, country) in SYNONYMS {
            if let Some(canonical) = LANGUAGES.iter().find(|(a3, _, _)| *a3 == alpha3) {
                lookup.insert(
                    spelling.to_string(),
                    LangEntry {
                        alpha3,
                        name: canonical.2,
                        country,
                    },
                );
            }
        }

        Self {
            lookup,
            stoplist: COMMON_WORDS.iter().copied().collect(),
        }
    }

    /// Strictly parses a language spelling, including country-qualified
    /// forms ("pt(br)", "pt-br").
    ///
    /// # Errors
    ///
    /// Returns `LangError::Unrecognized` when the spelling names no known
    /// language. Unlike [`resolve`](LanguageResolver::resolve), the
    /// stoplist does not apply here: the caller asked for a language
    /// explicitly.
    pub fn parse(&self, input: &str) -> Result<LanguageTag, LangError> {
        let lowered = input.trim().to_lowercase();

        let (base, country) = match split_country(&lowered) {
            Some((base, country)) => (base.trim_end(), Some(country.trim())),
            None => (lowered.as_str(), None),
        };

        let entry = self
            .lookup
            .get(base)
            .ok_or_else(|| LangError::Unrecognized {
                input: input.to_string(),
            })?;

        let mut tag = LanguageTag::new(entry.alpha3, entry.name);
        if let Some(country) = country.or(entry.country) {
            tag = tag.with_country(country);
        }
        Ok(tag)
    }
}

/// Splits "pt(br)" / "pt-br" spellings into base and country parts.
fn split_country(spelling: &str) -> Option<(&str, &str)> {
    if let Some(open) = spelling.find('(') {
        let close = spelling.rfind(')')?;
        if close > open + 1 {
            return Some((&spelling[..open], &spelling[open + 1..close]));
        }
        return None;
    }
    let dash = spelling.find('-')?;
    Some((&spelling[..dash], &spelling[dash + 1..]))
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageResolver for LanguageRegistry {
    fn resolve(&self, word: &str) -> Option<LanguageTag> {
        let lowered = word.trim().to_lowercase();
        if self.stoplist.contains(lowered.as_str()) {
            debug!(word, "stoplisted, not a language");
            return None;
        }

        let entry = self.lookup.get(lowered.as_str())?;
        let mut tag = LanguageTag::new(entry.alpha3, entry.name);
        if let Some(country) = entry.country {
            tag = tag.with_country(country);
        }
        Some(tag)
    }
}
