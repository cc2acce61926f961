use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::language::LanguageTag;

/// A property value held by a [`Guess`](super::Guess).
///
/// Serializes untagged, so a guess renders as a plain JSON map:
/// strings, numbers, ISO dates, language names, and arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Free text (title, group, codec label...).
    Text(String),
    /// Numeric property (season, episode, year...).
    Integer(i64),
    /// Calendar date, for names carrying a full release date.
    Date(NaiveDate),
    /// Identified language.
    Language(LanguageTag),
    /// Accumulated values of an append property.
    List(Vec<Value>),
}

impl Value {
    /// Returns the inner text if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner integer if this is an `Integer` value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the inner list if this is a `List` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Wraps this value into a one-element list, or returns the list as-is.
    #[must_use]
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            other => vec![other],
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Language(lang) => write!(f, "{lang}"),
            Self::List(items) => {
                let formatted: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", formatted.join(", "))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<LanguageTag> for Value {
    fn from(lang: LanguageTag) -> Self {
        Self::Language(lang)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}
