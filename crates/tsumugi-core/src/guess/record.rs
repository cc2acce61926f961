use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Result, TsumugiError};

use super::value::Value;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    prop: String,
    value: Value,
    confidence: f32,
}

/// A confidence-annotated property record.
///
/// Each property carries its own confidence; a single guess can hold
/// high- and low-confidence properties at the same time. Entries keep
/// insertion order, and the working sets are small enough that lookups
/// stay linear.
///
/// Guesses are mutated in place by the merge engines and consumed by
/// value once absorbed into another guess.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guess {
    entries: Vec<Entry>,
}

impl Guess {
    /// Creates an empty guess.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a guess holding a single property.
    #[must_use]
    pub fn single(prop: impl Into<String>, value: impl Into<Value>, confidence: f32) -> Self {
        let mut guess = Self::new();
        guess.set(prop, value, Some(confidence));
        guess
    }

    /// Creates a guess from property/value pairs, applying one uniform
    /// initial confidence to all of them.
    #[must_use]
    pub fn from_pairs<P, V>(pairs: impl IntoIterator<Item = (P, V)>, confidence: f32) -> Self
    where
        P: Into<String>,
        V: Into<Value>,
    {
        let mut guess = Self::new();
        for (prop, value) in pairs {
            guess.set(prop, value, Some(confidence));
        }
        guess
    }

    /// Returns the value for `prop`, if present.
    #[must_use]
    pub fn get(&self, prop: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.prop == prop).map(|e| &e.value)
    }

    /// Returns `true` if the guess holds `prop`.
    #[must_use]
    pub fn contains(&self, prop: &str) -> bool {
        self.entries.iter().any(|e| e.prop == prop)
    }

    /// Inserts or overwrites `prop`.
    ///
    /// An explicit confidence overwrites the recorded one; `None` leaves a
    /// prior confidence untouched, and a first insert without confidence
    /// records 0.
    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<Value>, confidence: Option<f32>) {
        let prop = prop.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.prop == prop) {
            Some(entry) => {
                entry.value = value;
                if let Some(c) = confidence {
                    entry.confidence = c;
                }
            }
            None => self.entries.push(Entry {
                prop,
                value,
                confidence: confidence.unwrap_or(0.0),
            }),
        }
    }

    /// Returns the confidence recorded for `prop`.
    ///
    /// # Errors
    ///
    /// Returns `TsumugiError::UnknownProperty` if the guess does not hold
    /// `prop`. Asking for the confidence of an absent property is a caller
    /// bug, not a recoverable condition.
    pub fn confidence(&self, prop: &str) -> Result<f32> {
        self.entries
            .iter()
            .find(|e| e.prop == prop)
            .map(|e| e.confidence)
            .ok_or_else(|| TsumugiError::UnknownProperty { prop: prop.into() })
    }

    /// Overwrites the confidence for an existing `prop`; no-op when absent.
    pub fn set_confidence(&mut self, prop: &str, confidence: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.prop == prop) {
            entry.confidence = confidence;
        }
    }

    /// Removes `prop`, returning its value and confidence.
    pub fn remove(&mut self, prop: &str) -> Option<(Value, f32)> {
        let idx = self.entries.iter().position(|e| e.prop == prop)?;
        let entry = self.entries.remove(idx);
        Some((entry.value, entry.confidence))
    }

    /// Number of properties held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the guess holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Property names, in insertion order.
    pub fn props(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.prop.as_str())
    }

    /// `(prop, value, confidence)` triples, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value, f32)> {
        self.entries
            .iter()
            .map(|e| (e.prop.as_str(), &e.value, e.confidence))
    }

    /// Property names present in both guesses.
    #[must_use]
    pub fn shared_props(&self, other: &Guess) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| other.contains(&e.prop))
            .map(|e| e.prop.clone())
            .collect()
    }

    /// Copies all properties of `other` into this guess, consuming it.
    ///
    /// Per-key confidences come from `other`; an explicit `confidence`
    /// argument overrides them with one uniform value for every copied key.
    pub fn update(&mut self, other: Guess, confidence: Option<f32>) {
        for entry in other.entries {
            let c = confidence.unwrap_or(entry.confidence);
            self.set(entry.prop, entry.value, Some(c));
        }
    }

    /// Copies properties of `other` into this guess, consuming it, keeping
    /// for each property whichever side has the higher confidence.
    ///
    /// Ties favor the pre-existing value, which keeps repeated folds
    /// deterministic.
    pub fn update_highest_confidence(&mut self, other: Guess) {
        for entry in other.entries {
            if let Ok(existing) = self.confidence(&entry.prop) {
                if existing >= entry.confidence {
                    continue;
                }
            }
            self.set(entry.prop, entry.value, Some(entry.confidence));
        }
    }
}

impl Serialize for Guess {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.prop, &entry.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    #[test]
    fn set_and_get_roundtrip() {
        let mut guess = Guess::new();
        guess.set(props::SEASON, 2, Some(0.6));

        assert_eq!(guess.get(props::SEASON), Some(&Value::Integer(2)));
        assert_eq!(guess.confidence(props::SEASON).unwrap(), 0.6);
        assert!(guess.get(props::EPISODE).is_none());
    }

    #[test]
    fn first_insert_without_confidence_defaults_to_zero() {
        let mut guess = Guess::new();
        guess.set(props::TITLE, "Alien", None);
        assert_eq!(guess.confidence(props::TITLE).unwrap(), 0.0);
    }

    #[test]
    fn set_without_confidence_keeps_prior() {
        let mut guess = Guess::new();
        guess.set(props::SEASON, 2, Some(0.6));
        guess.set(props::SEASON, 3, None);

        assert_eq!(guess.get(props::SEASON), Some(&Value::Integer(3)));
        assert_eq!(guess.confidence(props::SEASON).unwrap(), 0.6);
    }

    #[test]
    fn confidence_of_absent_prop_is_an_error() {
        let guess = Guess::new();
        assert!(matches!(
            guess.confidence(props::SEASON),
            Err(TsumugiError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn from_pairs_applies_uniform_confidence() {
        let guess = Guess::from_pairs(
            [(props::SEASON, Value::Integer(2)), (props::EPISODE, Value::Integer(13))],
            0.8,
        );
        assert_eq!(guess.confidence(props::SEASON).unwrap(), 0.8);
        assert_eq!(guess.confidence(props::EPISODE).unwrap(), 0.8);
    }

    #[test]
    fn update_takes_source_confidences() {
        let mut g1 = Guess::single(props::SEASON, 1, 0.3);
        let g2 = Guess::single(props::EPISODE, 13, 0.9);

        g1.update(g2, None);
        assert_eq!(g1.confidence(props::EPISODE).unwrap(), 0.9);
        assert_eq!(g1.confidence(props::SEASON).unwrap(), 0.3);
    }

    #[test]
    fn update_explicit_confidence_wins_over_source() {
        let mut g1 = Guess::new();
        let g2 = Guess::from_pairs([(props::SEASON, 2), (props::EPISODE, 13)], 0.9);

        g1.update(g2, Some(0.4));
        assert_eq!(g1.confidence(props::SEASON).unwrap(), 0.4);
        assert_eq!(g1.confidence(props::EPISODE).unwrap(), 0.4);
    }

    #[test]
    fn update_highest_confidence_adopts_stronger_evidence() {
        let mut g1 = Guess::single(props::SEASON, 1, 0.3);
        let g2 = Guess::single(props::SEASON, 2, 0.8);

        g1.update_highest_confidence(g2);
        assert_eq!(g1.get(props::SEASON), Some(&Value::Integer(2)));
        assert_eq!(g1.confidence(props::SEASON).unwrap(), 0.8);
    }

    #[test]
    fn update_highest_confidence_tie_keeps_existing() {
        let mut g1 = Guess::single(props::SEASON, 1, 0.5);
        let g2 = Guess::single(props::SEASON, 2, 0.5);

        g1.update_highest_confidence(g2);
        assert_eq!(g1.get(props::SEASON), Some(&Value::Integer(1)));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut guess = Guess::new();
        guess.set(props::TITLE, "One Piece", Some(0.7));
        guess.set(props::EPISODE, 1084, Some(0.9));
        guess.set(props::RESOLUTION, "1080p", Some(1.0));

        let order: Vec<&str> = guess.props().collect();
        assert_eq!(order, vec![props::TITLE, props::EPISODE, props::RESOLUTION]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut guess = Guess::new();
        guess.set(props::SEASON, 2, Some(0.6));
        guess.set(props::TITLE, "Alien", Some(0.8));

        let json = serde_json::to_string(&guess).unwrap();
        assert_eq!(json, "{\"season\":2,\"title\":\"Alien\"}");
    }
}
