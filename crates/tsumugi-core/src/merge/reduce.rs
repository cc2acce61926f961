use tracing::warn;

use crate::guess::{Guess, Value};

/// Properties whose final confidence falls strictly below this floor are
/// treated as noise and dropped from the reduced result.
pub const CONFIDENCE_FLOOR: f32 = 0.05;

/// Folds a whole guess list into a single result.
///
/// Append properties accumulate first (carrying the incoming confidence),
/// then everything else merges highest-confidence-wins. A property present
/// on both sides with differing values at that point signals a conflict
/// that slipped through the per-property merge passes; it is resolved by
/// confidence and logged. Finally, properties below [`CONFIDENCE_FLOOR`]
/// are pruned and append lists are de-duplicated.
///
/// ```
/// use tsumugi_core::guess::Guess;
/// use tsumugi_core::merge::merge_all;
/// use tsumugi_core::props;
///
/// let merged = merge_all(
///     vec![
///         Guess::single(props::SEASON, 2, 0.6),
///         Guess::single(props::EPISODE, 13, 0.8),
///     ],
///     &[],
/// );
/// assert_eq!(merged.len(), 2);
/// ```
#[must_use]
pub fn merge_all(guesses: Vec<Guess>, append: &[&str]) -> Guess {
    let mut iter = guesses.into_iter();
    let Some(mut result) = iter.next() else {
        return Guess::new();
    };

    for mut guess in iter {
        // append pass first, so those props are out of the way
        for &prop in append {
            if let Some((value, confidence)) = guess.remove(prop) {
                let mut items = result
                    .get(prop)
                    .cloned()
                    .map(Value::into_list)
                    .unwrap_or_default();
                // a donor that already accumulated a list contributes its
                // elements, not a nested list
                items.extend(value.into_list());
                result.set(prop, Value::List(items), Some(confidence));
            }
        }

        let conflicting: Vec<String> = guess
            .shared_props(&result)
            .into_iter()
            .filter(|prop| result.get(prop) != guess.get(prop))
            .collect();
        if !conflicting.is_empty() {
            warn!(props = ?conflicting, "conflicting properties in merged result");
        }

        result.update_highest_confidence(guess);
    }

    let noise: Vec<String> = result
        .iter()
        .filter(|(_, _, confidence)| *confidence < CONFIDENCE_FLOOR)
        .map(|(prop, _, _)| prop.to_string())
        .collect();
    for prop in noise {
        result.remove(&prop);
    }

    for &prop in append {
        if let Some(Value::List(items)) = result.get(prop) {
            let mut distinct: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                if !distinct.contains(item) {
                    distinct.push(item.clone());
                }
            }
            result.set(prop, Value::List(distinct), None);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::LanguageTag;
    use crate::props;

    fn lang(alpha3: &str, name: &str) -> Value {
        Value::Language(LanguageTag::new(alpha3, name))
    }

    #[test]
    fn empty_input_yields_empty_guess() {
        let merged = merge_all(vec![], &[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn disjoint_props_need_no_reconciliation() {
        let merged = merge_all(
            vec![
                Guess::single(props::SEASON, 2, 0.6),
                Guess::single(props::EPISODE, 13, 0.8),
            ],
            &[],
        );

        assert_eq!(merged.get(props::SEASON), Some(&Value::Integer(2)));
        assert_eq!(merged.get(props::EPISODE), Some(&Value::Integer(13)));
    }

    #[test]
    fn unlikely_values_are_pruned() {
        let merged = merge_all(
            vec![
                Guess::single(props::EPISODE, 27, 0.02),
                Guess::single(props::SEASON, 1, 0.2),
            ],
            &[],
        );

        assert!(!merged.contains(props::EPISODE));
        assert_eq!(merged.get(props::SEASON), Some(&Value::Integer(1)));
    }

    #[test]
    fn conflicting_scalar_resolved_by_highest_confidence() {
        let merged = merge_all(
            vec![
                Guess::single(props::SEASON, 1, 0.3),
                Guess::single(props::SEASON, 2, 0.8),
            ],
            &[],
        );

        assert_eq!(merged.get(props::SEASON), Some(&Value::Integer(2)));
        assert_eq!(merged.confidence(props::SEASON).unwrap(), 0.8);
    }

    #[test]
    fn append_props_accumulate_and_deduplicate() {
        let merged = merge_all(
            vec![
                Guess::single(props::LANGUAGE, lang("fra", "French"), 0.8),
                Guess::single(props::LANGUAGE, lang("eng", "English"), 0.9),
                Guess::single(props::LANGUAGE, lang("fra", "French"), 0.5),
            ],
            &[props::LANGUAGE],
        );

        assert_eq!(
            merged.get(props::LANGUAGE),
            Some(&Value::List(vec![
                lang("fra", "French"),
                lang("eng", "English"),
            ]))
        );
    }

    #[test]
    fn append_pass_keeps_other_distinct_props() {
        let mut second = Guess::single(props::LANGUAGE, lang("eng", "English"), 0.9);
        second.set(props::SEASON, 3, Some(0.7));

        let merged = merge_all(
            vec![Guess::single(props::LANGUAGE, lang("fra", "French"), 0.8), second],
            &[props::LANGUAGE],
        );

        assert_eq!(merged.get(props::SEASON), Some(&Value::Integer(3)));
        assert_eq!(
            merged.get(props::LANGUAGE),
            Some(&Value::List(vec![lang("fra", "French"), lang("eng", "English")]))
        );
    }

    #[test]
    fn reduction_is_idempotent_on_reduced_input() {
        let reduced = merge_all(
            vec![
                Guess::single(props::SEASON, 2, 0.6),
                Guess::single(props::EPISODE, 13, 0.8),
            ],
            &[],
        );

        let again = merge_all(vec![reduced.clone()], &[]);
        assert_eq!(again, reduced);
    }

    #[test]
    fn country_variants_collapse_during_dedup() {
        let merged = merge_all(
            vec![
                Guess::single(props::LANGUAGE, lang("por", "Portuguese"), 0.8),
                Guess::single(
                    props::LANGUAGE,
                    Value::Language(LanguageTag::new("por", "Portuguese").with_country("br")),
                    0.9,
                ),
            ],
            &[props::LANGUAGE],
        );

        let Some(Value::List(items)) = merged.get(props::LANGUAGE) else {
            panic!("language should be a list");
        };
        assert_eq!(items.len(), 1);
    }
}
