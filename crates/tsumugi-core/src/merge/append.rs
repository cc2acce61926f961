use tracing::warn;

use crate::guess::{Guess, Value};

/// Accumulates every observed value of an append property into a list.
///
/// The first guess carrying `prop` becomes the accumulator: its value is
/// promoted to a one-element list, and each later carrier appends its value.
/// Any other property on a consumed carrier is copied into the accumulator
/// last-writer-wins; a collision there is unexpected (it means two distinct
/// pattern matches claimed the same scalar property) and is logged, not
/// fatal. Consumed carriers are removed from the list.
pub fn merge_append_guesses(guesses: &mut Vec<Guess>, prop: &str) {
    let Some(acc_idx) = guesses.iter().position(|g| g.contains(prop)) else {
        return;
    };

    // pull every later carrier out of the working list, keeping order
    let mut consumed = Vec::new();
    let mut i = acc_idx + 1;
    while i < guesses.len() {
        if guesses[i].contains(prop) {
            consumed.push(guesses.remove(i));
        } else {
            i += 1;
        }
    }

    let acc = &mut guesses[acc_idx];
    let seed = acc.get(prop).cloned().expect("accumulator holds prop");
    acc.set(prop, Value::List(seed.into_list()), None);

    for guess in consumed {
        for (p2, value, confidence) in
            guess.iter().map(|(p, v, c)| (p.to_string(), v.clone(), c))
        {
            if p2 == prop {
                let mut items = acc
                    .get(prop)
                    .cloned()
                    .map(Value::into_list)
                    .unwrap_or_default();
                items.push(value);
                acc.set(prop, Value::List(items), None);
            } else {
                if acc.contains(&p2) {
                    warn!(prop = %p2, "overwriting property while appending");
                }
                acc.set(p2, value, Some(confidence));
            }
        }
    }
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
    fn no_carrier_is_a_noop() {
        let mut guesses = vec![Guess::single(props::SEASON, 2, 0.6)];
        let before = guesses.clone();

        merge_append_guesses(&mut guesses, props::LANGUAGE);
        assert_eq!(guesses, before);
    }

    #[test]
    fn single_carrier_promotes_scalar_to_list() {
        let mut guesses = vec![Guess::single(props::LANGUAGE, lang("fra", "French"), 0.8)];

        merge_append_guesses(&mut guesses, props::LANGUAGE);

        assert_eq!(
            guesses[0].get(props::LANGUAGE),
            Some(&Value::List(vec![lang("fra", "French")]))
        );
        assert_eq!(guesses[0].confidence(props::LANGUAGE).unwrap(), 0.8);
    }

    #[test]
    fn carriers_accumulate_in_observation_order() {
        let mut guesses = vec![
            Guess::single(props::LANGUAGE, lang("fra", "French"), 0.8),
            Guess::single(props::SEASON, 2, 0.6),
            Guess::single(props::LANGUAGE, lang("eng", "English"), 0.9),
            Guess::single(props::LANGUAGE, lang("jpn", "Japanese"), 0.3),
        ];

        merge_append_guesses(&mut guesses, props::LANGUAGE);

        assert_eq!(guesses.len(), 2);
        assert_eq!(
            guesses[0].get(props::LANGUAGE),
            Some(&Value::List(vec![
                lang("fra", "French"),
                lang("eng", "English"),
                lang("jpn", "Japanese"),
            ]))
        );
        // the non-carrier guess survives untouched
        assert!(guesses[1].contains(props::SEASON));
    }

    #[test]
    fn other_props_of_consumed_carriers_ride_along() {
        let mut second = Guess::single(props::LANGUAGE, lang("eng", "English"), 0.9);
        second.set(props::GROUP, "SubsPlease", Some(0.7));

        let mut guesses = vec![
            Guess::single(props::LANGUAGE, lang("fra", "French"), 0.8),
            second,
        ];

        merge_append_guesses(&mut guesses, props::LANGUAGE);

        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].get(props::GROUP), Some(&Value::from("SubsPlease")));
        assert_eq!(guesses[0].confidence(props::GROUP).unwrap(), 0.7);
    }

    #[test]
    fn collision_keeps_most_recent_value() {
        let mut first = Guess::single(props::LANGUAGE, lang("fra", "French"), 0.8);
        first.set(props::GROUP, "Erai-raws", Some(0.6));

        let mut second = Guess::single(props::LANGUAGE, lang("eng", "English"), 0.9);
        second.set(props::GROUP, "SubsPlease", Some(0.4));

        let mut guesses = vec![first, second];
        merge_append_guesses(&mut guesses, props::LANGUAGE);

        assert_eq!(guesses[0].get(props::GROUP), Some(&Value::from("SubsPlease")));
    }
}
