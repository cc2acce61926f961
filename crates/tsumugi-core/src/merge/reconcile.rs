use crate::guess::Value;

/// Combines two independent confidences as a probabilistic OR.
///
/// The result is always `>= max(c1, c2)`: two agreeing observations are
/// stronger evidence than either alone.
#[must_use]
pub fn combined_probability(c1: f32, c2: f32) -> f32 {
    1.0 - (1.0 - c1) * (1.0 - c2)
}

/// A reconciliation strategy: combines two `(value, confidence)` operands
/// for the same property into one.
pub type Choose = fn((&Value, f32), (&Value, f32)) -> (Value, f32);

/// Numeric reconciliation.
///
/// Equal values reinforce each other via [`combined_probability`];
/// conflicting values are decided by confidence, the winner discounted by
/// the strength of the contradicting evidence. On an exact confidence tie
/// the second operand wins with confidence 0. That tie-break is documented,
/// pinned behavior: changing it reorders results under repeated folds.
#[must_use]
pub fn choose_int((v1, c1): (&Value, f32), (v2, c2): (&Value, f32)) -> (Value, f32) {
    if v1 == v2 {
        (v1.clone(), combined_probability(c1, c2))
    } else if c1 > c2 {
        (v1.clone(), c1 - c2)
    } else {
        (v2.clone(), c2 - c1)
    }
}

/// String reconciliation.
///
/// Comparison happens on trimmed, lowercased copies; the returned value
/// keeps the winner's original casing. Beyond exact equality, two
/// similarity rules fire before declaring a conflict: a "the "-prefixed
/// variant beats its bare form, and a substring match resolves to the
/// shorter (assumed canonical) string. Non-text operands degrade to the
/// equality/confidence path.
#[must_use]
pub fn choose_string((v1, c1): (&Value, f32), (v2, c2): (&Value, f32)) -> (Value, f32) {
    let (Some(s1), Some(s2)) = (v1.as_text(), v2.as_text()) else {
        return choose_int((v1, c1), (v2, c2));
    };

    let s1 = s1.trim();
    let s2 = s2.trim();
    let l1 = s1.to_lowercase();
    let l2 = s2.to_lowercase();

    let combined = combined_probability(c1, c2);

    if l1 == l2 {
        (Value::from(s1), combined)
    } else if l1 == format!("the {l2}") {
        (Value::from(s1), combined)
    } else if l2 == format!("the {l1}") {
        (Value::from(s2), combined)
    } else if l1.contains(&l2) {
        (Value::from(s2), combined)
    } else if l2.contains(&l1) {
        (Value::from(s1), combined)
    } else if c1 > c2 {
        (Value::from(s1), c1 - c2)
    } else {
        (Value::from(s2), c2 - c1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn combined_probability_exceeds_both_operands() {
        for (c1, c2) in [(0.5, 0.5), (0.2, 0.9), (0.0, 0.7)] {
            let combined = combined_probability(c1, c2);
            assert!(combined >= c1.max(c2), "{combined} < max({c1}, {c2})");
        }
        assert!((combined_probability(0.5, 0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn equal_ints_reinforce() {
        let (value, confidence) = choose_int((&int(13), 0.6), (&int(13), 0.5));
        assert_eq!(value, int(13));
        assert!((confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn conflicting_ints_decided_by_confidence() {
        let (value, confidence) = choose_int((&int(13), 0.8), (&int(27), 0.3));
        assert_eq!(value, int(13));
        assert!((confidence - 0.5).abs() < 1e-6);

        let (value, confidence) = choose_int((&int(13), 0.3), (&int(27), 0.8));
        assert_eq!(value, int(27));
        assert!((confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn int_tie_favors_second_operand() {
        let (value, confidence) = choose_int((&int(1), 0.5), (&int(2), 0.5));
        assert_eq!(value, int(2));
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn equal_strings_reinforce_case_insensitively() {
        let (value, confidence) = choose_string((&text("Alien"), 0.5), (&text("alien "), 0.5));
        assert_eq!(value, text("Alien"));
        assert!((confidence - 0.75).abs() < 1e-6);
    }

    #[test]
    fn the_prefix_beats_bare_form() {
        let (value, confidence) = choose_string((&text("The Matrix"), 0.5), (&text("Matrix"), 0.5));
        assert_eq!(value, text("The Matrix"));
        assert!((confidence - 0.75).abs() < 1e-6);

        // symmetric: prefixed variant on the other side
        let (value, _) = choose_string((&text("Matrix"), 0.5), (&text("The Matrix"), 0.5));
        assert_eq!(value, text("The Matrix"));
    }

    #[test]
    fn substring_resolves_to_shorter() {
        let (value, confidence) = choose_string((&text("Alien"), 0.6), (&text("Aliens"), 0.4));
        assert_eq!(value, text("Alien"));
        assert!((confidence - 0.76).abs() < 1e-6);

        let (value, _) = choose_string((&text("Aliens"), 0.4), (&text("Alien"), 0.6));
        assert_eq!(value, text("Alien"));
    }

    #[test]
    fn conflicting_strings_decided_by_confidence() {
        let (value, confidence) = choose_string((&text("Dune"), 0.7), (&text("Tron"), 0.2));
        assert_eq!(value, text("Dune"));
        assert!((confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn string_tie_favors_second_operand() {
        let (value, confidence) = choose_string((&text("Dune"), 0.5), (&text("Tron"), 0.5));
        assert_eq!(value, text("Tron"));
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn non_text_operands_degrade_to_equality_path() {
        let (value, confidence) = choose_string((&int(3), 0.4), (&int(3), 0.4));
        assert_eq!(value, int(3));
        assert!((confidence - 0.64).abs() < 1e-6);
    }
}
