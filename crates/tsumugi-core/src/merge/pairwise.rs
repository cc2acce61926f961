use tracing::{debug, warn};

use crate::guess::Guess;

use super::reconcile::Choose;

/// Merges the first two guesses in `guesses` that carry `prop`, assuming at
/// least two such guesses exist.
///
/// The reconciled value and confidence are written into the second carrier,
/// which is then absorbed into the first via a plain, non-confidence-aware
/// [`Guess::update`] and removed from the list. The reconciliation already
/// decided `prop`; the absorbed guess's remaining properties ride along.
///
/// When the two carriers share more than one property, the merge would be
/// ambiguous (no way to tell which shared property drove the
/// reconciliation), so the pair is left untouched and a warning is logged.
///
/// Returns `true` if a merge was performed.
pub fn merge_similar_guesses_nocheck(guesses: &mut Vec<Guess>, prop: &str, choose: Choose) -> bool {
    let mut carriers = guesses.iter().enumerate().filter(|(_, g)| g.contains(prop));
    let Some((i1, g1)) = carriers.next() else {
        return false;
    };
    let Some((i2, g2)) = carriers.next() else {
        return false;
    };

    if g1.shared_props(g2).len() > 1 {
        warn!(prop, "guesses to be merged share more than one property, bailing out");
        return false;
    }

    // both carry `prop`, so the lookups cannot fail
    let (Some(v1), Some(v2)) = (g1.get(prop), g2.get(prop)) else {
        return false;
    };
    let (Ok(c1), Ok(c2)) = (g1.confidence(prop), g2.confidence(prop)) else {
        return false;
    };

    let (new_value, new_confidence) = choose((v1, c1), (v2, c2));
    if new_confidence >= c1 {
        debug!(prop, confidence = new_confidence, "updating matching property");
    } else {
        debug!(prop, confidence = new_confidence, "updating non-matching property");
    }

    guesses[i2].set(prop, new_value, Some(new_confidence));

    // i1 < i2 by construction, so removing i2 leaves i1 stable
    let absorbed = guesses.remove(i2);
    guesses[i1].update(absorbed, None);
    true
}

/// Repeatedly merges guesses carrying `prop` until fewer than two remain.
///
/// N-way conflicts reconcile pairwise, left to right, each step's output
/// feeding the next. An ambiguous pair stops the pass early, leaving the
/// remaining carriers unmerged rather than risking an incorrect fusion.
pub fn merge_similar_guesses(guesses: &mut Vec<Guess>, prop: &str, choose: Choose) {
    while guesses.iter().filter(|g| g.contains(prop)).count() >= 2 {
        if !merge_similar_guesses_nocheck(guesses, prop, choose) {
            break;
        }
    }
}
