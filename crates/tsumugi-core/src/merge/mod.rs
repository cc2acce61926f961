//! Confidence-weighted merge and conflict-resolution engines.
//!
//! The pipeline reduces a list of independently-produced, possibly
//! contradictory guesses into one coherent record: per-property scalar
//! reconciliation ([`merge_similar_guesses`]), list accumulation for append
//! properties ([`merge_append_guesses`]), then the final fold
//! ([`merge_all`]).

pub mod append;
pub mod pairwise;
pub mod reconcile;
pub mod reduce;

pub use append::merge_append_guesses;
pub use pairwise::{merge_similar_guesses, merge_similar_guesses_nocheck};
pub use reconcile::{choose_int, choose_string, combined_probability, Choose};
pub use reduce::{merge_all, CONFIDENCE_FLOOR};
