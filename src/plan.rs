//! Word-game penalty picker for the date plan.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw one penalty uniformly at random. `None` when the list is empty.
pub fn pick_penalty<'a, R: Rng + ?Sized>(penalties: &'a [String], rng: &mut R) -> Option<&'a str> {
    penalties.choose(rng).map(String::as_str)
}
