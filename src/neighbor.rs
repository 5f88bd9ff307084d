//! Single-substitution neighborhood.
//!
//! A neighbor of a candidate is the same string with one position replaced
//! by a symbol drawn uniformly from the alphabet. The replacement is drawn
//! independently of the original symbol, so a neighbor may coincide with
//! its source.

use crate::alphabet::Alphabet;
use crate::memo::RecentSet;
use rand::Rng;

/// Default number of remembered neighbors.
pub const DEFAULT_MEMO_CAPACITY: usize = 10_000;

/// Default number of regeneration attempts on a memo hit.
pub const DEFAULT_MAX_RETRIES: usize = 16;

/// Produces a neighbor of a candidate.
///
/// The generator may keep state across calls (for example a memo of what
/// it already produced), hence `&mut self`. Randomness comes from the
/// engine's RNG so runs stay reproducible.
pub trait NeighborGenerator {
    /// Returns a candidate of the same length as `candidate` that differs
    /// from it in at most one position.
    fn neighbor<R: Rng>(&mut self, candidate: &str, rng: &mut R) -> String;
}

/// Replaces one uniformly chosen position of `candidate` with a uniformly
/// drawn alphabet symbol.
///
/// An empty candidate is returned unchanged.
pub fn substitute_one<R: Rng>(candidate: &str, alphabet: &Alphabet, rng: &mut R) -> String {
    let mut chars: Vec<char> = candidate.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let index = rng.random_range(0..chars.len());
    chars[index] = alphabet.sample(rng);
    chars.into_iter().collect()
}

/// Single-substitution neighbor generator with a bounded memo.
///
/// Every returned neighbor is remembered. When a freshly drawn neighbor is
/// already in the memo, another one is drawn from the same source, up to
/// `max_retries` times; the last draw is returned even if it is still a
/// repeat, so the memo reduces repetition without forbidding it.
///
/// # Examples
///
/// ```
/// use u_stringsearch::neighbor::{NeighborGenerator, SubstitutionNeighbor};
/// use u_stringsearch::{create_rng, Alphabet};
///
/// let mut generator = SubstitutionNeighbor::new(Alphabet::lowercase()).with_memo_capacity(100);
/// let mut rng = create_rng(1);
/// let n = generator.neighbor("hello", &mut rng);
/// assert_eq!(n.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SubstitutionNeighbor {
    alphabet: Alphabet,
    memo: RecentSet,
    max_retries: usize,
}

impl Default for SubstitutionNeighbor {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl SubstitutionNeighbor {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            memo: RecentSet::new(DEFAULT_MEMO_CAPACITY),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets how many neighbors are remembered. 0 disables the memo.
    ///
    /// Clears anything remembered so far.
    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo = RecentSet::new(capacity);
        self
    }

    /// Sets the number of redraws allowed on a memo hit.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Neighbors produced so far, oldest first, bounded by the memo capacity.
    pub fn memo(&self) -> &RecentSet {
        &self.memo
    }
}

impl NeighborGenerator for SubstitutionNeighbor {
    fn neighbor<R: Rng>(&mut self, candidate: &str, rng: &mut R) -> String {
        let mut produced = substitute_one(candidate, &self.alphabet, rng);
        let mut retries = 0;
        while retries < self.max_retries && self.memo.contains(&produced) {
            produced = substitute_one(candidate, &self.alphabet, rng);
            retries += 1;
        }
        self.memo.insert(produced.clone());
        produced
    }
}
