//! Cost functions.
//!
//! A [`ScoreFunction`] maps a (target, candidate) pair to a non-negative
//! integer cost; zero means the candidate is a perfect match. All three
//! engines minimize it.

/// Computes the cost of a candidate with respect to a target.
///
/// Implementations must be pure: the same inputs always give the same cost.
/// Any `Fn(&str, &str) -> usize` is a score function, which makes it easy
/// to inject deterministic fakes in tests.
///
/// # Examples
///
/// ```
/// use u_stringsearch::score::{Levenshtein, ScoreFunction};
///
/// assert_eq!(Levenshtein.score("cat", "CAT"), 0);
/// assert_eq!(Levenshtein.score("kitten", "sitting"), 3);
///
/// let hamming = |t: &str, c: &str| t.chars().zip(c.chars()).filter(|(a, b)| a != b).count();
/// assert_eq!(hamming.score("cat", "cut"), 1);
/// ```
pub trait ScoreFunction {
    /// Cost of `candidate` against `target`. Lower is better.
    fn score(&self, target: &str, candidate: &str) -> usize;
}

impl<F> ScoreFunction for F
where
    F: Fn(&str, &str) -> usize,
{
    fn score(&self, target: &str, candidate: &str) -> usize {
        self(target, candidate)
    }
}

/// Case-insensitive Levenshtein distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl ScoreFunction for Levenshtein {
    fn score(&self, target: &str, candidate: &str) -> usize {
        levenshtein(&target.to_lowercase(), &candidate.to_lowercase())
    }
}

/// Levenshtein edit distance between `a` and `b`, counted in `char`s.
///
/// The minimum number of single-character insertions, deletions and
/// substitutions turning one string into the other.
///
/// # Complexity
/// O(|a|·|b|) time, O(min(|a|, |b|)) space
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
