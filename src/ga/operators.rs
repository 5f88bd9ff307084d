//! Crossover operators for string chromosomes.
//!
//! Mutation is the single-substitution move from
//! [`neighbor`](crate::neighbor), applied with its own per-run memo.

use rand::seq::index;
use rand::Rng;

/// Sampling crossover.
///
/// Pools the characters of both parents and draws, without replacement and
/// in random order, `len(p1)/2 + len(p2)/2` of them, plus one more when
/// `target_len` is odd. For parents of the target's length the child has
/// the target's length as well.
///
/// # Complexity
/// O(|p1| + |p2|) time and space
///
/// # Examples
///
/// ```
/// use u_stringsearch::create_rng;
/// use u_stringsearch::ga::operators::sampling_crossover;
///
/// let mut rng = create_rng(42);
/// let child = sampling_crossover("abc", "xyz", 3, &mut rng);
/// assert_eq!(child.len(), 3);
/// assert!(child.chars().all(|c| "abcxyz".contains(c)));
/// ```
pub fn sampling_crossover<R: Rng>(
    parent1: &str,
    parent2: &str,
    target_len: usize,
    rng: &mut R,
) -> String {
    let genes: Vec<char> = parent1.chars().chain(parent2.chars()).collect();
    let mut count = parent1.chars().count() / 2 + parent2.chars().count() / 2;
    if target_len % 2 == 1 {
        count += 1;
    }
    let count = count.min(genes.len());

    index::sample(rng, genes.len(), count)
        .into_iter()
        .map(|i| genes[i])
        .collect()
}

/// Picks two parents at distinct positions of `pool`, uniformly at random.
///
/// The two may still be equal strings when the pool holds duplicates.
///
/// # Panics
/// Panics if `pool` has fewer than two members.
pub fn pick_parents<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> (&'a str, &'a str) {
    assert!(pool.len() >= 2, "breeding pool needs at least two members");
    let picked = index::sample(rng, pool.len(), 2);
    (pool[picked.index(0)].as_str(), pool[picked.index(1)].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn char_counts(s: &str) -> std::collections::HashMap<char, usize> {
        let mut counts = std::collections::HashMap::new();
        for c in s.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_crossover_even_length() {
        let mut rng = create_rng(1);
        for _ in 0..50 {
            let child = sampling_crossover("abcd", "wxyz", 4, &mut rng);
            assert_eq!(child.chars().count(), 4);
        }
    }

    #[test]
    fn test_crossover_odd_length() {
        let mut rng = create_rng(2);
        for _ in 0..50 {
            let child = sampling_crossover("abcde", "vwxyz", 5, &mut rng);
            assert_eq!(child.chars().count(), 5);
        }
    }

    #[test]
    fn test_crossover_single_char() {
        let mut rng = create_rng(3);
        let child = sampling_crossover("a", "b", 1, &mut rng);
        assert!(child == "a" || child == "b");
    }

    #[test]
    fn test_crossover_draws_without_replacement() {
        let mut rng = create_rng(4);
        let pooled = char_counts("aabbbc");
        for _ in 0..100 {
            let child = sampling_crossover("aab", "bbc", 3, &mut rng);
            for (c, n) in char_counts(&child) {
                assert!(n <= pooled[&c], "{c} drawn {n} times from {child}");
            }
        }
    }

    #[test]
    fn test_crossover_reproducible() {
        let a = sampling_crossover("hello", "world", 5, &mut create_rng(9));
        let b = sampling_crossover("hello", "world", 5, &mut create_rng(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_parents_distinct_positions() {
        let pool = vec!["a".to_string(), "b".to_string()];
        let mut rng = create_rng(5);
        for _ in 0..20 {
            let (p1, p2) = pick_parents(&pool, &mut rng);
            assert_ne!(p1, p2);
        }
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn test_pick_parents_small_pool() {
        let pool = vec!["a".to_string()];
        pick_parents(&pool, &mut create_rng(0));
    }
}
