//! Fitness-proportionate selection of the breeding pool.
//!
//! Costs are turned into weights by subtracting them from the worst cost
//! in the population, so lower cost means higher weight and individuals
//! tied with the worst cost are never drawn. The pool is sampled with
//! replacement.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Selection weight of every individual: `(max_cost - cost) / n`.
///
/// # Examples
///
/// ```
/// use u_stringsearch::ga::selection_weights;
///
/// assert_eq!(selection_weights(&[4, 2, 0, 4]), vec![0.0, 0.5, 1.0, 0.0]);
/// ```
pub fn selection_weights(costs: &[usize]) -> Vec<f64> {
    let max_cost = costs.iter().copied().max().unwrap_or(0);
    let n = costs.len() as f64;
    costs
        .iter()
        .map(|&cost| (max_cost - cost) as f64 / n)
        .collect()
}

/// Draws `count` individuals with replacement, weighted by
/// [`selection_weights`].
///
/// When every weight is zero (the whole population shares one cost) the
/// draw is uniform instead.
///
/// # Panics
/// Panics if `population` is empty or its length differs from `costs`.
pub fn select_pool<R: Rng>(
    population: &[String],
    costs: &[usize],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert_eq!(
        population.len(),
        costs.len(),
        "every individual needs a cost"
    );

    match WeightedIndex::new(selection_weights(costs)) {
        Ok(dist) => (0..count)
            .map(|_| population[dist.sample(rng)].clone())
            .collect(),
        Err(_) => (0..count)
            .map(|_| population[rng.random_range(0..population.len())].clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_weights_favor_low_cost() {
        let weights = selection_weights(&[3, 1, 2]);
        assert!(weights[1] > weights[2]);
        assert!(weights[2] > weights[0]);
        assert_eq!(weights[0], 0.0);
    }

    #[test]
    fn test_weights_empty() {
        assert!(selection_weights(&[]).is_empty());
    }

    #[test]
    fn test_worst_never_selected() {
        let population = strings(&["aa", "bb", "cc"]);
        let costs = [2, 0, 2];
        let mut rng = create_rng(42);

        let pool = select_pool(&population, &costs, 200, &mut rng);

        assert_eq!(pool.len(), 200);
        assert!(pool.iter().all(|ind| ind == "bb"));
    }

    #[test]
    fn test_proportional_frequencies() {
        let population = strings(&["w", "x", "y"]);
        // weights: 0, 1/3, 2/3
        let costs = [2, 1, 0];
        let mut rng = create_rng(7);

        let pool = select_pool(&population, &costs, 3000, &mut rng);
        let x = pool.iter().filter(|s| *s == "x").count();
        let y = pool.iter().filter(|s| *s == "y").count();

        assert_eq!(x + y, 3000);
        assert!(y > x, "expected y ({y}) to be drawn more than x ({x})");
    }

    #[test]
    fn test_uniform_fallback_when_all_tied() {
        let population = strings(&["aa", "bb", "cc", "dd"]);
        let costs = [5, 5, 5, 5];
        let mut rng = create_rng(1);

        let pool = select_pool(&population, &costs, 400, &mut rng);

        assert_eq!(pool.len(), 400);
        for ind in &population {
            assert!(pool.contains(ind), "uniform draw never picked {ind}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(0);
        select_pool(&[], &[], 1, &mut rng);
    }
}
