//! The symbol set candidates are drawn from.

use crate::error::{ConfigError, Result};
use rand::Rng;

/// A fixed, non-empty set of symbols.
///
/// # Examples
///
/// ```
/// use u_stringsearch::Alphabet;
///
/// let alphabet = Alphabet::lowercase();
/// assert_eq!(alphabet.len(), 26);
/// assert!(alphabet.contains('q'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl Alphabet {
    /// The ASCII lowercase letters `a..=z`.
    pub fn lowercase() -> Self {
        Self {
            symbols: ('a'..='z').collect(),
        }
    }

    /// Builds an alphabet from the distinct characters of `symbols`,
    /// keeping their first-seen order.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut unique: Vec<char> = Vec::new();
        for c in symbols.chars() {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { symbols: unique })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for alphabets built through [`Alphabet::new`].
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Draws one symbol uniformly at random.
    ///
    /// # Panics
    /// Panics if the alphabet is empty.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }

    /// Checks that every symbol of `target` can be drawn, comparing both
    /// sides lowercased as the edit-distance cost does.
    pub(crate) fn check_covers(&self, target: &str) -> Result<()> {
        let folded: String = self.symbols.iter().collect::<String>().to_lowercase();
        match target.to_lowercase().chars().find(|&c| !folded.contains(c)) {
            Some(symbol) => Err(ConfigError::SymbolOutsideAlphabet { symbol }),
            None => Ok(()),
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = ConfigError;

    fn try_from(symbols: String) -> Result<Self> {
        Self::new(&symbols)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

/// Creates a uniformly random candidate of `len` symbols.
///
/// This is how callers usually produce the starting candidate for
/// simulated annealing and tabu search, and how the genetic algorithm
/// seeds its initial population.
pub fn random_candidate<R: Rng>(alphabet: &Alphabet, len: usize, rng: &mut R) -> String {
    (0..len).map(|_| alphabet.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_lowercase() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.symbols()[0], 'a');
        assert_eq!(alphabet.symbols()[25], 'z');
        assert!(!alphabet.contains('A'));
    }

    #[test]
    fn test_new_dedups() {
        let alphabet = Alphabet::new("abca").unwrap();
        assert_eq!(alphabet.symbols(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_new_empty() {
        assert_eq!(Alphabet::new(""), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(
            Alphabet::try_from(String::new()),
            Err(ConfigError::EmptyAlphabet)
        );
        let alphabet = Alphabet::try_from("xyz".to_string()).unwrap();
        assert_eq!(String::from(alphabet), "xyz");
    }

    #[test]
    fn test_check_covers() {
        let alphabet = Alphabet::lowercase();
        assert!(alphabet.check_covers("Hello").is_ok());
        assert_eq!(
            alphabet.check_covers("go!"),
            Err(ConfigError::SymbolOutsideAlphabet { symbol: '!' })
        );
        let upper = Alphabet::new("AB").unwrap();
        assert!(upper.check_covers("ab").is_ok());
    }

    #[test]
    fn test_random_candidate() {
        let alphabet = Alphabet::new("xy").unwrap();
        let mut rng = create_rng(42);
        let candidate = random_candidate(&alphabet, 12, &mut rng);
        assert_eq!(candidate.chars().count(), 12);
        assert!(candidate.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_random_candidate_reproducible() {
        let alphabet = Alphabet::lowercase();
        let a = random_candidate(&alphabet, 20, &mut create_rng(3));
        let b = random_candidate(&alphabet, 20, &mut create_rng(3));
        assert_eq!(a, b);
    }
}
