use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The fixed set of words a session draws its targets from
pub const WORDS: [&str; 20] = [
    "typescript",
    "javascript",
    "react",
    "programming",
    "developer",
    "interface",
    "component",
    "function",
    "variable",
    "constant",
    "algorithm",
    "database",
    "frontend",
    "backend",
    "fullstack",
    "application",
    "framework",
    "library",
    "module",
    "package",
];

/// Source of random indices used to choose the next target word.
///
/// Production code uses [`RandomPicker`]; tests plug in a closure so word
/// selection is deterministic.
pub trait WordPicker: Send {
    /// Return an index in `0..len`. Larger values are wrapped by the caller.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<F> WordPicker for F
where
    F: FnMut(usize) -> usize + Send,
{
    fn pick_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform selection, repeats allowed
#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl WordPicker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Draw a word from [`WORDS`] using `picker`
pub fn pick_word(picker: &mut dyn WordPicker) -> &'static str {
    WORDS[picker.pick_index(WORDS.len()) % WORDS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_set_is_lowercase_ascii() {
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn test_pick_word_uses_picker_index() {
        let mut picker = |_len: usize| 2usize;
        assert_eq!(pick_word(&mut picker), "react");
    }

    #[test]
    fn test_pick_word_wraps_out_of_range_index() {
        let mut picker = |len: usize| len + 2;
        assert_eq!(pick_word(&mut picker), "react");
    }

    #[test]
    fn test_closure_picker_sees_set_length() {
        let mut seen = 0;
        let mut picker = |len: usize| {
            seen = len;
            0usize
        };
        pick_word(&mut picker);
        assert_eq!(seen, WORDS.len());
    }

    #[test]
    fn test_random_picker_stays_in_range() {
        let mut picker = RandomPicker::from_entropy();
        for _ in 0..200 {
            assert!(picker.pick_index(WORDS.len()) < WORDS.len());
        }
    }

    #[test]
    fn test_seeded_pickers_agree() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let first: Vec<&str> = (0..10).map(|_| pick_word(&mut a)).collect();
        let second: Vec<&str> = (0..10).map(|_| pick_word(&mut b)).collect();
        assert_eq!(first, second);
    }
}
