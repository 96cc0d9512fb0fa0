//! Sentence and word pools for typing tasks.
//!
//! Pools are loaded once per race from line-oriented text files named after
//! the difficulty tier (`easy.txt`, `easyrandomizer.txt`, ...). A missing or
//! empty file degrades to a single placeholder string so the game stays
//! playable, just visibly broken.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Fallback shown when a sentence pool could not be loaded.
const SENTENCE_PLACEHOLDER: &str = "No sentences available for this difficulty.";
/// Fallback shown when a word pool could not be loaded.
const WORD_PLACEHOLDER: &str = "No words available for this difficulty.";

/// Supplies the sentences the player has to type.
///
/// Either picks from a fixed sentence pool or, with the randomizer enabled,
/// generates a sentence by chaining uniformly chosen words from the word
/// pool (6/8/10 words for easy/medium/hard).
#[derive(Debug)]
pub struct TextTask {
    sentences: Vec<String>,
    words: Vec<String>,
    words_per_sentence: usize,
    use_randomizer: bool,
    rng: StdRng,
}

impl TextTask {
    /// Load the pools for a difficulty tier from `assets_dir`.
    ///
    /// Sentences come from `<tier>.txt`, words from `<tier>randomizer.txt`.
    pub fn load(assets_dir: &Path, tier: &str, use_randomizer: bool) -> Self {
        let sentences = load_lines(&assets_dir.join(format!("{tier}.txt")), SENTENCE_PLACEHOLDER);
        let words = load_lines(
            &assets_dir.join(format!("{tier}randomizer.txt")),
            WORD_PLACEHOLDER,
        );

        Self::from_pools(sentences, words, words_for_tier(tier), use_randomizer)
    }

    /// Build a task from in-memory pools.
    pub fn from_pools(
        sentences: Vec<String>,
        words: Vec<String>,
        words_per_sentence: usize,
        use_randomizer: bool,
    ) -> Self {
        Self {
            sentences,
            words,
            words_per_sentence,
            use_randomizer,
            rng: StdRng::from_entropy(),
        }
    }

    /// Pick the next sentence for the player to type.
    pub fn random_sentence(&mut self) -> String {
        if self.use_randomizer {
            return self.generate_sentence();
        }

        if self.sentences.is_empty() {
            return SENTENCE_PLACEHOLDER.to_owned();
        }

        let index = self.rng.gen_range(0..self.sentences.len());
        self.sentences[index].clone()
    }

    /// Chain random words into a sentence with a trailing period.
    fn generate_sentence(&mut self) -> String {
        if self.words.is_empty() {
            return WORD_PLACEHOLDER.to_owned();
        }

        let mut selected = Vec::with_capacity(self.words_per_sentence);
        for _ in 0..self.words_per_sentence {
            let index = self.rng.gen_range(0..self.words.len());
            selected.push(self.words[index].as_str());
        }

        format!("{}.", selected.join(" "))
    }
}

/// Word count for a generated sentence, by difficulty tier.
fn words_for_tier(tier: &str) -> usize {
    match tier.to_ascii_lowercase().as_str() {
        "easy" => 6,
        "medium" => 8,
        "hard" => 10,
        _ => 6,
    }
}

/// Read non-empty lines from a pool file, falling back to a placeholder.
fn load_lines(path: &Path, placeholder: &str) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let lines: Vec<String> = contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned)
                .collect();

            if lines.is_empty() {
                warn!(path = %path.display(), "text pool is empty, using placeholder");
                vec![placeholder.to_owned()]
            } else {
                lines
            }
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "text pool missing, using placeholder");
            vec![placeholder.to_owned()]
        }
    }
}
