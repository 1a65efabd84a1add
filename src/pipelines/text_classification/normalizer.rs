use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::utils::stopwords::NLTK_ENGLISH_SET;

const MAX_PASSES: usize = 8;

lazy_static! {
    static ref NON_LETTER: Regex = Regex::new("[^a-zA-Z]").expect("letter pattern is valid");
}

/// Cleans card names into lowercase, stopword-free, stemmed token strings
pub struct Normalizer {
    stemmer: Stemmer,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Normalizer {
    /// Normalize a single name
    pub fn normalize(&self, text: &str) -> String {
        let letters = NON_LETTER.replace_all(text, " ");

        letters
            .split_whitespace()
            .filter_map(|token| self.reduce(token.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Drop stopwords and stem until the token stops changing
    ///
    /// Snowball stems are not always stable under a second pass, and a stem can
    /// itself be a stopword, so the token is reduced to a fixed point.
    fn reduce(&self, mut token: String) -> Option<String> {
        for _ in 0..MAX_PASSES {
            if NLTK_ENGLISH_SET.contains(token.as_str()) {
                return None;
            }

            let stem = self.stemmer.stem(&token);
            if stem == token {
                return Some(token);
            }

            token = stem.into_owned();
        }

        log::debug!("Stem of {} did not settle after {} passes", token, MAX_PASSES);

        (!NLTK_ENGLISH_SET.contains(token.as_str())).then_some(token)
    }

    /// Normalize every name, preserving order
    pub fn normalize_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}
