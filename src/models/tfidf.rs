//! TF-IDF vectorizer over word n-grams.
//!
//! Tokens are runs of two or more word characters, lowercased. Stopwords are
//! dropped before n-grams are built, so a bigram never straddles a removed
//! word. The fitted vocabulary is sorted, which makes feature indices stable
//! for a given training set.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::stopwords::SKLEARN_ENGLISH_SET;

use super::sparse::{l2_normalize, SparseRow};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").expect("token pattern is valid");
}

/// TF-IDF vectorizer with sublinear term frequency and smoothed IDF
#[derive(Clone, Debug)]
pub struct TfidfVectorizer {
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    stop_words: bool,
    vocabulary: HashMap<String, usize>,
    feature_names: Vec<String>,
    idf: Vec<f64>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new((1, 2), true, true)
    }
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer
    pub fn new(ngram_range: (usize, usize), sublinear_tf: bool, stop_words: bool) -> Self {
        let min_n = ngram_range.0.max(1);

        Self {
            ngram_range: (min_n, ngram_range.1.max(min_n)),
            sublinear_tf,
            stop_words,
            vocabulary: HashMap::new(),
            feature_names: Vec::new(),
            idf: Vec::new(),
        }
    }

    /// Split a document into its n-gram terms
    pub fn analyze(&self, doc: &str) -> Vec<String> {
        let lowered = doc.to_lowercase();
        let tokens: Vec<&str> = TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !(self.stop_words && SKLEARN_ENGLISH_SET.contains(t)))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }

            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }

        terms
    }

    /// Learn the vocabulary and IDF weights, then return the training matrix
    pub fn fit_transform(&mut self, docs: &[String]) -> Vec<SparseRow> {
        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| self.analyze(d)).collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &analyzed {
            let unique: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = docs.len() as f64;

        self.feature_names = doc_freq.keys().map(|t| t.to_string()).collect();
        self.idf = doc_freq
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        analyzed.iter().map(|terms| self.weigh(terms)).collect()
    }

    /// Vectorize documents with the fitted vocabulary; unseen terms are ignored
    pub fn transform(&self, docs: &[String]) -> Vec<SparseRow> {
        docs.iter().map(|d| self.weigh(&self.analyze(d))).collect()
    }

    /// The fitted feature names, indexed by feature
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of fitted features
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn weigh(&self, terms: &[String]) -> SparseRow {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for term in terms {
            if let Some(&j) = self.vocabulary.get(term) {
                *counts.entry(j).or_insert(0) += 1;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(j, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + (count as f64).ln()
                } else {
                    count as f64
                };

                (j, tf * self.idf[j])
            })
            .collect();

        l2_normalize(&mut row);

        row
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn builds_sorted_unigram_and_bigram_vocabulary() {
        let mut vectorizer = TfidfVectorizer::default();
        vectorizer.fit_transform(&docs(&["goblin guid", "lightn bolt"]));

        assert_eq!(
            vectorizer.feature_names(),
            &["bolt", "goblin", "goblin guid", "guid", "lightn", "lightn bolt"]
        );
    }

    #[test]
    fn drops_stopwords_and_short_tokens_before_bigrams() {
        let vectorizer = TfidfVectorizer::default();

        assert_eq!(
            vectorizer.analyze("dragon of the x flame"),
            vec!["dragon", "flame", "dragon flame"]
        );
    }

    #[test]
    fn rows_are_unit_length() {
        let mut vectorizer = TfidfVectorizer::default();
        let rows = vectorizer.fit_transform(&docs(&["goblin goblin guid", "goblin bolt"]));

        for row in &rows {
            let norm: f64 = row.iter().map(|(_, x)| x * x).sum();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let mut vectorizer = TfidfVectorizer::new((1, 1), true, true);
        let rows = vectorizer.fit_transform(&docs(&["goblin bolt", "goblin guid"]));

        let goblin = vectorizer.feature_names().iter().position(|t| t == "goblin").unwrap();
        let bolt = vectorizer.feature_names().iter().position(|t| t == "bolt").unwrap();
        let weight = |j: usize| rows[0].iter().find(|(k, _)| *k == j).unwrap().1;

        assert!(weight(bolt) > weight(goblin));
    }

    #[test]
    fn unseen_terms_produce_empty_rows() {
        let mut vectorizer = TfidfVectorizer::default();
        vectorizer.fit_transform(&docs(&["goblin guid"]));

        assert_eq!(vectorizer.transform(&docs(&["dragon", ""])), vec![vec![], vec![]]);
    }
}
