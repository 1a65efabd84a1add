use crate::models::{linear_svc::Fit, LinearSvc, SelectKBest, TfidfVectorizer};

use super::{evaluation::Keyword, training::SkipReason, Config};

/// A fitted vectorizer, feature selector and classifier for one label
#[derive(Clone, Debug)]
pub struct Model {
    vectorizer: TfidfVectorizer,
    selector: SelectKBest,
    classifier: Fit,
}

impl Model {
    /// Fit the whole feature pipeline on cleaned texts and their binary target
    pub fn fit(docs: &[String], target: &[bool], config: &Config) -> Result<Self, SkipReason> {
        let positives = target.iter().filter(|&&y| y).count();
        if positives == 0 || positives == target.len() {
            return Err(SkipReason::SingleClass);
        }

        let mut vectorizer = TfidfVectorizer::default();
        let features = vectorizer.fit_transform(docs);
        let n_features = vectorizer.n_features();

        if n_features == 0 {
            return Err(SkipReason::EmptyVocabulary);
        }

        let mut selector = SelectKBest::new(config.k);
        selector.fit(&features, target, n_features);
        let selected = selector.transform(&features);

        log::debug!("Selected {} of {} features", selector.support().len(), n_features);

        let classifier = LinearSvc::new(config.c, config.max_iter, config.tol).fit(
            &selected,
            target,
            selector.support().len(),
        );

        log::debug!("Solver finished after {} iterations", classifier.n_iter);

        Ok(Self {
            vectorizer,
            selector,
            classifier,
        })
    }

    /// Predict label membership for cleaned texts
    pub fn predict(&self, docs: &[String]) -> Vec<bool> {
        let features = self.selector.transform(&self.vectorizer.transform(docs));

        features.iter().map(|row| self.classifier.predict(row)).collect()
    }

    /// Fraction of exact matches against `target`, or `None` with nothing to score
    pub fn score(&self, docs: &[String], target: &[bool]) -> Option<f64> {
        if docs.is_empty() {
            return None;
        }

        let correct = self
            .predict(docs)
            .iter()
            .zip(target)
            .filter(|(predicted, actual)| predicted == actual)
            .count();

        Some(correct as f64 / docs.len() as f64)
    }

    /// The `n` selected features with the highest weight, highest first
    pub fn top_keywords(&self, n: usize) -> Vec<Keyword> {
        let names = self.vectorizer.feature_names();

        let mut order: Vec<usize> = (0..self.classifier.coef.len()).collect();
        order.sort_by(|&a, &b| self.classifier.coef[a].total_cmp(&self.classifier.coef[b]));

        order
            .into_iter()
            .rev()
            .take(n)
            .map(|k| Keyword {
                term: names[self.selector.support()[k]].clone(),
                weight: self.classifier.coef[k],
            })
            .collect()
    }

    /// Whether the classifier reached its tolerance
    pub fn converged(&self) -> bool {
        self.classifier.converged
    }

    /// Vocabulary size before selection
    pub fn n_features(&self) -> usize {
        self.vectorizer.n_features()
    }

    /// Number of features kept by the selector
    pub fn n_selected(&self) -> usize {
        self.selector.support().len()
    }
}
