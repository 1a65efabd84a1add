use burn::data::dataset::Dataset;
use rand::{seq::SliceRandom, Rng};

use super::{Evaluation, Item, Model};

/// Define configuration struct for a labeling run
#[derive(burn::config::Config)]
pub struct Config {
    /// Label definitions: a JSON object of label name to tag
    #[config(default = "\"cache/labels.json\".to_string()")]
    pub labels_path: String,

    /// Unlabeled card names: a JSON array of strings
    #[config(default = "\"cache/unlabeled.json\".to_string()")]
    pub unlabeled_path: String,

    /// Training records: a JSON array of `{name, labels}` objects
    #[config(default = "\"cache/label-data.json\".to_string()")]
    pub training_path: String,

    /// Where the match records are written
    #[config(default = "\"cache/label.model-output.json\".to_string()")]
    pub output_path: String,

    /// Fraction of records held out for scoring
    #[config(default = 0.2)]
    pub test_size: f64,

    /// Number of features kept by chi-squared selection
    #[config(default = 798)]
    pub k: usize,

    /// Inverse regularization strength of the classifier
    #[config(default = 1.0)]
    pub c: f64,

    /// Cap on classifier solver passes
    #[config(default = 30000)]
    pub max_iter: usize,

    /// Classifier stopping tolerance
    #[config(default = 1e-4)]
    pub tol: f64,

    /// Keywords reported per label
    #[config(default = 15)]
    pub top_keywords: usize,

    /// Seed for the train/test split; unseeded runs draw from entropy
    pub seed: Option<u64>,
}

/// Why a label produced no model
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The training partition holds only positives or only negatives
    #[error("only contains a single class")]
    SingleClass,

    /// No training text yields a single term
    #[error("has an empty vocabulary")]
    EmptyVocabulary,
}

/// Binary membership of every record in the label marked by `tag`
pub fn target_column<I: Item, D: Dataset<I>>(dataset: &D, tag: &str) -> Vec<bool> {
    dataset.iter().map(|item| item.has_label(tag)).collect()
}

/// Shuffle `0..n` into train and test indices, holding out `ceil(test_size * n)` rows
///
/// When holding out would leave nothing to train on, every row is used for training.
pub fn split<R: Rng + ?Sized>(n: usize, test_size: f64, rng: &mut R) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let n_test = (test_size.clamp(0.0, 1.0) * n as f64).ceil() as usize;
    if n_test >= n {
        return (indices, Vec::new());
    }

    let test = indices.split_off(n - n_test);

    (indices, test)
}

/// Split, fit and evaluate one label
pub fn train<R: Rng + ?Sized>(
    cleaned: &[String],
    target: &[bool],
    config: &Config,
    rng: &mut R,
) -> Result<(Model, Evaluation), SkipReason> {
    let (train_idx, test_idx) = split(cleaned.len(), config.test_size, rng);

    let pick = |idx: &[usize]| -> (Vec<String>, Vec<bool>) {
        idx.iter().map(|&i| (cleaned[i].clone(), target[i])).unzip()
    };

    let (train_docs, train_target) = pick(&train_idx);
    let (test_docs, test_target) = pick(&test_idx);

    let model = Model::fit(&train_docs, &train_target, config)?;
    let evaluation = Evaluation::of(&model, &test_docs, &test_target, config.top_keywords);

    Ok((model, evaluation))
}
