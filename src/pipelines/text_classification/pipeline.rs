use anyhow::Context;
use burn::data::dataset::Dataset;
use rand::{rngs::StdRng, SeedableRng};

use crate::datasets::cards::{self, LabelDefinition};

use super::{
    inference::predict,
    output::write_matches,
    training::{target_column, train},
    Config, Evaluation, Item, Match, Normalizer, SkipReason,
};

/// What happened to a single label
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A model was fitted, scored and used for prediction
    Trained(Evaluation),

    /// No model was produced
    Skipped(SkipReason),
}

/// Per-label result of a run
#[derive(Clone, Debug, PartialEq)]
pub struct LabelReport {
    /// The label name
    pub label: String,

    /// Whether the label was trained or skipped
    pub outcome: Outcome,

    /// Matches this label contributed
    pub matches: usize,
}

/// The result of labeling every unlabeled item
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    /// One report per label, in label order
    pub reports: Vec<LabelReport>,

    /// All matches, in label order then item order
    pub matches: Vec<Match>,
}

/// Train a model per label and collect its matches over the unlabeled names
pub fn run_labels<I: Item, D: Dataset<I>>(
    dataset: &D,
    labels: &[LabelDefinition],
    unlabeled: &[String],
    config: &Config,
) -> Run {
    let normalizer = Normalizer::default();

    let inputs: Vec<String> = dataset.iter().map(|item| item.input().to_string()).collect();
    let cleaned = normalizer.normalize_all(&inputs);
    let cleaned_unlabeled = normalizer.normalize_all(unlabeled);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut reports = Vec::with_capacity(labels.len());
    let mut matches = Vec::new();

    for definition in labels {
        log::info!("Running pipeline for label {}", definition.name);

        let target = target_column(dataset, &definition.tag);

        let report = match train(&cleaned, &target, config, &mut rng) {
            Ok((model, evaluation)) => {
                if !evaluation.converged {
                    log::warn!(
                        "Classifier for label {} did not converge within {} iterations",
                        definition.name,
                        config.max_iter
                    );
                }

                let found = predict(&model, &definition.name, unlabeled, &cleaned_unlabeled);
                let count = found.len();
                matches.extend(found);

                LabelReport {
                    label: definition.name.clone(),
                    outcome: Outcome::Trained(evaluation),
                    matches: count,
                }
            }
            Err(reason) => {
                log::warn!("Skipping label {}: {}", definition.name, reason);

                LabelReport {
                    label: definition.name.clone(),
                    outcome: Outcome::Skipped(reason),
                    matches: 0,
                }
            }
        };

        reports.push(report);
    }

    Run { reports, matches }
}

/// Load the inputs named in `config`, label everything and write the matches
pub fn run(config: &Config) -> anyhow::Result<Run> {
    if !(0.0..1.0).contains(&config.test_size) {
        return Err(anyhow!(
            "test_size must be in [0, 1), got {}",
            config.test_size
        ));
    }

    let labels = cards::load_labels(&config.labels_path)?;
    let unlabeled = cards::load_unlabeled(&config.unlabeled_path)?;
    let dataset = cards::Dataset::load(&config.training_path)?;

    if labels.is_empty() {
        log::warn!("No labels defined in {}", config.labels_path);
    }

    let run = run_labels(&dataset, &labels, &unlabeled, config);

    write_matches(&config.output_path, &run.matches)
        .with_context(|| format!("Unable to save {} matches", run.matches.len()))?;

    Ok(run)
}
