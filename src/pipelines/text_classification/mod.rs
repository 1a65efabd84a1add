/// Text Classification Items
pub mod item;

/// Name normalization
pub mod normalizer;

/// The fitted feature pipeline for a single label
pub mod model;

/// Training
pub mod training;

/// Evaluation reports
pub mod evaluation;

/// Inference
pub mod inference;

/// Match records and the result file
pub mod output;

/// End-to-end runs over every label
pub mod pipeline;

pub use evaluation::Evaluation;
pub use inference::predict;
pub use item::Item;
pub use model::Model;
pub use normalizer::Normalizer;
pub use output::Match;
pub use pipeline::{run, run_labels, LabelReport, Outcome, Run};
pub use training::{train, Config, SkipReason};
