use std::path::PathBuf;

/// The card name dataset: label definitions, training records and unlabeled names
pub mod cards;

/// Dataset Error
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// The input file could not be read
    #[error("unable to read {path}: {source}")]
    Read {
        /// The offending file
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The input file is not the JSON shape this dataset expects
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        /// The offending file
        path: PathBuf,
        /// The underlying parse error
        source: serde_json::Error,
    },

    /// A label definition maps to something other than a string tag
    #[error("label {label:?} in {path} must map to a string tag")]
    InvalidTag {
        /// The offending file
        path: PathBuf,
        /// The label whose tag is not a string
        label: String,
    },
}
