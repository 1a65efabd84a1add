use std::path::Path;

use burn::data::dataset::{self, InMemDataset};
use derive_new::new;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{pipelines::text_classification, utils::files::read_file};

use super::DatasetError;

/// A labeled card name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Item {
    /// The card name
    pub name: String,

    /// The tags attached to the card
    pub labels: Vec<String>,
}

impl text_classification::Item for Item {
    fn input(&self) -> &str {
        &self.name
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Struct for the labeled card dataset
pub struct Dataset {
    /// Underlying In-Memory dataset
    dataset: InMemDataset<Item>,
}

impl dataset::Dataset<Item> for Dataset {
    fn get(&self, index: usize) -> Option<Item> {
        self.dataset.get(index)
    }

    fn len(&self) -> usize {
        self.dataset.len()
    }
}

impl Dataset {
    /// Build the dataset from records already in memory
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            dataset: InMemDataset::new(items),
        }
    }

    /// Load training records from a strict JSON array of `{name, labels}` objects
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let items: Vec<Item> = load_json(path.as_ref())?;

        Ok(Self::new(items))
    }
}

/// A label name and the tag that marks membership in a training record
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct LabelDefinition {
    /// The label reported in matches
    pub name: String,

    /// The tag looked up in each record's `labels`
    pub tag: String,
}

/// Load label definitions from a JSON object of `label name -> tag`, keeping file order
pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<LabelDefinition>, DatasetError> {
    let path = path.as_ref();
    let map: serde_json::Map<String, serde_json::Value> = load_json(path)?;

    map.into_iter()
        .map(|(name, value)| match value {
            serde_json::Value::String(tag) => Ok(LabelDefinition::new(name, tag)),
            _ => Err(DatasetError::InvalidTag {
                path: path.to_path_buf(),
                label: name,
            }),
        })
        .collect()
}

/// Load the unlabeled card names from a JSON array of strings
pub fn load_unlabeled(path: impl AsRef<Path>) -> Result<Vec<String>, DatasetError> {
    load_json(path.as_ref())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    log::info!("Loading {}", path.display());

    let text = read_file(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
