use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

use derive_new::new;
use serde::{
    de::{self, Deserializer},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

use crate::utils::files::{read_file, write_json};

/// An unlabeled item predicted to belong to a label
///
/// Serialized as a single-entry object, `{ "<label>": "<item>" }`.
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct Match {
    /// The label name
    pub label: String,

    /// The raw item name
    pub item: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.label, self.item)
    }
}

impl Serialize for Match {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.item)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Match {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, String>::deserialize(deserializer)?;

        if entries.len() != 1 {
            return Err(de::Error::invalid_length(
                entries.len(),
                &"an object with exactly one label",
            ));
        }

        let (label, item) = entries
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::custom("empty match"))?;

        Ok(Self { label, item })
    }
}

/// Output Error
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// The result file could not be written
    #[error("unable to write {path}: {source}")]
    Write {
        /// The target file
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The result file could not be read back
    #[error("unable to read {path}: {source}")]
    Read {
        /// The target file
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The result file is not an array of matches
    #[error("malformed results in {path}: {source}")]
    Parse {
        /// The target file
        path: PathBuf,
        /// The underlying parse error
        source: serde_json::Error,
    },
}

/// Write matches as a JSON array, replacing any existing file
pub fn write_matches(path: impl AsRef<Path>, matches: &[Match]) -> Result<(), OutputError> {
    let path = path.as_ref();

    write_json(path, matches).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read matches back from a result file
pub fn read_matches(path: impl AsRef<Path>) -> Result<Vec<Match>, OutputError> {
    let path = path.as_ref();

    let text = read_file(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| OutputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
