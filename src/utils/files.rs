use std::{fs, io, path::Path};

use serde::Serialize;

/// Read a whole file from the given path into a string
pub fn read_file(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Serialize a value as JSON and write it to the given path, replacing any existing file
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string(value).map_err(io::Error::from)?;

    fs::write(path, json)
}
