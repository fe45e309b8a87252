use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::error::ForgeError;
use crate::core::record::Record;

const INDENT: &[u8] = b"    ";

fn io_error(path: &Path, source: io::Error) -> ForgeError {
    ForgeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn json_error(path: &Path, source: serde_json::Error) -> ForgeError {
    ForgeError::Json {
        path: path.to_path_buf(),
        source,
    }
}

/// Renders records as a JSON array indented by four spaces.
pub fn to_pretty_json(records: &[Record]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes a brand new file. Fails with `AlreadyExists` rather than truncating.
pub fn write_new(path: &Path, records: &[Record]) -> Result<(), ForgeError> {
    let body = to_pretty_json(records).map_err(|e| json_error(path, e))?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;
    file.write_all(&body).map_err(|e| io_error(path, e))
}

pub fn read_records(path: &Path) -> Result<Vec<Record>, ForgeError> {
    let raw = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_json::from_str(&raw).map_err(|e| json_error(path, e))
}

pub fn overwrite(path: &Path, records: &[Record]) -> Result<(), ForgeError> {
    let body = to_pretty_json(records).map_err(|e| json_error(path, e))?;
    fs::write(path, body).map_err(|e| io_error(path, e))
}
