use std::path::PathBuf;

use log::{debug, info};

pub mod config;
pub mod error;
pub mod record;
pub mod store;

use config::{normalize_file_name, Config};
use error::ForgeError;

/// Where a finished operation left its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub file_name: String,
    pub path: PathBuf,
}

/// Extracts the new name from a `name=<value>` token.
pub fn parse_name_token(token: &str) -> Result<String, ForgeError> {
    token
        .split('=')
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| ForgeError::InvalidNameToken {
            token: token.to_string(),
        })
}

pub fn create(config: &Config, file: &str, elements: i64) -> Result<Outcome, ForgeError> {
    let file_name = normalize_file_name(file);
    let path = config.path_for(file);
    debug!("create {} with {elements} elements", path.display());

    if path.exists() {
        debug!("refusing to overwrite {}", path.display());
        return Err(ForgeError::FileExists { file: file_name });
    }

    let records = record::build_records(elements)?;
    store::write_new(&path, &records).map_err(|err| match err {
        ForgeError::Io { source, .. } if source.kind() == std::io::ErrorKind::AlreadyExists => {
            ForgeError::FileExists {
                file: file_name.clone(),
            }
        }
        other => other,
    })?;

    info!("wrote {} records to {}", records.len(), path.display());
    Ok(Outcome { file_name, path })
}

pub fn modify(config: &Config, file: &str, index: i64, token: &str) -> Result<Outcome, ForgeError> {
    let name = parse_name_token(token)?;
    let file_name = normalize_file_name(file);
    let path = config.path_for(file);
    debug!("modify {} at index {index}", path.display());

    if !path.exists() {
        debug!("{} not found", path.display());
        return Err(ForgeError::FileNotFound { file: file_name });
    }

    let mut records = store::read_records(&path)?;
    let len = records.len();
    let slot = usize::try_from(index)
        .ok()
        .and_then(|i| records.get_mut(i))
        .ok_or_else(|| ForgeError::IndexOutOfRange {
            index,
            file: file_name.clone(),
            len,
        })?;
    slot.name = name;

    store::overwrite(&path, &records)?;
    info!("renamed element {index} in {}", path.display());
    Ok(Outcome { file_name, path })
}
