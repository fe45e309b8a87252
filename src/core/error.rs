use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("File {file} already exists.")]
    FileExists { file: String },
    #[error("File {file} doesn't exist.")]
    FileNotFound { file: String },
    #[error("Number of elements must be bigger than 0 (got {elements}).")]
    InvalidElementCount { elements: i64 },
    #[error("Provide name by typing 'name=new_value' (got '{token}').")]
    InvalidNameToken { token: String },
    #[error("Couldn't access index {index} in file {file} (it holds {len} elements).")]
    IndexOutOfRange { index: i64, file: String, len: usize },
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot determine working directory: {message}")]
    WorkingDirectory { message: String },
}
