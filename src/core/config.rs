use std::path::{Path, PathBuf};

use crate::core::error::ForgeError;

pub const EXTENSION: &str = ".json";

/// Where fixture files live. Built once at startup and handed to each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_dir: PathBuf,
}

impl Config {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Uses `dir` when given, otherwise the directory holding the running executable.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self, ForgeError> {
        match dir {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::from_executable(),
        }
    }

    pub fn from_executable() -> Result<Self, ForgeError> {
        let exe = std::env::current_exe().map_err(|e| ForgeError::WorkingDirectory {
            message: e.to_string(),
        })?;
        let dir = exe.parent().ok_or_else(|| ForgeError::WorkingDirectory {
            message: format!("{} has no parent directory", exe.display()),
        })?;
        Ok(Self::new(dir))
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(normalize_file_name(file_name))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

pub fn normalize_file_name(file_name: &str) -> String {
    if file_name.ends_with(EXTENSION) {
        file_name.to_string()
    } else {
        format!("{file_name}{EXTENSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_extension_once() {
        assert_eq!(normalize_file_name("fixtures"), "fixtures.json");
        assert_eq!(normalize_file_name("fixtures.json"), "fixtures.json");
        assert_eq!(
            normalize_file_name(&normalize_file_name("a")),
            normalize_file_name("a")
        );
    }

    #[test]
    fn resolves_against_base_dir() {
        let config = Config::new("/tmp/forge");
        assert_eq!(config.path_for("a"), PathBuf::from("/tmp/forge/a.json"));
        assert_eq!(config.path_for("a.json"), config.path_for("a"));
    }

    #[test]
    fn explicit_dir_wins() {
        let config = Config::resolve(Some(PathBuf::from("/srv/fixtures"))).unwrap();
        assert_eq!(config.base_dir(), Path::new("/srv/fixtures"));
    }

    #[test]
    fn defaults_to_executable_dir() {
        let config = Config::resolve(None).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(config.base_dir(), exe.parent().unwrap());
    }
}
