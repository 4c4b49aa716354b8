use std::env;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "SPOTLIGHT_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./spotlight-data";

/// Where the file-backed store keeps its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    /// `SPOTLIGHT_DATA_DIR`, or `./spotlight-data` when unset or blank.
    pub fn from_env() -> Self {
        match env::var(DATA_DIR_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Self {
                data_dir: PathBuf::from(dir.trim()),
            },
            _ => Self::default(),
        }
    }
}
