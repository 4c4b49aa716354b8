use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use ulid::Ulid;

use super::{validate_key, KeyValueStore, StoreError};

/// One JSON file per key inside a data directory.
///
/// Writes go to a uniquely named `.<key>.<ulid>.tmp` file first and are
/// renamed over the target, so a failed write never leaves a truncated value
/// behind and concurrent writers never share a temp file. The temp file is
/// removed when any step fails.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_err(key: &str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(key, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        validate_key(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Self::io_err(key, e))?;

        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.{}.tmp", Ulid::new()));

        if let Err(e) = write_then_rename(&tmp, &target, value.as_bytes()).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(key, path = %tmp.display(), error = %cleanup, "Temp file left behind");
                }
            }
            return Err(Self::io_err(key, e));
        }
        debug!(key, path = %target.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}

async fn write_then_rename(tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(tmp, target).await
}
