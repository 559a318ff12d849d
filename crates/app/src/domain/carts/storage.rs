//! Durable local cart storage.

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use mockall::automock;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::fs;

use crate::auth::models::UserId;

#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("cart storage I/O failed")]
    Io(#[from] std::io::Error),
}

/// Per-user storage for the serialized cart.
#[automock]
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Read the stored cart bytes, `None` when nothing has been stored yet.
    ///
    /// Contents are returned as written; decoding is left to the caller.
    async fn load(&self, user: &UserId) -> Result<Option<Vec<u8>>, CartStorageError>;

    /// Replace the stored cart.
    async fn save(&self, user: &UserId, contents: Vec<u8>) -> Result<(), CartStorageError>;
}

/// Stores each cart as a JSON file named by the SHA-256 of the user id.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, user: &UserId, extension: &str) -> PathBuf {
        let digest = Sha256::digest(user.as_str().as_bytes());

        self.dir.join(format!("{digest:x}.{extension}"))
    }
}

#[async_trait]
impl CartStorage for FileCartStorage {
    async fn load(&self, user: &UserId) -> Result<Option<Vec<u8>>, CartStorageError> {
        match fs::read(self.path(user, "json")).await {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn save(&self, user: &UserId, contents: Vec<u8>) -> Result<(), CartStorageError> {
        fs::create_dir_all(&self.dir).await?;

        let staging = self.path(user, "json.tmp");

        fs::write(&staging, contents).await?;
        fs::rename(&staging, self.path(user, "json")).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn load_before_save_returns_none() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path());

        assert_eq!(storage.load(&UserId::new("u1")).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path().join("carts"));
        let user = UserId::new("u1");

        storage.save(&user, b"[1]".to_vec()).await?;
        storage.save(&user, b"[2]".to_vec()).await?;

        assert_eq!(storage.load(&user).await?, Some(b"[2]".to_vec()));

        Ok(())
    }

    #[tokio::test]
    async fn users_get_separate_files() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path());

        storage.save(&UserId::new("a"), b"[]".to_vec()).await?;

        assert_eq!(storage.load(&UserId::new("b")).await?, None);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn load_returns_bytes_that_are_not_utf8() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path());
        let user = UserId::new("u1");

        std::fs::write(storage.path(&user, "json"), [0xff, 0xfe, 0x00])?;

        assert_eq!(storage.load(&user).await?, Some(vec![0xff, 0xfe, 0x00]));

        Ok(())
    }
}
