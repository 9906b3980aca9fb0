use crate::core::Storage;
use crate::utils::error::{CompareError, Result};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    /// 只允許 base_path 之下的相對路徑
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));

        if path.is_empty() || escapes {
            return Err(CompareError::NotFound {
                resource: path.to_string(),
            });
        }

        Ok(Path::new(&self.base_path).join(relative))
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path)?;
        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CompareError::NotFound {
                resource: path.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn remove_file(&self, path: &str) -> Result<()> {
        let full_path = self.resolve(path)?;
        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> LocalStorage {
        LocalStorage::new(dir.path().to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_write_then_read_nested_file() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.write_file("abc/unique_to_file1.txt", b"x\n").await.unwrap();

        assert!(dir.path().join("abc/unique_to_file1.txt").exists());
        assert_eq!(storage.read_file("abc/unique_to_file1.txt").await.unwrap(), b"x\n");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let err = storage.read_file("nope/unique_to_file1.txt").await.unwrap_err();
        assert!(matches!(err, CompareError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_paths_outside_base_are_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.read_file("../etc/passwd").await.is_err());
        assert!(storage.read_file("/etc/passwd").await.is_err());
        assert!(storage.write_file("a/../../b", b"").await.is_err());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.write_file("id/out.txt", b"1").await.unwrap();
        storage.remove_file("id/out.txt").await.unwrap();
        storage.remove_file("id/out.txt").await.unwrap();
        assert!(!dir.path().join("id/out.txt").exists());
    }
}
