use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Keeps each slot in its own JSON file under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// File backing `key`. Characters that are unsafe in file names become `_`,
    /// so `@RocketShoes:cart` lives in `_RocketShoes_cart.json`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", file_name))
    }
}

impl Storage for LocalStorage {
    async fn read_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // write-then-rename so a crash never leaves half a cart behind
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, value).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// In-process slots; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    async fn read_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().await;
        Ok(items.get(key).cloned())
    }

    async fn write_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().await;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_sanitizes_key() {
        let storage = LocalStorage::new("/tmp/carts");
        assert_eq!(
            storage.path_for("@RocketShoes:cart"),
            PathBuf::from("/tmp/carts/_RocketShoes_cart.json")
        );
    }

    #[tokio::test]
    async fn test_local_storage_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert_eq!(storage.read_item("@RocketShoes:cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_local_storage_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested"));

        storage.write_item("@RocketShoes:cart", "[]").await.unwrap();
        storage
            .write_item("@RocketShoes:cart", r#"[{"id":1,"amount":1}]"#)
            .await
            .unwrap();

        assert_eq!(
            storage.read_item("@RocketShoes:cart").await.unwrap().as_deref(),
            Some(r#"[{"id":1,"amount":1}]"#)
        );
        assert!(!storage.path_for("@RocketShoes:cart").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_memory_storage_clones_share_state() {
        tokio_test::block_on(async {
            let storage = MemoryStorage::new();
            let other = storage.clone();

            storage.write_item("k", "v").await.unwrap();

            assert_eq!(other.read_item("k").await.unwrap().as_deref(), Some("v"));
            assert_eq!(other.read_item("missing").await.unwrap(), None);
        });
    }
}
