//! JSON document read/write on top of the file system capability

use crate::core::validation::validate_json_path;
use crate::services::error::{JsonFileError, JsonFileResult};
use crate::services::file_system::FileSystemCapability;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;

pub const JSON_FILE_SERVICE: &str = "AbstractJsonFileReadWriteService";

/// A provider that owns one JSON document on disk
///
/// Implementors supply the document path and a way to reach the file system
/// service; reading and merging writes come for free.
#[async_trait]
pub trait JsonFileStore: Send + Sync {
    /// Path of the JSON document
    fn path(&self) -> &Path;

    /// The file system capability used for all I/O
    fn file_system(&self) -> Option<Arc<dyn FileSystemCapability>>;

    /// Check the path and resolve the file system service
    fn validate(&self) -> JsonFileResult<Arc<dyn FileSystemCapability>> {
        validate_json_path(self.path())?;
        self.file_system()
            .ok_or_else(|| JsonFileError::FileServiceUnavailable {
                path: self.path().to_path_buf(),
            })
    }

    /// Read the whole document, or the value under `key` (`{}` when absent)
    async fn read(&self, key: Option<&str>) -> JsonFileResult<Value> {
        let file_system = self.validate()?;
        let document = read_document(file_system.as_ref(), self.path()).await?;

        Ok(match key {
            None => document,
            Some(key) => document
                .get(key)
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
        })
    }

    /// Merge `data` into the document and write it back, pretty-printed
    ///
    /// Without a key every top-level entry of `data` is merged into the
    /// entry of the same name. With a key, `data` is merged into the entry
    /// under `key`. A missing document starts out as `{}`.
    async fn write(&self, data: Value, key: Option<&str>) -> JsonFileResult<()> {
        let file_system = self.validate()?;

        let mut document = if file_system.exists(self.path()).await {
            read_document(file_system.as_ref(), self.path()).await?
        } else {
            Value::Object(Map::new())
        };

        match key {
            Some(key) => merge_entry(&mut document, key, data),
            None => match data {
                Value::Object(entries) => {
                    for (entry_key, value) in entries {
                        merge_entry(&mut document, &entry_key, value);
                    }
                }
                other => document = other,
            },
        }

        let rendered =
            serde_json::to_vec_pretty(&document).map_err(|source| JsonFileError::Json {
                path: self.path().to_path_buf(),
                source,
            })?;
        file_system.write(self.path(), &rendered).await?;
        Ok(())
    }
}

async fn read_document(
    file_system: &dyn FileSystemCapability,
    path: &Path,
) -> JsonFileResult<Value> {
    let bytes = file_system.read(path).await?;
    serde_json::from_slice(&bytes).map_err(|source| JsonFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Shallow-merge `value` into `document[key]` when both are objects, else replace
fn merge_entry(document: &mut Value, key: &str, value: Value) {
    if !document.is_object() {
        *document = Value::Object(Map::new());
    }
    let Value::Object(entries) = document else {
        return;
    };

    match entries.get_mut(key) {
        Some(Value::Object(existing)) if value.is_object() => {
            if let Value::Object(incoming) = value {
                existing.extend(incoming);
            }
        }
        _ => {
            entries.insert(key.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::file_system::FileSystemService;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct TestStore {
        path: PathBuf,
        file_system: Option<Arc<dyn FileSystemCapability>>,
    }

    impl JsonFileStore for TestStore {
        fn path(&self) -> &Path {
            &self.path
        }

        fn file_system(&self) -> Option<Arc<dyn FileSystemCapability>> {
            self.file_system.clone()
        }
    }

    fn store_in(dir: &TempDir, name: &str) -> TestStore {
        TestStore {
            path: dir.path().join(name),
            file_system: Some(Arc::new(FileSystemService::new())),
        }
    }

    #[test]
    fn test_merge_entry_shallow_merges_objects() {
        let mut document = json!({"app": {"build": 1, "name": "demo"}});
        merge_entry(&mut document, "app", json!({"build": 2}));
        assert_eq!(document, json!({"app": {"build": 2, "name": "demo"}}));

        merge_entry(&mut document, "flag", json!(true));
        assert_eq!(document["flag"], json!(true));

        merge_entry(&mut document, "app", json!("replaced"));
        assert_eq!(document["app"], json!("replaced"));
    }

    #[tokio::test]
    async fn test_write_then_read_whole_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "settings.json");

        store
            .write(json!({"buildNumber": 12, "version": "1.0"}), None)
            .await
            .unwrap();

        let document = store.read(None).await.unwrap();
        assert_eq!(document, json!({"buildNumber": 12, "version": "1.0"}));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  \"buildNumber\""), "pretty printed: {}", raw);
    }

    #[tokio::test]
    async fn test_keyed_write_merges_into_existing_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "settings.json");

        store
            .write(json!({"db": {"host": "localhost", "port": 5432}}), None)
            .await
            .unwrap();
        store.write(json!({"port": 6543}), Some("db")).await.unwrap();
        store.write(json!({"level": "debug"}), Some("log")).await.unwrap();

        assert_eq!(
            store.read(Some("db")).await.unwrap(),
            json!({"host": "localhost", "port": 6543})
        );
        assert_eq!(
            store.read(Some("log")).await.unwrap(),
            json!({"level": "debug"})
        );
    }

    #[tokio::test]
    async fn test_unkeyed_write_merges_top_level_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "settings.json");

        store
            .write(json!({"ui": {"theme": "dark"}, "count": 1}), None)
            .await
            .unwrap();
        store
            .write(json!({"ui": {"font": "mono"}, "extra": [1, 2]}), None)
            .await
            .unwrap();

        assert_eq!(
            store.read(None).await.unwrap(),
            json!({"ui": {"theme": "dark", "font": "mono"}, "count": 1, "extra": [1, 2]})
        );
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_empty_object() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "settings.json");
        store.write(json!({"a": 1}), None).await.unwrap();

        assert_eq!(store.read(Some("b")).await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_rejects_non_json_path() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "settings.yaml");

        let err = store.read(None).await.unwrap_err();
        assert!(matches!(err, JsonFileError::Validation(_)));
        assert!(err.to_string().contains("must use '.json'"));
    }

    #[tokio::test]
    async fn test_requires_file_service() {
        let store = TestStore {
            path: PathBuf::from("settings.json"),
            file_system: None,
        };

        let err = store.write(json!({}), None).await.unwrap_err();
        assert!(matches!(err, JsonFileError::FileServiceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_reading_missing_document_fails() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "absent.json");

        let err = store.read(None).await.unwrap_err();
        assert!(matches!(err, JsonFileError::FileSystem(_)));
    }

    #[tokio::test]
    async fn test_corrupt_document_is_json_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "broken.json");
        std::fs::write(store.path(), "{not json").unwrap();

        let err = store.read(None).await.unwrap_err();
        assert!(matches!(err, JsonFileError::Json { .. }));
    }
}
