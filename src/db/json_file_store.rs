//! JSON 파일 저장소
//!
//! 사용자 컬렉션을 2칸 들여쓰기 JSON 배열로 하나의 파일에 보관합니다.
//! 파일 I/O는 블로킹이므로 actix의 blocking 스레드 풀(`web::block`)에서 실행합니다.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use actix_web::web;
use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use tempfile::NamedTempFile;

use super::UserStore;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::StoredUser;

/// JSON 파일 기반 사용자 저장소
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

fn storage_error(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::StorageError(format!("{}: {}", path.display(), e))
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 파일을 읽어 컬렉션으로 해석합니다.
    ///
    /// 파일이 없거나, 비어 있거나, JSON 구문 오류이거나, 최상위 값이 배열이
    /// 아니면 빈 컬렉션입니다. 배열의 각 항목은 형태를 검사하지 않고 보존합니다.
    fn read_users(path: &Path) -> Vec<StoredUser> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("사용자 저장소 파일 없음, 빈 컬렉션 사용: {}", path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("사용자 저장소 읽기 실패 ({}): {}", path.display(), e);
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(items)) => items.into_iter().map(StoredUser::from).collect(),
            Ok(_) => {
                warn!("사용자 저장소 최상위 값이 배열이 아님: {}", path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("사용자 저장소 해석 실패 ({}): {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// 같은 디렉터리의 임시 파일에 기록하고 디스크에 동기화한 뒤 원본을 교체합니다.
    fn write_bytes(path: &Path, bytes: &[u8]) -> AppResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| storage_error(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| storage_error(dir, e))?;
        tmp.write_all(bytes).map_err(|e| storage_error(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| storage_error(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| storage_error(path, e.error))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    async fn load(&self) -> Vec<StoredUser> {
        let path = self.path.clone();

        web::block(move || Self::read_users(&path))
            .await
            .unwrap_or_else(|e| {
                warn!("사용자 저장소 읽기 작업 실패: {}", e);
                Vec::new()
            })
    }

    async fn save(&self, users: &[StoredUser]) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(users)
            .map_err(|e| AppError::StorageError(format!("failed to serialize users: {}", e)))?;
        let path = self.path.clone();

        web::block(move || Self::write_bytes(&path, &bytes))
            .await
            .map_err(|e| AppError::StorageError(format!("blocking write task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str, email: &str, nick: &str) -> StoredUser {
        StoredUser::from(json!({
            "id": id,
            "name": format!("User {}", id),
            "email": email,
            "nick": nick,
            "imageUrl": "https://example.com/default-image.jpg",
            "birthDate": "2000-01-01"
        }))
    }

    #[actix_web::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));

        assert!(store.load().await.is_empty());
    }

    #[actix_web::test]
    async fn test_empty_corrupt_and_non_array_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);

        for content in ["", "   \n", "{not json", r#"{"id": "1"}"#, "null", "42"] {
            fs::write(&path, content).unwrap();
            assert!(store.load().await.is_empty(), "content: {:?}", content);
        }
    }

    #[actix_web::test]
    async fn test_irregular_records_survive_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);
        let existing = json!([
            { "id": 1, "email": "a@x.com", "nick": "a1" },
            { "id": "2", "email": "b@x.com", "nick": "b1", "extra": "keep" },
            { "id": "3" }
        ]);
        fs::write(&path, existing.to_string()).unwrap();

        let users = store.load().await;
        assert_eq!(users.len(), 3);
        assert!(users[0].has_email("a@x.com"));

        store.save(&users).await.unwrap();

        let rewritten: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rewritten, existing);
    }

    #[actix_web::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));
        let users = vec![user("1", "a@x.com", "a1"), user("2", "b@x.com", "b1")];

        store.save(&users).await.unwrap();

        assert_eq!(store.load().await, users);
    }

    #[actix_web::test]
    async fn test_save_writes_pretty_json_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);

        store
            .save(&[user("1", "a@x.com", "a1"), user("2", "b@x.com", "b1")])
            .await
            .unwrap();
        store.save(&[user("3", "c@x.com", "c1")]).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": \"3\",\n    \"name\""));
        assert!(!content.contains("a@x.com"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[actix_web::test]
    async fn test_save_ignores_leftover_tmp_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::create_dir(dir.path().join("users.json.tmp")).unwrap();
        let store = JsonFileStore::new(&path);

        store.save(&[user("1", "a@x.com", "a1")]).await.unwrap();

        assert_eq!(store.load().await.len(), 1);
        assert!(dir.path().join("users.json.tmp").is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[actix_web::test]
    async fn test_save_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("users.json"));

        store.save(&[user("1", "a@x.com", "a1")]).await.unwrap();

        assert_eq!(store.load().await.len(), 1);
    }

    #[actix_web::test]
    async fn test_save_into_unwritable_location_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let store = JsonFileStore::new(blocker.join("users.json"));

        let result = store.save(&[user("1", "a@x.com", "a1")]).await;

        assert!(matches!(result, Err(AppError::StorageError(_))));
    }
}
