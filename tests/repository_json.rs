use std::path::PathBuf;
use std::sync::Arc;
use twitter_ranking::config::{Config, StorageKind};
use twitter_ranking::domain::entities::NewVideoDownload;
use twitter_ranking::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use twitter_ranking::infrastructure::persistence::{JsonFileStore, open_storage};

fn config(storage_backend: StorageKind, data_file: PathBuf) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        storage_backend,
        data_file,
        database_url: None,
        site_url: "http://localhost:3000".to_string(),
        rate_limit_enabled: false,
        db_max_connections: 1,
        db_connect_timeout: 1,
    }
}

#[tokio::test]
async fn test_open_storage_json_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("database.json");

    let storage = open_storage(&config(StorageKind::Json, path.clone()))
        .await
        .unwrap();

    assert_eq!(storage.backend.name(), "json");
    assert!(path.exists());
    assert_eq!(storage.videos.count().await.unwrap(), 5);
    assert_eq!(storage.blog.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_open_storage_memory() {
    let storage = open_storage(&config(StorageKind::Memory, PathBuf::from("unused.json")))
        .await
        .unwrap();

    assert_eq!(storage.backend.name(), "memory");
    assert!(storage.backend.ping().await.is_ok());
}

#[tokio::test]
async fn test_open_storage_postgres_without_url_fails() {
    let result = open_storage(&config(StorageKind::Postgres, PathBuf::new())).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_concurrent_downloads_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    let store = Arc::new(JsonFileStore::open(&path).await.unwrap());

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .record_download(NewVideoDownload {
                        url: "https://x.com/u/status/555".to_string(),
                        title: "同時保存".to_string(),
                        thumbnail: None,
                    })
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().created {
            created += 1;
        }
    }
    assert_eq!(created, 1);

    drop(store);
    let reopened = JsonFileStore::open(&path).await.unwrap();
    let video = reopened
        .find_by_url("https://x.com/u/status/555")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(video.download_count, 20);
    assert_eq!(reopened.count().await.unwrap(), 6);
}

#[tokio::test]
async fn test_ping_fails_when_file_removed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    let store = JsonFileStore::open(&path).await.unwrap();

    std::fs::remove_file(&path).unwrap();

    assert!(store.ping().await.is_err());
}
