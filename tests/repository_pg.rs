//! PostgreSQL store tests. Run with `DATABASE_URL` set and `--ignored`.

use sqlx::PgPool;
use twitter_ranking::domain::entities::NewVideoDownload;
use twitter_ranking::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use twitter_ranking::infrastructure::persistence::PgStore;

fn download(url: &str) -> NewVideoDownload {
    NewVideoDownload {
        url: url.to_string(),
        title: "新しい動画".to_string(),
        thumbnail: None,
    }
}

async fn seeded_store(pool: PgPool) -> PgStore {
    let store = PgStore::new(pool);
    store.seed_if_empty().await.unwrap();
    store
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_seed_if_empty_runs_once(pool: PgPool) {
    let store = PgStore::new(pool);

    assert!(store.seed_if_empty().await.unwrap());
    assert!(!store.seed_if_empty().await.unwrap());
    assert_eq!(store.count().await.unwrap(), 5);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_top_orders_by_download_count(pool: PgPool) {
    let store = seeded_store(pool).await;

    let top = store.top(3).await.unwrap();

    let counts: Vec<i64> = top.iter().map(|v| v.download_count).collect();
    assert_eq!(counts, vec![1250, 980, 875]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_record_download_existing_url(pool: PgPool) {
    let store = seeded_store(pool).await;

    let outcome = store
        .record_download(download("https://twitter.com/i/status/1234567890"))
        .await
        .unwrap();

    assert!(!outcome.created);
    assert_eq!(outcome.video.id, 1);
    assert_eq!(outcome.video.download_count, 1251);
    assert_eq!(outcome.video.title, "面白いネコの動画");
    assert_eq!(store.count().await.unwrap(), 5);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_record_download_new_url_continues_ids(pool: PgPool) {
    let store = seeded_store(pool).await;

    let first = store
        .record_download(download("https://x.com/a/status/42"))
        .await
        .unwrap();
    let second = store
        .record_download(download("https://x.com/a/status/42"))
        .await
        .unwrap();

    assert!(first.created);
    assert_eq!(first.video.id, 6);
    assert_eq!(first.video.thumbnail, "");
    assert!(!second.created);
    assert_eq!(second.video.download_count, 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_blog_queries(pool: PgPool) {
    let store = seeded_store(pool).await;

    let posts = store.list().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert!(store.find_by_id(1).await.unwrap().is_some());
    assert!(store.find_by_id(2).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_reset_restores_fixtures(pool: PgPool) {
    let store = seeded_store(pool).await;
    store
        .record_download(download("https://x.com/a/status/1"))
        .await
        .unwrap();

    store.reset().await.unwrap();

    assert!(store.ping().await.is_ok());
    assert_eq!(store.count().await.unwrap(), 5);
    assert!(
        store
            .find_by_url("https://x.com/a/status/1")
            .await
            .unwrap()
            .is_none()
    );
}
