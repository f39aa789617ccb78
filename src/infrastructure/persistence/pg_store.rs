//! PostgreSQL store.
//!
//! Uses runtime-checked SQLx queries; the schema lives in `migrations/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;
use crate::domain::entities::{BlogPost, DownloadOutcome, NewVideoDownload, VideoRecord};
use crate::domain::fixtures::{seed_blog_posts, seed_videos};
use crate::domain::repositories::{BlogRepository, StorageBackend, VideoRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct VideoRow {
    id: i64,
    url: String,
    title: String,
    thumbnail: String,
    download_count: i64,
    created_at: DateTime<Utc>,
}

impl From<VideoRow> for VideoRecord {
    fn from(r: VideoRow) -> Self {
        VideoRecord {
            id: r.id,
            url: r.url,
            title: r.title,
            thumbnail: r.thumbnail,
            download_count: r.download_count,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    video: VideoRow,
    inserted: bool,
}

#[derive(sqlx::FromRow)]
struct BlogPostRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
    tags: String,
}

impl From<BlogPostRow> for BlogPost {
    fn from(r: BlogPostRow) -> Self {
        BlogPost {
            id: r.id,
            title: r.title,
            content: r.content,
            author: r.author,
            created_at: r.created_at,
            tags: r.tags,
        }
    }
}

/// PostgreSQL-backed store.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool using the pool settings from `config`.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let database_url = config.database_url.as_deref().ok_or_else(|| {
            AppError::internal("DATABASE_URL is not configured", json!({}))
        })?;

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::internal("Migration failed", json!({ "reason": e.to_string() })))
    }

    /// Inserts the seed fixtures when the video table is empty.
    ///
    /// Returns `true` if fixtures were inserted.
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            return Ok(false);
        }

        self.seed().await?;
        Ok(true)
    }

    async fn seed(&self) -> Result<(), AppError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for video in seed_videos(now) {
            sqlx::query(
                r#"
                INSERT INTO videos (id, url, title, thumbnail, download_count, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(video.id)
            .bind(video.url)
            .bind(video.title)
            .bind(video.thumbnail)
            .bind(video.download_count)
            .bind(video.created_at)
            .execute(&mut *tx)
            .await?;
        }

        for post in seed_blog_posts(now) {
            sqlx::query(
                r#"
                INSERT INTO blog_posts (id, title, content, author, created_at, tags)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(post.id)
            .bind(post.title)
            .bind(post.content)
            .bind(post.author)
            .bind(post.created_at)
            .bind(post.tags)
            .execute(&mut *tx)
            .await?;
        }

        // Explicit ids bypass the identity sequences; move them past the fixtures.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('videos', 'id'), (SELECT MAX(id) FROM videos))",
        )
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('blog_posts', 'id'), (SELECT MAX(id) FROM blog_posts))",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!("Seeded PostgreSQL store with initial data");

        Ok(())
    }
}

#[async_trait]
impl VideoRepository for PgStore {
    async fn top(&self, limit: usize) -> Result<Vec<VideoRecord>, AppError> {
        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, url, title, thumbnail, download_count, created_at
            FROM videos
            ORDER BY download_count DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VideoRecord::from).collect())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<VideoRecord>, AppError> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, url, title, thumbnail, download_count, created_at
            FROM videos
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VideoRecord::from))
    }

    async fn record_download(
        &self,
        download: NewVideoDownload,
    ) -> Result<DownloadOutcome, AppError> {
        // xmax is 0 only for rows written by the INSERT branch.
        let row = sqlx::query_as::<_, UpsertRow>(
            r#"
            INSERT INTO videos (url, title, thumbnail, download_count)
            VALUES ($1, $2, $3, 1)
            ON CONFLICT (url)
            DO UPDATE SET download_count = videos.download_count + 1
            RETURNING id, url, title, thumbnail, download_count, created_at,
                      (xmax = 0) AS inserted
            "#,
        )
        .bind(download.url)
        .bind(download.title)
        .bind(download.thumbnail.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(DownloadOutcome {
            video: row.video.into(),
            created: row.inserted,
        })
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl BlogRepository for PgStore {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        let rows = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, author, created_at, tags
            FROM blog_posts
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, author, created_at, tags
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogPost::from))
    }
}

#[async_trait]
impl StorageBackend for PgStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), AppError> {
        sqlx::query("TRUNCATE videos, blog_posts RESTART IDENTITY")
            .execute(&self.pool)
            .await?;
        self.seed().await
    }
}
