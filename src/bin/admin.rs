//! CLI administration tool for the ranking site.
//!
//! Talks to the same store as the server, selected by `STORAGE_BACKEND`,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the current ranking
//! cargo run --bin admin -- videos top --limit 10
//!
//! # Register a download by hand
//! cargo run --bin admin -- videos record --url https://x.com/u/status/1 --title "猫"
//!
//! # Blog posts
//! cargo run --bin admin -- blog list
//! cargo run --bin admin -- blog show 1 --html
//!
//! # Check the store or restore the seed data
//! cargo run --bin admin -- store check
//! cargo run --bin admin -- store reset
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see `twitter_ranking::config`.

use twitter_ranking::config::{self, Config};
use twitter_ranking::prelude::*;
use twitter_ranking::utils::format::{ja_date, thousands};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing the ranking site.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Video ranking
    Videos {
        #[command(subcommand)]
        action: VideoAction,
    },

    /// Blog posts
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
enum VideoAction {
    /// Show the most downloaded videos
    Top {
        /// Number of videos (1-100)
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },

    /// Register one download
    Record {
        #[arg(short, long)]
        url: String,

        #[arg(short, long)]
        title: String,

        #[arg(long)]
        thumbnail: Option<String>,
    },
}

#[derive(Subcommand)]
enum BlogAction {
    /// List all posts, newest first
    List,

    /// Print one post
    Show {
        id: i64,

        /// Print rendered HTML instead of the markdown source
        #[arg(long)]
        html: bool,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Check that the store is reachable
    Check,

    /// Discard all data and restore the seed fixtures
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let storage = open_storage(&config)
        .await
        .context("Failed to open storage")?;

    match cli.command {
        Commands::Videos { action } => handle_video_action(action, &storage).await?,
        Commands::Blog { action } => handle_blog_action(action, &storage).await?,
        Commands::Store { action } => handle_store_action(action, &storage, &config).await?,
    }

    Ok(())
}

async fn handle_video_action(action: VideoAction, storage: &Storage) -> Result<()> {
    let service = VideoService::new(storage.videos.clone());

    match action {
        VideoAction::Top { limit } => list_top_videos(&service, limit).await,
        VideoAction::Record {
            url,
            title,
            thumbnail,
        } => record_download(&service, url, title, thumbnail).await,
    }
}

/// Prints the ranking as a table.
///
/// # Output Format
///
/// ```text
/// 🏆 Top Videos
///
///   #   Downloads  Title                          URL
///   ─────────────────────────────────────────────────────────────────────────
///   1       1,250  面白いネコの動画               https://twitter.com/i/status/1234567890
/// ```
async fn list_top_videos(service: &VideoService, limit: u32) -> Result<()> {
    println!("{}", "🏆 Top Videos".bright_blue().bold());
    println!();

    let videos = service
        .top_videos(Some(limit))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch videos: {}", e))?;

    if videos.is_empty() {
        println!("{}", "  No videos yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:>10}  {:<30} {}",
        "#".bright_white().bold(),
        "Downloads".bright_white().bold(),
        "Title".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (rank, video) in videos.iter().enumerate() {
        println!(
            "  {:<3} {:>10}  {:<30} {}",
            (rank + 1).to_string().bright_black(),
            thousands(video.download_count).green(),
            video.title.cyan(),
            video.url.bright_black()
        );
    }

    println!();
    println!(
        "  Total videos: {}",
        service
            .count()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to count videos: {}", e))?
            .to_string()
            .bright_white()
            .bold()
    );
    println!();

    Ok(())
}

async fn record_download(
    service: &VideoService,
    url: String,
    title: String,
    thumbnail: Option<String>,
) -> Result<()> {
    let outcome = service
        .record_download(NewVideoDownload {
            url,
            title,
            thumbnail,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add video download: {}", e))?;

    if outcome.created {
        println!("{}", "✨ New video registered".green().bold());
    } else {
        println!("{}", "✅ Download counted".green().bold());
    }
    println!("  ID:        {}", outcome.video.id.to_string().bright_black());
    println!("  Title:     {}", outcome.video.title.cyan());
    println!(
        "  Downloads: {}",
        thousands(outcome.video.download_count).bright_yellow()
    );

    Ok(())
}

async fn handle_blog_action(action: BlogAction, storage: &Storage) -> Result<()> {
    let service = BlogService::new(storage.blog.clone());

    match action {
        BlogAction::List => {
            println!("{}", "📝 Blog Posts".bright_blue().bold());
            println!();

            let posts = service
                .list_posts()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to fetch blog posts: {}", e))?;

            if posts.is_empty() {
                println!("{}", "  No posts".yellow());
                return Ok(());
            }

            for post in &posts {
                println!(
                    "  {:<4} {}  {} {}",
                    post.id.to_string().bright_black(),
                    ja_date(&post.created_at).bright_black(),
                    post.title.cyan(),
                    format!("({})", post.author).bright_black()
                );
            }
            println!();
        }
        BlogAction::Show { id, html } => {
            let rendered = service.render_post(id).await.map_err(|e| match e {
                AppError::NotFound { .. } => anyhow::anyhow!("Blog post {} not found", id),
                other => anyhow::anyhow!("Failed to fetch blog posts: {}", other),
            })?;

            println!("{}", rendered.post.title.bright_white().bold());
            println!(
                "{}",
                format!(
                    "{} · {} · {}",
                    rendered.post.author,
                    ja_date(&rendered.post.created_at),
                    rendered.tags.join(", ")
                )
                .bright_black()
            );
            println!();
            if html {
                println!("{}", rendered.html);
            } else {
                println!("{}", rendered.post.content);
            }
        }
    }

    Ok(())
}

async fn handle_store_action(
    action: StoreAction,
    storage: &Storage,
    config: &Config,
) -> Result<()> {
    let backend = storage.backend.name();

    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking store...".bright_blue());

            match storage.backend.ping().await {
                Ok(()) => {
                    println!("{} {} store reachable", "✅".green(), backend.cyan());
                    if backend == "json" {
                        let file = config.data_file.display().to_string();
                        println!("  File: {}", file.bright_black());
                    }
                }
                Err(e) => {
                    println!("{} {} store error: {}", "❌".red(), backend.cyan(), e);
                    return Err(anyhow::anyhow!("Store check failed"));
                }
            }
        }
        StoreAction::Reset { yes } => {
            println!("{}", "♻️  Reset Store".bright_blue().bold());
            println!();
            println!(
                "{}",
                format!("All data in the {backend} store will be replaced by the seed data.")
                    .red()
                    .bold()
            );
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Reset the store?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            storage
                .backend
                .reset()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to reset store: {}", e))?;

            println!("{}", "✅ Store reset to seed data".green().bold());
        }
    }

    Ok(())
}
