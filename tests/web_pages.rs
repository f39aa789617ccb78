mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use tower::ServiceExt;
use twitter_ranking::infrastructure::persistence::Dataset;
use twitter_ranking::routes::app_router;

#[tokio::test]
async fn test_home_page_renders_sections() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Twitter動画ダウンローダー"));
    assert!(body.contains("TWIVIDEO"));
    assert!(body.contains("1位"));
    assert!(body.contains("使用するときの注意点"));
    assert!(body.contains("よくある質問"));
    assert!(!body.contains("ダウンロード準備完了"));
}

#[tokio::test]
async fn test_download_form_rejects_invalid_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/")
        .form(&[("url", "https://example.com/video")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("有効なTwitter URLを入力してください"));
    assert!(!body.contains("ダウンロード準備完了"));
}

#[tokio::test]
async fn test_download_form_lists_formats() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/")
        .form(&[("url", "https://x.com/someone/status/1790000000000000000")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("ダウンロード準備完了"));
    assert!(body.contains("ツイートID: 1790000000000000000"));
    for quality in ["720p", "480p", "360p"] {
        assert!(body.contains(quality));
    }
}

#[tokio::test]
async fn test_download_form_does_not_record_download() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/")
        .form(&[("url", "https://twitter.com/i/status/1234567890")])
        .await
        .assert_status_ok();

    let json = server
        .get("/api/videos")
        .add_query_param("limit", 1)
        .await
        .json::<serde_json::Value>();
    assert_eq!(json[0]["download_count"], 1250);
}

#[tokio::test]
async fn test_ranking_page() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/ranking").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("24時間 twitter 保存 ランキング"));
    assert!(body.contains("面白いネコの動画"));
    assert!(body.contains("1,250"));
    assert!(body.contains("badge-gold"));
}

#[tokio::test]
async fn test_ranking_page_empty_state() {
    let mut data = Dataset::seeded(Utc::now());
    data.videos.clear();
    let server = common::create_test_server(common::create_state_with(data));

    let body = server.get("/ranking").await.text();

    assert!(body.contains("まだランキングデータがありません。"));
}

#[tokio::test]
async fn test_ranking_page_storage_failure() {
    let server = common::create_test_server(common::create_broken_state());

    let response = server.get("/ranking").await;

    response.assert_status_internal_server_error();
    assert!(!response.text().contains("disk unavailable"));
}

#[tokio::test]
async fn test_blog_list_page() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/blog").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("python実装twitterビデオダウンロードコード詳細"));
    assert!(body.contains("データアナリスト"));
}

#[tokio::test]
async fn test_blog_list_page_empty() {
    let mut data = Dataset::seeded(Utc::now());
    data.blog_posts.clear();
    let server = common::create_test_server(common::create_state_with(data));

    let body = server.get("/blog").await.text();

    assert!(body.contains("記事がありません"));
}

#[tokio::test]
async fn test_blog_detail_page() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/blog/1").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("language-python"));
    assert!(body.contains("<table>"));
    assert!(body.contains("この記事をシェア"));
    assert!(body.contains("share-facebook"));
    assert!(body.contains("一覧へ戻る"));
}

#[tokio::test]
async fn test_blog_detail_not_found() {
    let server = common::create_test_server(common::create_test_state());

    for path in ["/blog/999", "/blog/abc"] {
        let response = server.get(path).await;

        response.assert_status_not_found();
        assert!(response.text().contains("お探しの記事は見つかりませんでした"));
    }
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/does-not-exist").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(body.contains("404"));
    assert!(body.contains("ホームページへ戻る"));
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let server = common::create_test_server(common::create_test_state());

    server.get("/static/site.css").await.assert_status_ok();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(common::create_test_state(), false);

    let response = app
        .oneshot(Request::get("/ranking/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
