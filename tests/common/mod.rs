#![allow(dead_code)]

use axum::Router;
use jclip::api::middleware::cors;
use jclip::config::DEFAULT_CORS_ORIGIN;
use jclip::routes::app_router;
use jclip::state::AppState;
use sqlx::PgPool;

pub const TEST_BASE_URL: &str = "http://jclip.com";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::from_pool(pool, TEST_BASE_URL)
}

pub fn create_test_app(pool: PgPool) -> Router {
    app_router(
        create_test_state(pool),
        cors::layer(DEFAULT_CORS_ORIGIN).unwrap(),
    )
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (original_url, short_url) VALUES ($1, $2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Extracts the short code from a `shortUrl` value.
pub fn code_from_short_url(short_url: &str) -> &str {
    short_url
        .strip_prefix(TEST_BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
}
