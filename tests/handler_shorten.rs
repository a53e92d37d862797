mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use jclip::utils::code_generator::{CODE_LENGTH, is_code_char};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com/page" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let short_url = json["shortUrl"].as_str().unwrap();
    assert!(short_url.starts_with("http://jclip.com/"));

    let code = common::code_from_short_url(short_url);
    assert_eq!(code.len(), CODE_LENGTH);
    assert!(code.chars().all(is_code_char));

    let stored: String = sqlx::query_scalar("SELECT original_url FROM urls WHERE short_url = $1")
        .bind(code)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com/page");
}

#[sqlx::test]
async fn test_shorten_missing_field(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    for body in [json!({}), json!({ "longUrl": "" }), json!({ "longUrl": null })] {
        let response = server.post("/shorten").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "The URL field is required." }));
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_invalid_format(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    for url in ["not a url", "localhost", "ftp://example.com", "https://example"] {
        let response = server
            .post("/shorten")
            .json(&json!({ "longUrl": url }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({
            "error": "Invalid URL format. Please provide a valid URL."
        }));
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_accepts_scheme_less_url(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "www.example.org/docs" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[sqlx::test]
async fn test_shorten_falsy_values_are_missing(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    for value in [json!(false), json!(0), json!(0.0)] {
        let response = server
            .post("/shorten")
            .json(&json!({ "longUrl": value }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "The URL field is required." }));
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_non_string_values_are_invalid(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    for value in [json!(42), json!(true), json!({ "url": "example.com" }), json!(["a", "b"])] {
        let response = server
            .post("/shorten")
            .json(&json!({ "longUrl": value }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({
            "error": "Invalid URL format. Please provide a valid URL."
        }));
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_single_element_array_is_accepted(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": ["example.com"] }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = common::code_from_short_url(json["shortUrl"].as_str().unwrap());
    let stored: String = sqlx::query_scalar("SELECT original_url FROM urls WHERE short_url = $1")
        .bind(code)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "example.com");
}

#[sqlx::test]
async fn test_shorten_non_json_body_is_missing(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server.post("/shorten").text("https://example.com").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "The URL field is required." }));
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_malformed_json_is_bad_request(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/shorten")
        .text("{\"longUrl\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}

#[sqlx::test]
async fn test_shorten_generates_distinct_codes(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let mut codes = std::collections::HashSet::new();
    for _ in 0..20 {
        let response = server
            .post("/shorten")
            .json(&json!({ "longUrl": "https://example.com" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let json = response.json::<serde_json::Value>();
        let code = common::code_from_short_url(json["shortUrl"].as_str().unwrap()).to_string();
        assert_eq!(code.len(), CODE_LENGTH);
        codes.insert(code);
    }

    // The same long URL is stored once per request; there is no deduplication.
    assert_eq!(codes.len(), 20);
    assert_eq!(common::count_links(&pool).await, 20);
}

#[sqlx::test]
async fn test_shorten_storage_failure_is_generic(pool: PgPool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    sqlx::query("DROP TABLE urls")
        .execute(&pool)
        .await
        .unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "An unexpected error occurred." }));
}
