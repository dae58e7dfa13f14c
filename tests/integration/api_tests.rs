//! API integration tests
//!
//! These run against a live server with a migrated database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn create_book(client: &Client, title: &str) -> i32 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": title }))
        .send()
        .await
        .expect("Failed to send create request");

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["id"].as_i64().expect("No id in create response") as i32
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Moby Dick" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["id"].is_number());
    assert_eq!(body["messages"]["infos"], json!(["Object created."]));
    assert_eq!(body["messages"]["errors"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_blank_title() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["id"].is_null());
    assert_eq!(
        body["messages"]["errors"],
        json!(["Book title must not be empty."])
    );
}

#[tokio::test]
#[ignore]
async fn test_list_books_refreshes_pages_count() {
    let client = Client::new();
    create_book(&client, "A Listed Book").await;

    let response = client
        .get(format!("{}/books?page_number=1&page_size=5", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"].is_array());
    assert_eq!(body["pager"]["page_number"], 1);
    assert_eq!(body["pager"]["page_size"], 5);
    assert!(body["pager"]["pages_count"].as_i64().unwrap() >= 1);
}

#[tokio::test]
#[ignore]
async fn test_update_book() {
    let client = Client::new();
    let id = create_book(&client, "Before Update").await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "version": 0, "title": "After Update" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["messages"]["infos"], json!(["Object updated."]));
    assert_eq!(body["messages"]["warns"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_update_book_with_stale_version_warns() {
    let client = Client::new();
    let id = create_book(&client, "Contended Book").await;

    // First update bumps the version to 1
    client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "version": 0, "title": "First Writer" }))
        .send()
        .await
        .expect("Failed to send request");

    // Second update still submits version 0
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "version": 0, "title": "Second Writer" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["messages"]["warns"],
        json!(["Object updated or deleted by another user. Please try again with actual data."])
    );
    assert_eq!(body["messages"]["infos"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_delete_mixed_existing_and_missing_ids() {
    let client = Client::new();
    let existing = create_book(&client, "To Be Deleted").await;
    let missing = 999_999_999;

    let response = client
        .post(format!("{}/books/delete", BASE_URL))
        .json(&json!({ "ids": [existing, missing] }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["messages"]["infos"], json!(["Object deleted."]));
    assert_eq!(body["messages"]["warns"], json!(["Object already deleted."]));
}

#[tokio::test]
#[ignore]
async fn test_download_book() {
    let client = Client::new();
    let id = create_book(&client, "Downloadable").await;

    let response = client
        .get(format!("{}/books/{}/download", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"Downloadable\""
    );

    let bytes = response.bytes().await.expect("Failed to read body");
    assert_eq!(&bytes[..], b"a Book Content");
}

#[tokio::test]
#[ignore]
async fn test_download_book_with_non_numeric_id() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/abc/download", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Content of book with id 'abc' not found.");
}

#[tokio::test]
#[ignore]
async fn test_set_page_size_rejects_non_positive_value() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/pager/page-size", BASE_URL))
        .json(&json!({
            "pager": { "page_number": 2, "page_size": 13 },
            "page_size": -1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["pager"]["page_size"], 10);
    assert_eq!(
        body["messages"]["errors"],
        json!(["Negative or zero page size is not allowed. Defaults used."])
    );
}

#[tokio::test]
#[ignore]
async fn test_sort_produces_no_messages() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/pager/sort", BASE_URL))
        .json(&json!({
            "pager": { "page_number": 2, "page_size": 13 },
            "column": "title",
            "direction": "desc"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["pager"]["sorter"]["direction"], "desc");
    assert_eq!(body["pager"]["page_number"], 2);
    assert_eq!(body["messages"]["infos"], json!([]));
    assert_eq!(body["messages"]["warns"], json!([]));
    assert_eq!(body["messages"]["errors"], json!([]));
}
