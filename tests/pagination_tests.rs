mod common;

use common::{items, respond, StubClient};
use repo_duel::pagination::count_items;

const LISTING: &str = "https://api.test/repos/o/r/pulls?per_page=30&state=closed";

const LINK_LAST_4: &str = "link: <https://api.test/repositories/1/pulls?per_page=30&state=closed&page=2>; rel=\"next\", <https://api.test/repositories/1/pulls?per_page=30&state=closed&page=4>; rel=\"last\"";

#[tokio::test]
async fn test_count_empty_listing() {
    let client = StubClient::default().route(LISTING, respond(200, &["etag: 1"], "[]"));

    assert_eq!(count_items(&client, LISTING).await, 0);
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn test_count_single_page() {
    let client = StubClient::default().route(LISTING, respond(200, &["etag: 1"], &items(17)));

    assert_eq!(count_items(&client, LISTING).await, 17);
    assert_eq!(client.calls(), vec![LISTING.to_string()]);
}

#[tokio::test]
async fn test_count_full_single_page() {
    let client = StubClient::default().route(LISTING, respond(200, &["etag: 1"], &items(30)));

    assert_eq!(count_items(&client, LISTING).await, 30);
}

#[tokio::test]
async fn test_count_uses_last_page() {
    let last_page_url = format!("{LISTING}&page=4");
    let client = StubClient::default()
        .route(
            LISTING,
            respond(200, &["etag: 1", LINK_LAST_4, "vary: Accept"], &items(30)),
        )
        .route(&last_page_url, respond(200, &["etag: 2"], &items(5)));

    assert_eq!(count_items(&client, LISTING).await, 95);
    assert_eq!(client.calls(), vec![LISTING.to_string(), last_page_url]);
}

#[tokio::test]
async fn test_count_huge_last_page_saturates() {
    let link = "link: <https://api.test/x?per_page=30&page=9223372036854775807>; rel=\"last\"";
    let client = StubClient::default().route(LISTING, respond(200, &[link], &items(30)));

    assert_eq!(count_items(&client, LISTING).await, u64::MAX);
    assert_eq!(client.calls().len(), 2);
}

#[tokio::test]
async fn test_count_error_payload_is_zero() {
    let client = StubClient::default().route(
        LISTING,
        respond(404, &["status: 404"], r#"{"message":"Not Found"}"#),
    );

    assert_eq!(count_items(&client, LISTING).await, 0);
}

#[tokio::test]
async fn test_count_transport_failure_is_zero() {
    let client = StubClient::default();

    assert_eq!(count_items(&client, LISTING).await, 0);
}
