use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::net::transport::Method;
use crate::net::types::ActivityType;
use crate::test_helpers::{self, PERSON_ID};

const ACTIVITY_ID: &str = "5f0c7c2e-1b7a-4f55-8d4e-2a6f0f1b9c33";

fn person_id() -> Uuid {
    Uuid::parse_str(PERSON_ID).unwrap()
}

fn activity_id() -> Uuid {
    Uuid::parse_str(ACTIVITY_ID).unwrap()
}

fn activity_json() -> serde_json::Value {
    json!({
        "id": ACTIVITY_ID,
        "year": 2024,
        "type": "EDUCATION",
        "title": "MSc",
        "description": null,
        "url": null
    })
}

// =============================================================
// Path helpers
// =============================================================

#[test]
fn person_endpoint_formats_expected_path() {
    assert_eq!(person_endpoint("42").unwrap(), "/persons/42");
}

#[test]
fn person_endpoint_escapes_claim_text() {
    assert_eq!(person_endpoint("a b?").unwrap(), "/persons/a%20b%3F");
}

#[test]
fn person_endpoint_keeps_claim_in_one_segment() {
    assert_eq!(person_endpoint("../activities/x").unwrap(), "/persons/..%2Factivities%2Fx");
    assert!(matches!(person_endpoint(".."), Err(ApiError::Encode(_))));
}

#[test]
fn activity_endpoints_format_expected_paths() {
    assert_eq!(
        person_activities_endpoint(person_id()),
        format!("/persons/{PERSON_ID}/activities")
    );
    assert_eq!(activity_endpoint(activity_id()), format!("/activities/{ACTIVITY_ID}"));
}

#[test]
fn paged_includes_query_only_for_search() {
    assert_eq!(paged("/persons", None, 2, 10), "/persons?page=2&size=10");
    assert_eq!(paged("/persons/search", Some("ada"), 0, 5), "/persons/search?q=ada&page=0&size=5");
}

// =============================================================
// Endpoint calls
// =============================================================

#[tokio::test]
async fn login_posts_credentials() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &json!({ "token": "tok" }));

    let reply = client
        .login(&LoginRequest { email: "ada@example.com".into(), password: "secret1".into() })
        .await
        .unwrap();

    assert_eq!(reply.token, "tok");
    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "/api/auth/login");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "ada@example.com", "password": "secret1" }));
}

#[tokio::test]
async fn fetch_person_targets_persons_endpoint() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &test_helpers::person_json());

    let person = client.fetch_person("42").await.unwrap();

    assert_eq!(person.first_name, "Ada");
    assert_eq!(transport.last_request().url, "/api/persons/42");
}

#[tokio::test]
async fn fetch_person_cannot_leave_persons_path() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &test_helpers::person_json());

    client.fetch_person("../activities/x").await.unwrap();
    assert_eq!(transport.last_request().url, "/api/persons/..%2Factivities%2Fx");

    let err = client.fetch_person("..").await.unwrap_err();
    assert!(matches!(err, ApiError::Encode(_)));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn search_persons_builds_paged_query() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &test_helpers::page_json(vec![test_helpers::person_json()]));

    let page = client.search_persons("love lace", 1, 20).await.unwrap();

    assert_eq!(page.content.len(), 1);
    assert_eq!(transport.last_request().url, "/api/persons/search?q=love%20lace&page=1&size=20");
}

#[tokio::test]
async fn list_persons_uses_default_page_size() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &test_helpers::page_json(vec![]));

    client.list_persons(0, DEFAULT_PAGE_SIZE).await.unwrap();

    assert_eq!(transport.last_request().url, "/api/persons?page=0&size=10");
}

#[tokio::test]
async fn update_person_puts_partial_body() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &test_helpers::person_json());

    let req = PersonUpdateRequest { website: Some("https://ada.dev".into()), ..Default::default() };
    client.update_person(person_id(), &req).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, format!("/api/persons/{PERSON_ID}"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["website"], "https://ada.dev");
    assert!(body["firstName"].is_null());
}

#[tokio::test]
async fn add_activity_posts_to_person() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &activity_json());

    let req = ActivityRequest {
        year: 2024,
        kind: ActivityType::Education,
        title: "MSc".into(),
        description: None,
        url: None,
    };
    let activity = client.add_activity(person_id(), &req).await.unwrap();

    assert_eq!(activity.kind, ActivityType::Education);
    assert_eq!(transport.last_request().url, format!("/api/persons/{PERSON_ID}/activities"));
}

#[tokio::test]
async fn delete_activity_sends_delete() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply(200, "");

    client.delete_activity(activity_id()).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, format!("/api/activities/{ACTIVITY_ID}"));
}

#[tokio::test]
async fn search_activities_builds_paged_query() {
    let (client, transport, _) = test_helpers::test_client();
    transport.reply_json(200, &test_helpers::page_json(vec![activity_json()]));

    let page = client.search_activities("MSc", 0, 10).await.unwrap();

    assert_eq!(page.content[0].title, "MSc");
    assert_eq!(transport.last_request().url, "/api/activities/search?q=MSc&page=0&size=10");
}
