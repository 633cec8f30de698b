//! Shared fixtures for unit tests: a scripted transport and canned payloads.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::json;

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::util::storage::{KeyValueStore, MemoryStore};

pub const PERSON_ID: &str = "d2b2f1e8-6c1a-4c8e-9a53-0f5f5f0e2a11";

/// Token whose claim decodes to `{"sub":"42"}`.
pub const TOKEN_SUB_42: &str = "abc.eyJzdWIiOiI0MiJ9.sig";

/// Token whose claim decodes to `{"sub": PERSON_ID, "email": ...}`.
pub const TOKEN_SUB_PERSON: &str =
    "h.eyJzdWIiOiJkMmIyZjFlOC02YzFhLTRjOGUtOWE1My0wZjVmNWYwZTJhMTEiLCJlbWFpbCI6ImFkYUBleGFtcGxlLmNvbSJ9.s";

/// Replays queued results in order and records every request it sees.
/// An exhausted queue answers with a network error.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: impl Into<String>) {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.into() }));
    }

    pub fn reply_json(&self, status: u16, body: &serde_json::Value) {
        self.reply(status, body.to_string());
    }

    pub fn fail(&self, err: TransportError) {
        self.replies.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
    }
}

/// Client over a fresh mock transport and store.
pub fn test_client() -> (ApiClient, Rc<MockTransport>, Rc<MemoryStore>) {
    let transport = MockTransport::new();
    let store = Rc::new(MemoryStore::new());
    let client = ApiClient::new(
        ClientConfig::default(),
        transport.clone() as Rc<dyn Transport>,
        store.clone() as Rc<dyn KeyValueStore>,
    );
    (client, transport, store)
}

pub fn person_json() -> serde_json::Value {
    json!({
        "id": PERSON_ID,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "website": "https://ada.dev",
        "birthDate": "1815-12-10",
        "activities": []
    })
}

pub fn page_json(content: Vec<serde_json::Value>) -> serde_json::Value {
    let total = content.len();
    json!({
        "content": content,
        "totalElements": total,
        "totalPages": 1,
        "number": 0,
        "size": 10
    })
}
