//! Shared test utilities for the service and screen integration tests.
//!
//! Provides `FakeBackend`, an `HttpBackend` that replays queued responses
//! and records every request it receives, and `TestApi`, a builder that
//! wires it into a full `Services` set.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use lavajato::api::{HttpBackend, HttpRequest, HttpResponse, TransportError};
use lavajato::models::Session;
use lavajato::{Services, SessionHolder};

pub const BASE_URL: &str = "http://api.test";

/// Replays queued responses in order and records the requests.
///
/// Clones share the same queue and log, so a test can keep one handle while
/// the services own another.
#[derive(Clone, Default)]
pub struct FakeBackend {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
    }

    pub fn push_json(&self, status: u16, body: &Value) {
        self.push(status, body.to_string());
    }

    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The only request made so far. Panics if there were none or several.
    pub fn single_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpBackend for FakeBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("no response queued")))
    }
}

/// A services set over a `FakeBackend`.
pub struct TestApi {
    pub backend: FakeBackend,
    pub services: Services<FakeBackend>,
}

#[allow(dead_code)]
impl TestApi {
    pub fn new() -> Self {
        Self::with_session(SessionHolder::new())
    }

    pub fn logged_in() -> Self {
        Self::with_session(SessionHolder::with_session(session()))
    }

    pub fn with_session(session: SessionHolder) -> Self {
        let backend = FakeBackend::new();
        let services = Services::new(backend.clone(), BASE_URL, session).unwrap();
        Self { backend, services }
    }

    pub fn session(&self) -> &SessionHolder {
        &self.services.session
    }
}

// ============================================================================
// Fixtures
// ============================================================================

#[allow(dead_code)]
pub fn session() -> Session {
    Session {
        user_id: 7,
        display_name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        token: "tok-abc-123".to_string(),
        profile_photo: None,
    }
}

#[allow(dead_code)]
pub fn session_json() -> Value {
    json!({
        "id": 7,
        "nome": "Ana Souza",
        "email": "ana@example.com",
        "token": "tok-abc-123"
    })
}

#[allow(dead_code)]
pub fn washery_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "nome": name,
        "endereco": "SQN 210 Bloco A",
        "telefone": "(61) 3333-4444",
        "email": "contato@example.com",
        "cnpj": "12.345.678/0001-90",
        "latLong": "-15.7801,-47.9292",
        "notaMedia": 4.5,
        "totalAvaliacoes": 12,
        "status": "ATIVO",
        "tiposServico": ["Lavagem simples", "Polimento"]
    })
}

/// A page of washeries `first..first + count`.
#[allow(dead_code)]
pub fn page_json(first: i64, count: i64, number: u32, total_pages: u32) -> Value {
    let content: Vec<Value> = (first..first + count)
        .map(|id| washery_json(id, &format!("Lava Jato {}", id)))
        .collect();
    json!({
        "content": content,
        "totalElements": 25,
        "totalPages": total_pages,
        "size": 10,
        "number": number,
        "first": number == 0,
        "last": number + 1 >= total_pages
    })
}

#[allow(dead_code)]
pub fn user_json(name: &str, email: &str) -> Value {
    json!({ "id": 7, "nome": name, "email": email })
}
