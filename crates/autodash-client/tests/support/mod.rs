//! In-process stand-in for the automation backend

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path and query exactly as received
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    /// Serve canned `(path, status, body)` responses on an ephemeral port.
    /// Unknown paths answer 404 the way the backend does.
    pub async fn start(routes: Vec<(&str, u16, String)>) -> Self {
        let routes = routes
            .into_iter()
            .map(|(path, status, body)| {
                let status = StatusCode::from_u16(status).expect("valid status");
                (path.to_string(), (status, body))
            })
            .collect();

        let state = MockState {
            routes: Arc::new(routes),
            requests: Arc::default(),
        };

        let app = Router::new().fallback(respond).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let uri_text = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        uri: uri_text,
        headers,
        body,
    });

    let (status, body) = state.routes.get(uri.path()).cloned().unwrap_or((
        StatusCode::NOT_FOUND,
        r#"{"error": "Endpoint not found"}"#.to_string(),
    ));

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
