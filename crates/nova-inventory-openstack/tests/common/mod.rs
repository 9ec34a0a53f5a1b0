use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        for (name, value) in self.headers {
            response.headers_mut().insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(&value).unwrap(),
            );
        }
        response
    }
}

type Handler = dyn Fn(&str, &Recorded) -> Reply + Send + Sync;

#[derive(Clone)]
struct FakeState {
    base_url: String,
    handler: Arc<Handler>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Keystone and Nova stand-in
///
/// Token requests go to `POST /v2.0/tokens` or `POST /v3/auth/tokens`;
/// every other `GET` (the catalog's compute endpoint) hits the same handler.
pub struct FakeOpenStack {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeOpenStack {
    /// Start serving; the handler receives the server's base URL and the request
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str, &Recorded) -> Reply + Send + Sync + 'static,
    {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = FakeState {
            base_url: base_url.clone(),
            handler: Arc::new(handler),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v2.0/tokens", post(respond))
            .route("/v3/auth/tokens", post(respond))
            .route("/{*path}", get(respond))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Reply {
    let request = Recorded {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    };
    let reply = (state.handler)(&state.base_url, &request);
    state.requests.lock().unwrap().push(request);
    reply
}
