use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Empty working directory plus a private home, so neither a stray local
/// config file nor the user's global one is picked up
pub struct TestDir {
    pub root: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("home/.config")).unwrap();
        Self { root }
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn config_home(&self) -> PathBuf {
        self.home().join(".config")
    }

    /// Write `nova-inventory/config.yaml` under the private config home
    #[allow(dead_code)]
    pub fn write_global_config(&self, content: &str) {
        let dir = self.config_home().join("nova-inventory");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yaml"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.root.path().join("nova-inventory.yaml"), content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}

#[derive(Clone)]
struct Bodies {
    token: Arc<Value>,
    servers: Arc<Value>,
}

/// Keystone v2.0 + Nova stand-in serving a fixed server list
///
/// `POST /v2.0/tokens` returns a catalog pointing back at this server and
/// `GET /nova/servers/detail` returns `servers`.
#[allow(dead_code)]
pub async fn fake_openstack(servers: Value) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let bodies = Bodies {
        token: Arc::new(json!({
            "access": {
                "token": {"id": "tok"},
                "serviceCatalog": [{
                    "type": "compute",
                    "endpoints": [{"region": "RegionOne", "publicURL": format!("{}/nova", base_url)}]
                }]
            }
        })),
        servers: Arc::new(json!({ "servers": servers })),
    };

    let app = Router::new()
        .route("/v2.0/tokens", post(tokens))
        .route("/nova/servers/detail", get(servers_detail))
        .with_state(bodies);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url
}

async fn tokens(State(bodies): State<Bodies>) -> Json<Value> {
    Json(bodies.token.as_ref().clone())
}

async fn servers_detail(State(bodies): State<Bodies>) -> Json<Value> {
    Json(bodies.servers.as_ref().clone())
}
