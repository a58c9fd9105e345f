//! Fake Discord webhook endpoint for integration tests.
//!
//! Accepts `POST /api/webhooks/{id}/{token}` and records every JSON body per
//! webhook id. The response status is configurable per id.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Default)]
struct HookState {
    received: HashMap<String, Vec<serde_json::Value>>,
    statuses: HashMap<String, u16>,
}

/// Handle to the running fake webhook server
pub struct FakeDiscord {
    addr: SocketAddr,
    state: Arc<Mutex<HookState>>,
}

impl FakeDiscord {
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(HookState::default()));

        let app = Router::new()
            .route("/api/webhooks/{id}/{token}", post(execute_webhook))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Webhook URL for `id`
    pub fn url(&self, id: &str) -> String {
        format!("http://{}/api/webhooks/{}/secret-token", self.addr, id)
    }

    /// Answer every request for `id` with `status`
    pub fn respond_with(&self, id: &str, status: u16) {
        self.state
            .lock()
            .unwrap()
            .statuses
            .insert(id.to_string(), status);
    }

    pub fn received(&self, id: &str) -> Vec<serde_json::Value> {
        self.state
            .lock()
            .unwrap()
            .received
            .get(id)
            .cloned()
            .unwrap_or_default()
    }
}

async fn execute_webhook(
    Path((id, _token)): Path<(String, String)>,
    State(state): State<Arc<Mutex<HookState>>>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let mut state = state.lock().unwrap();
    state.received.entry(id.clone()).or_default().push(body);

    let status = state.statuses.get(&id).copied().unwrap_or(204);
    StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT)
}
