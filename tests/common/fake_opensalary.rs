//! Fake OpenSalary API for integration tests.
//!
//! Serves `GET /api/salary-entries` from a script of canned responses on a
//! random port bound to 127.0.0.1. Once the script is down to its last
//! response, that response is repeated.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone)]
pub enum Reply {
    Items(Vec<serde_json::Value>),
    Status(u16),
    Raw(&'static str),
}

#[derive(Default)]
struct ApiState {
    script: VecDeque<Reply>,
    queries: Vec<HashMap<String, String>>,
}

/// Handle to the running fake API
pub struct FakeOpenSalary {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeOpenSalary {
    pub async fn start(script: Vec<Reply>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            script: script.into(),
            queries: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/salary-entries", get(salary_entries))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Query strings of every request served so far
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.lock().unwrap().queries.clone()
    }

    pub fn hits(&self) -> usize {
        self.state.lock().unwrap().queries.len()
    }
}

async fn salary_entries(
    Query(query): Query<HashMap<String, String>>,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> impl IntoResponse {
    let reply = {
        let mut state = state.lock().unwrap();
        state.queries.push(query);
        if state.script.len() > 1 {
            state.script.pop_front()
        } else {
            state.script.front().cloned()
        }
    };

    match reply {
        Some(Reply::Items(items)) => {
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Some(Reply::Status(code)) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Some(Reply::Raw(body)) => (StatusCode::OK, body).into_response(),
        None => (StatusCode::OK, Json(serde_json::json!({ "items": [] }))).into_response(),
    }
}
