use std::{
    collections::HashMap,
    net::TcpListener,
    path::Path,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path as UrlPath, Query},
    http::StatusCode,
    routing::get,
    Router,
};
use bytes::Bytes;

use crate::{app::env::Envy, images::util::storage::ImageStore, AppState};

/// Nothing listens on port 1, so connecting fails immediately.
pub static UNREACHABLE_API_URL: &str = "http://127.0.0.1:1/prompt";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub prompt: String,
    pub query: HashMap<String, String>,
}

pub struct FakeUpstream {
    pub url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Serves `body` with `status` for every `/prompt/:prompt` request.
pub async fn spawn_upstream(status: StatusCode, body: Bytes) -> FakeUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().route(
        "/prompt/:prompt",
        get(
            move |UrlPath(prompt): UrlPath<String>,
                  Query(query): Query<HashMap<String, String>>| {
                let recorded = recorded.clone();
                let body = body.clone();

                async move {
                    recorded
                        .lock()
                        .unwrap()
                        .push(RecordedRequest { prompt, query });
                    (status, body)
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(server);

    FakeUpstream {
        url: format!("http://{}/prompt", addr),
        requests,
    }
}

pub fn test_state(dir: &Path, api_url: &str) -> AppState {
    let envy = Envy {
        generated_dir: Some(dir.to_string_lossy().to_string()),
        pollinations_api_url: Some(api_url.to_string()),
        ..Default::default()
    };

    AppState {
        envy: Arc::new(envy),
        store: ImageStore::new(dir),
        client: reqwest::Client::new(),
    }
}
