use super::fixtures::sample_songs;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use songbook_browser::Song;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A local HTTP server standing in for the static catalog host.
///
/// `/songs.json` serves the fixture songbook and counts requests;
/// `/flaky.json` fails the first `fail_first` requests with a 500 and then
/// serves the songbook, for exercising the loader's cache-nothing-on-failure
/// contract.
pub struct TestCatalogServer {
    addr: SocketAddr,
    requests: Arc<AtomicUsize>,
}

#[derive(Clone)]
struct ServerState {
    songs: Vec<Song>,
    requests: Arc<AtomicUsize>,
    remaining_failures: Arc<AtomicUsize>,
}

impl TestCatalogServer {
    pub async fn spawn() -> TestCatalogServer {
        Self::spawn_with_failures(0).await
    }

    pub async fn spawn_with_failures(fail_first: usize) -> TestCatalogServer {
        let requests = Arc::new(AtomicUsize::new(0));
        let state = ServerState {
            songs: sample_songs(),
            requests: requests.clone(),
            remaining_failures: Arc::new(AtomicUsize::new(fail_first)),
        };
        let router = Router::new()
            .route("/songs.json", get(serve_songs))
            .route("/flaky.json", get(serve_flaky))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestCatalogServer { addr, requests }
    }

    pub fn catalog_url(&self) -> String {
        format!("http://{}/songs.json", self.addr)
    }

    pub fn flaky_catalog_url(&self) -> String {
        format!("http://{}/flaky.json", self.addr)
    }

    pub fn missing_url(&self) -> String {
        format!("http://{}/missing.json", self.addr)
    }

    /// Requests served by `/songs.json` so far.
    pub fn catalog_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

async fn serve_songs(State(state): State<ServerState>) -> Json<Vec<Song>> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    Json(state.songs.clone())
}

async fn serve_flaky(State(state): State<ServerState>) -> Result<Json<Vec<Song>>, StatusCode> {
    if state
        .remaining_failures
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
    {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(state.songs.clone()))
}
