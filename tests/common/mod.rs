//! Loopback axum server for pipeline tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn json(path: &str, fixture: &str) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            content_type: "application/json",
            body: read_fixture(fixture).into_bytes(),
        }
    }

    pub fn bytes(path: &str, content_type: &'static str, body: &[u8]) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            content_type,
            body: body.to_vec(),
        }
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self {
            path: path.to_string(),
            status,
            content_type: "text/plain",
            body: b"error".to_vec(),
        }
    }
}

impl IntoResponse for Route {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap();
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

fn record(log: &RequestLog, uri: &Uri, headers: &HeaderMap) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    log.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        authorization,
    });
}

async fn not_found(
    State(log): State<RequestLog>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    record(&log, &uri, &headers);
    (StatusCode::NOT_FOUND, "not found")
}

fn router(routes: Vec<Route>, log: RequestLog) -> Router {
    let mut app: Router<RequestLog> = Router::new();
    for route in routes {
        let path = route.path.clone();
        let handler = move |State(log): State<RequestLog>, uri: Uri, headers: HeaderMap| {
            let route = route.clone();
            async move {
                record(&log, &uri, &headers);
                route
            }
        };
        app = app.route(&path, get(handler));
    }
    app.fallback(not_found).with_state(log)
}

pub struct MockServer {
    base: String,
    requests: RequestLog,
}

impl MockServer {
    /// Serves `routes` from a current-thread runtime on its own thread, so
    /// the blocking client can be driven from the test thread.
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = RequestLog::default();
        let app = router(routes, Arc::clone(&requests));

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self { base, requests }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {:?}: {}", path, e))
}

pub const AVATAR_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-avatar";
pub const LOGO_SVG: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

/// Routes for a complete HackTheBox profile with the given season fixture.
pub fn htb_routes(user_id: &str, season_fixture: &str) -> Vec<Route> {
    vec![
        Route::json(&format!("/api/v4/user/profile/basic/{}", user_id), "basic.json"),
        Route::json(
            &format!("/api/v4/user/profile/progress/machines/{}", user_id),
            "machines.json",
        ),
        Route::json(
            &format!("/api/v4/user/profile/progress/challenges/{}", user_id),
            "challenges.json",
        ),
        Route::json(&format!("/api/v4/season/user/{}/ranks", user_id), season_fixture),
        Route::bytes("/img/avatar.png", "image/png", AVATAR_PNG),
        Route::bytes("/img/logo-htb.svg", "image/svg+xml", LOGO_SVG),
        Route::bytes("/tiers/tier-hacker.svg", "image/svg+xml", LOGO_SVG),
        Route::bytes("/tiers/tier-guru.svg", "image/svg+xml", LOGO_SVG),
    ]
}
