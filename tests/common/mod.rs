#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use shlink_launcher::application::services::ShorteningDispatcher;
use shlink_launcher::domain::entities::Settings;
use shlink_launcher::error::ShlinkError;
use shlink_launcher::infrastructure::http::ShlinkHttpClient;
use shlink_launcher::plugin::{Clipboard, HostActionExecutor, Notifier, ShlinkPlugin};

/// A request as received by [`FakeShlink`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub raw_body: String,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    body: String,
    delay: Duration,
}

/// In-process stand-in for a Shlink instance.
///
/// Answers `POST /rest/v3/short-urls` with a fixed status and body and records
/// every request it receives.
pub struct FakeShlink {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeShlink {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            captured: captured.clone(),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay,
        };

        let app = Router::new()
            .route("/rest/v3/short-urls", post(create_short_url))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn create_short_url(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.captured.lock().unwrap().push(CapturedRequest {
        path: "/rest/v3/short-urls".to_string(),
        api_key: header_value("x-api-key"),
        content_type: header_value("content-type"),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
        raw_body: body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Address where nothing is listening.
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Address of a server that answers one request with `status` and a body
/// cut off before its declared `Content-Length`.
pub async fn truncated_response_address(status: u16) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;

        let head = format!(
            "HTTP/1.1 {status} Error\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{{\"detail\""
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

/// Reads one HTTP request (headers plus `Content-Length` body) from `socket`.
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);

            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<(), ShlinkError> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(String, String)>>,
    pub errors: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_message(&self, title: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }

    fn show_error(&self, title: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

/// Plugin wired to the real HTTP client and recording collaborators.
pub fn create_test_plugin(
    settings: Settings,
) -> (ShlinkPlugin, Arc<RecordingClipboard>, Arc<RecordingNotifier>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let gateway = Arc::new(ShlinkHttpClient::new(Duration::from_secs(5)).unwrap());
    let executor = HostActionExecutor::new(
        Arc::new(ShorteningDispatcher::new(gateway)),
        clipboard.clone(),
        notifier.clone(),
    );

    let plugin = ShlinkPlugin::new(settings, Arc::new(executor));
    (plugin, clipboard, notifier)
}
