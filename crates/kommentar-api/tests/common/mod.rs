//! Throwaway HTTP/1.1 server standing in for the commentary API.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use kommentar_api::{ClientSettings, CommentaryClient};

type Route = dyn Fn(&str) -> (u16, String) + Send + Sync;

/// A running mock server and the requests it has seen.
pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    /// Raw request heads, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock").clone()
    }

    /// Request targets (`/api/commentaries?...`), in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| r.lines().next())
            .filter_map(|line| line.split_whitespace().nth(1))
            .map(str::to_string)
            .collect()
    }

    /// A client pointed at this server.
    pub fn client(&self) -> Arc<CommentaryClient> {
        Arc::new(
            CommentaryClient::new(&ClientSettings {
                base_url: self.base_url.clone(),
                ..ClientSettings::default()
            })
            .expect("client"),
        )
    }
}

/// Spawns a server on 127.0.0.1:0 answering every request through `route`,
/// which receives the request target and returns `(status, json body)`.
pub async fn spawn<F>(route: F) -> MockApi
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let route: Arc<Route> = Arc::new(route);

    let seen = requests.clone();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let seen = seen.clone();
            let route = route.clone();
            tokio::spawn(async move {
                let head = read_head(&mut stream).await;
                let target = head
                    .lines()
                    .next()
                    .and_then(|l| l.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                seen.lock().expect("lock").push(head);

                let (status, body) = route(&target);
                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    reason(status),
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes()).await;
            });
        }
    });

    MockApi {
        base_url: format!("http://127.0.0.1:{port}/api"),
        requests,
    }
}

/// Base URL of a port nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}

async fn read_head(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
