#![allow(dead_code)]

//! Shared fixtures for store integration tests

use emojitable_core::errors::{EmojiTableError, Result};
use emojitable_store::RecordSource;
use serde_json::Value;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// The two-record document used across the scenario tests
pub const SCENARIO_JSON: &str = r#"[
    {"short_name": "grinning", "unified": "1F600", "name": "GRINNING FACE"},
    {"short_name": "hash", "unified": "0023-FE0F", "name": "HASH KEY"}
]"#;

/// A local HTTP responder that answers exactly one request
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Wait for the request to be served and return its raw head
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

pub fn serve_once(status_line: &'static str, body: impl Into<Vec<u8>>) -> OneShotServer {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    OneShotServer {
        url: format!("http://{}/emoji.json", addr),
        handle,
    }
}

/// Client that ignores proxy settings from the environment
pub fn local_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}

/// In-memory source for pipeline tests
pub struct StaticSource(pub Vec<Value>);

impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn fetch_records(&self) -> Result<Vec<Value>> {
        Ok(self.0.clone())
    }
}

/// Source that always fails, as an unreachable upstream would
pub struct FailingSource;

impl RecordSource for FailingSource {
    fn describe(&self) -> String {
        "unreachable".to_string()
    }

    fn fetch_records(&self) -> Result<Vec<Value>> {
        Err(EmojiTableError::Fetch {
            source_name: self.describe(),
            reason: "connection refused".to_string(),
        })
    }
}
