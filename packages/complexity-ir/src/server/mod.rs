//! HTTP endpoint
//!
//! One tokio task per connection, one request per connection. A request must
//! arrive in full within `server.read_timeout_ms`. Framing and
//! routing are pure functions (`http::parse_request`, `routes::handle_request`);
//! this module only moves bytes.

pub mod http;
pub mod routes;

pub use http::{parse_request, HttpRequest, HttpResponse, ParseError};
pub use routes::handle_request;

use crate::config::AnalyzerConfig;
use crate::errors::{ComplexityError, Result};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const READ_CHUNK: usize = 8 * 1024;

/// Bind `config.server.addr` and serve until the process exits
pub async fn serve(config: AnalyzerConfig) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ComplexityError::server(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!(addr = %listener.local_addr()?, "serving on http://{}", addr);
    serve_listener(listener, Arc::new(config)).await
}

/// Accept loop over an already bound listener
pub async fn serve_listener(listener: TcpListener, config: Arc<AnalyzerConfig>) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let config = Arc::clone(&config);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &config).await {
                tracing::warn!(%peer, error = %e, "connection failed");
            }
        });
    }
}

async fn handle_connection(mut stream: TcpStream, config: &AnalyzerConfig) -> Result<()> {
    let read = read_request(&mut stream, config.server.max_body_bytes);
    let response = match tokio::time::timeout(config.server.read_timeout(), read).await {
        Ok(result) => match result? {
            Ok(request) => {
                tracing::debug!(method = %request.method, path = %request.path, "request");
                handle_request(&request, config)
            }
            Err(e @ ParseError::TooLarge { .. }) => HttpResponse::error(413, e),
            Err(e) => HttpResponse::error(400, e),
        },
        Err(_) => {
            tracing::debug!(timeout_ms = config.server.read_timeout_ms, "request read timed out");
            HttpResponse::error(408, "request not received in time")
        }
    };

    stream.write_all(&response.to_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Read until `parse_request` accepts the buffer, rejects it, or the peer
/// stops sending
async fn read_request(
    stream: &mut TcpStream,
    max_body_bytes: usize,
) -> Result<std::result::Result<HttpRequest, ParseError>> {
    let mut buf = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n > 0 {
            buf.extend_from_slice(&chunk[..n]);
        }
        match parse_request(&buf, max_body_bytes) {
            Err(ParseError::Incomplete) if n > 0 => continue,
            Err(ParseError::Incomplete) => {
                return Ok(Err(ParseError::Malformed(
                    "connection closed before request was complete".to_string(),
                )))
            }
            other => return Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn spawn_server(config: AnalyzerConfig) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_listener(listener, Arc::new(config)));
        addr
    }

    async fn send(addr: std::net::SocketAddr, raw: &[u8]) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(raw).await.unwrap();
        let mut out = Vec::new();
        stream.read_to_end(&mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_socket_round_trip() {
        let addr = spawn_server(AnalyzerConfig::default()).await;
        let body = r#"{"code":"for (i = 0; i < n; i++) {}","dialect":"c"}"#;
        let raw = format!(
            "POST /analyze HTTP/1.1\r\nHost: test\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );

        let response = send(addr, raw.as_bytes()).await;
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        let json_start = response.find("\r\n\r\n").unwrap() + 4;
        let json: Value = serde_json::from_str(&response[json_start..]).unwrap();
        assert_eq!(json["complexity"], "O(n)");
    }

    #[tokio::test]
    async fn test_body_limit_returns_413() {
        let mut config = AnalyzerConfig::default();
        config.server.max_body_bytes = 16;
        let addr = spawn_server(config).await;

        let raw = b"POST /analyze HTTP/1.1\r\nContent-Length: 100\r\n\r\n";
        let response = send(addr, raw).await;
        assert!(response.starts_with("HTTP/1.1 413 Payload Too Large"));
    }

    #[tokio::test]
    async fn test_stalled_request_times_out() {
        let mut config = AnalyzerConfig::default();
        config.server.read_timeout_ms = 100;
        let addr = spawn_server(config).await;

        // Headers are never finished and the write side stays open
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(b"POST /analyze HTTP/1.1\r\nContent-").await.unwrap();

        let mut out = Vec::new();
        let read = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            stream.read_to_end(&mut out),
        )
        .await;
        assert!(read.is_ok(), "server kept the connection open");
        assert!(String::from_utf8(out).unwrap().starts_with("HTTP/1.1 408 Request Timeout"));
    }

    #[tokio::test]
    async fn test_truncated_request_returns_400() {
        let addr = spawn_server(AnalyzerConfig::default()).await;
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(b"GET / HTTP/1.1\r\n").await.unwrap();
        stream.shutdown().await.unwrap();

        let mut out = Vec::new();
        stream.read_to_end(&mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("HTTP/1.1 400"));
    }
}
