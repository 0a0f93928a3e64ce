//! Minimal HTTP/1.1 framing
//!
//! Only what the endpoint needs: a request line, headers, and a body sized by
//! `Content-Length`. Every response closes the connection.

use std::fmt;

/// Upper bound on the request line plus headers
pub const MAX_HEAD_BYTES: usize = 16 * 1024;

const HEAD_END: &[u8] = b"\r\n\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Path without the query string
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Why a buffer is not (yet) a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// More bytes are needed
    Incomplete,
    /// Declared body exceeds the configured limit
    TooLarge { length: usize, limit: usize },
    Malformed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Incomplete => f.write_str("Incomplete request"),
            ParseError::TooLarge { length, limit } => write!(
                f,
                "Request body of {} bytes exceeds the limit of {} bytes",
                length, limit
            ),
            ParseError::Malformed(reason) => write!(f, "Malformed request: {}", reason),
        }
    }
}

/// Parse a complete request from `buf`.
///
/// The body limit is checked against `Content-Length` as soon as the headers
/// are complete, before any body bytes are required.
pub fn parse_request(buf: &[u8], max_body_bytes: usize) -> Result<HttpRequest, ParseError> {
    let Some(head_len) = find(buf, HEAD_END) else {
        if buf.len() > MAX_HEAD_BYTES {
            return Err(ParseError::Malformed("header section too large".to_string()));
        }
        return Err(ParseError::Incomplete);
    };

    let head = std::str::from_utf8(&buf[..head_len])
        .map_err(|_| ParseError::Malformed("header section is not UTF-8".to_string()))?;
    let mut lines = head.split("\r\n");

    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target), Some(_version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::Malformed(format!("bad request line '{}'", request_line)));
    };
    let path = target.split('?').next().unwrap_or(target);

    let mut headers = Vec::new();
    for line in lines.filter(|l| !l.is_empty()) {
        let Some((name, value)) = line.split_once(':') else {
            return Err(ParseError::Malformed(format!("bad header line '{}'", line)));
        };
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let length = match headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
    {
        Some((_, value)) => value
            .parse::<usize>()
            .map_err(|_| ParseError::Malformed(format!("bad Content-Length '{}'", value)))?,
        None => 0,
    };
    if length > max_body_bytes {
        return Err(ParseError::TooLarge {
            length,
            limit: max_body_bytes,
        });
    }

    let body_start = head_len + HEAD_END.len();
    let available = buf.len() - body_start;
    if available < length {
        return Err(ParseError::Incomplete);
    }

    Ok(HttpRequest {
        method: method.to_string(),
        path: path.to_string(),
        headers,
        body: buf[body_start..body_start + length].to_vec(),
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: value.to_string(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into(),
        }
    }

    /// `{"error": message}` with the given status
    pub fn error(status: u16, message: impl fmt::Display) -> Self {
        Self::json(status, &serde_json::json!({ "error": message.to_string() }))
    }

    /// Serialized status line, headers and body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason_phrase(self.status),
            self.content_type,
            self.body.len()
        )
        .into_bytes();
        out.extend_from_slice(self.body.as_bytes());
        out
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
