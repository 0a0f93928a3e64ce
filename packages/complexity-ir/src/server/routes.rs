//! Request routing
//!
//! - `GET /`          → HTML form
//! - `POST /analyze`  → `{"code": "...", "dialect": "c"}` → `{"complexity": "O(n)"}`
//!
//! Semantic errors are reported in place of the complexity, still with 200.

use super::http::{HttpRequest, HttpResponse};
use crate::config::AnalyzerConfig;
use crate::features::parsing::ports::Dialect;
use crate::pipeline::process_source;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    code: String,
    #[serde(default)]
    dialect: Option<String>,
}

pub fn handle_request(req: &HttpRequest, config: &AnalyzerConfig) -> HttpResponse {
    match (req.method.as_str(), req.path.as_str()) {
        ("GET", "/") => HttpResponse::html(INDEX_HTML),
        ("POST", "/analyze") => analyze(req, config),
        (_, "/") | (_, "/analyze") => HttpResponse::error(405, "Method not allowed"),
        _ => HttpResponse::error(404, "Not found"),
    }
}

fn analyze(req: &HttpRequest, config: &AnalyzerConfig) -> HttpResponse {
    let payload: AnalyzeRequest = match serde_json::from_slice(&req.body) {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::error(400, format!("Invalid JSON body: {}", e)),
    };

    let dialect = match payload.dialect.as_deref() {
        Some(name) => match Dialect::from_str(name) {
            Ok(dialect) => dialect,
            Err(e) => return HttpResponse::error(400, e),
        },
        None => config.default_dialect,
    };

    let report = process_source(&payload.code, dialect);
    match report.errors.first() {
        Some(first) => HttpResponse::json(200, &json!({ "error": first, "errors": report.errors })),
        None => HttpResponse::json(200, &json!({ "complexity": report.complexity })),
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Time Complexity Analyzer</title>
  <style>
    body { font-family: Georgia, serif; margin: 2rem; background: #f5f0e8; color: #1b1b1b; }
    textarea { width: 100%; height: 280px; font-family: monospace; }
    .row { display: flex; gap: 1rem; align-items: center; margin: 1rem 0; }
    .box { padding: 1rem; background: #fff7eb; border: 1px solid #d7c6b6; }
  </style>
</head>
<body>
  <h1>Time Complexity Analyzer</h1>
  <div class="box">
    <div class="row">
      <label for="dialect">Dialect:</label>
      <select id="dialect">
        <option value="c">C-like</option>
        <option value="python">Python-like</option>
      </select>
      <button onclick="analyze()">Analyze</button>
    </div>
    <textarea id="code" placeholder="Paste code here..."></textarea>
    <div class="row"><strong>Result:</strong> <span id="result">-</span></div>
  </div>
<script>
async function analyze() {
  const body = JSON.stringify({
    code: document.getElementById('code').value,
    dialect: document.getElementById('dialect').value,
  });
  const res = await fetch('/analyze', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body });
  const data = await res.json();
  document.getElementById('result').textContent = data.error || data.complexity || 'O(?)';
}
</script>
</body>
</html>
"#;
