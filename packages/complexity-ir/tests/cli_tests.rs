//! End-to-end tests for the `tca` binary

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::TempDir;

fn tca(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tca"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tca")
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_analyze_single_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "loop.c", "int main() { for (int i = 0; i < n; i++) {} }");

    let output = tca(&["analyze", &path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "O(n)\n");
}

#[test]
fn test_analyze_multiple_files_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.py", "for i in range(n):\n    for j in range(n):\n        pass\n");
    let b = write(&dir, "b.c", "while (i > 0) { i /= 2; }");

    let output = tca(&["analyze", &a, &b]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{}: O(n^2)\n{}: O(log n)\n", a, b)
    );
}

#[test]
fn test_semantic_errors_fail_unless_allowed() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "dup.c", "void f() {} void f() { for (i = 0; i < n; i++) {} }");

    let output = tca(&["analyze", &path]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Semantic error: Duplicate function name: f\n");

    let output = tca(&["analyze", "--allow-semantic-errors", &path]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Semantic error: Duplicate function name: f\nO(n)\n"
    );
}

#[test]
fn test_json_output_and_forced_dialect() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "script.txt", "i = 1\nwhile i < n:\n    i *= 2\n");

    let output = tca(&["analyze", "--dialect", "python", "--format", "json", &path]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["dialect"], "python");
    assert_eq!(json["complexity"], "O(log n)");
    assert_eq!(json["loop_count"], 1);
}

#[test]
fn test_config_default_dialect() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "tca.yaml", "version: 1\ndefault_dialect: python\nlog_filter: warn\n");
    let path = write(&dir, "noext", "for i in range(n):\n    pass\n");

    let output = tca(&["--config", &config, "analyze", &path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "O(n)\n");
}

#[test]
fn test_missing_file_and_bad_config() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.c");
    let output = tca(&["analyze", missing.to_str().unwrap()]);
    assert!(!output.status.success());

    let config = write(&dir, "bad.yaml", "version: 7\n");
    let output = tca(&["--config", &config, "analyze", "x.c"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported configuration version 7"));
    assert!(output.stdout.is_empty());
}
