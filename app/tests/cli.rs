//! Runs the `jsonform` binary against temporary documents.

use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};

fn jsonform(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jsonform"))
        .args(args)
        .env_remove("JSONFORM_INPUT")
        .env_remove("JSONFORM_CONFIG")
        .env_remove("JSONFORM_READ_ONLY")
        .env_remove("JSONFORM_SHOW_PATHS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run jsonform")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let file = dir.join(name);
    std::fs::write(&file, content).unwrap();
    file.to_string_lossy().into_owned()
}

#[test]
fn test_get_from_sample() {
    let output = jsonform(&["get", "integrations[1].name"]);
    assert_eq!(stdout_json(&output), json!("Email Service"));
}

#[test]
fn test_set_coerces_by_field_kind() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "doc.json", r#"{"server":{"port":3000,"host":"a"}}"#);

    let output = jsonform(&["--input", &input, "set", "server.port", "8080"]);
    assert_eq!(
        stdout_json(&output),
        json!({"server": {"port": 8080, "host": "a"}})
    );

    let output = jsonform(&["--input", &input, "set", "server.host", "--json", "[1]"]);
    assert_eq!(
        stdout_json(&output),
        json!({"server": {"port": 3000, "host": [1]}})
    );
}

#[test]
fn test_delete_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "doc.json", r#"{"tags":["a","b","c"]}"#);

    let output = jsonform(&["--input", &input, "delete", "tags[0]"]);
    assert_eq!(stdout_json(&output), json!({"tags": ["b", "c"]}));

    let output = jsonform(&["--input", &input, "export"]);
    assert_eq!(stdout_json(&output), json!({"tags": ["a", "b", "c"]}));
}

#[test]
fn test_apply_edits_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "doc.json", r#"{"a":1}"#);
    let edits = write_file(
        dir.path(),
        "edits.json",
        r#"[{"op":"set","path":["b"],"value":[true]},{"op":"delete","path":["a"]}]"#,
    );

    let output = jsonform(&["--input", &input, "apply", &edits]);
    assert_eq!(stdout_json(&output), json!({"b": [true]}));
}

#[test]
fn test_invalid_array_index_fails() {
    let output = jsonform(&["set", "integrations.first", "x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid array index `first` at integrations"), "{stderr}");
}

#[test]
fn test_read_only_rejects_set() {
    let output = jsonform(&["--read-only", "set", "appName", "x"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("read-only"));
}

#[test]
fn test_show_outline() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "doc.json", r#"{"list":[1]}"#);
    let config = write_file(dir.path(), "editor.json", r#"{"root_label":"Doc"}"#);

    let output = jsonform(&["--input", &input, "--config", &config, "--hide-paths", "show"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "▼ Doc (1 fields)\n  ▼ list (1 items)\n    Item 1: 1\n"
    );

    let output = jsonform(&["--input", &input, "show", "--json"]);
    let rows = stdout_json(&output);
    assert_eq!(rows[2]["path"], json!(["list", 0]));
    assert_eq!(rows[2]["display_path"], json!("list[0]"));
    assert_eq!(rows[2]["detail"], json!({"type": "field", "value": 1}));
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let output = jsonform(&["set", "integrations[18446744073709551615]", "x"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid array index"), "{stderr}");
}
