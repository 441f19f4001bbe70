//! Integration tests for the `unifi-network` binary.
//!
//! Argument parsing and error exit codes run without a controller; the
//! CRUD round trips run against a wiremock controller.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// The binary with `UNIFI_*` cleared and config lookups pointed at a
/// directory that does not exist.
fn unifi_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unifi-network");
    cmd.env("HOME", "/tmp/unifi-network-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unifi-network-test-nonexistent")
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("UNIFI_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

/// Command against a mock standalone controller with an API key.
fn mock_cmd(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = unifi_cmd();
    cmd.args(["--host", &server.uri(), "--api-key", "test-key", "--standalone"]);
    cmd
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

// ── Argument parsing ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unifi_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr:\n{stderr}");
}

#[test]
fn test_help_lists_commands() {
    unifi_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("get"))
            .and(predicate::str::contains("find"))
            .and(predicate::str::contains("create"))
            .and(predicate::str::contains("update"))
            .and(predicate::str::contains("delete"))
            .and(predicate::str::contains("--standalone")),
    );
}

#[test]
fn test_unknown_kind_is_usage_error() {
    unifi_cmd()
        .args(["list", "toaster"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_missing_credentials_exit_code() {
    unifi_cmd()
        .args(["list", "network"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No credentials configured"));
}

#[test]
fn test_invalid_host_exit_code() {
    unifi_cmd()
        .args(["--host", "not a url", "--api-key", "k", "list", "network"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("host"));
}

#[test]
fn test_unreachable_controller_exit_code() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "retry_max = 0").unwrap();

    unifi_cmd()
        .args(["--host", &format!("http://{addr}"), "--api-key", "k"])
        .arg("--config")
        .arg(config.path())
        .args(["list", "network"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not reach the controller"));
}

// ── CRUD against a mock controller ──────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/rest/networkconf"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "_id": "n1", "name": "Default", "purpose": "corporate" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    mock_cmd(&server)
        .args(["--output", "json-compact", "list", "network"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[{"_id":"n1","name":"Default","purpose":"corporate"}]"#,
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_missing_record_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/rest/networkconf/gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .mount(&server)
        .await;

    mock_cmd(&server)
        .args(["get", "network", "gone"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("network 'gone' not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_find_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/rest/wlanconf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "_id": "w1", "name": "Home" },
            { "_id": "w2", "name": "Guest" }
        ]))))
        .mount(&server)
        .await;

    mock_cmd(&server)
        .args(["--output", "json-compact", "find", "wlan", "--name", "Guest"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"_id":"w2","name":"Guest"}"#));

    mock_cmd(&server)
        .args(["find", "wifi", "--name", "Office"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("wlan 'Office' not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_static_route_from_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/s/default/rest/routing"))
        .and(body_partial_json(json!({
            "name": "lab",
            "type": "static-route",
            "static-route_type": "nexthop-route",
            "static-route_distance": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "_id": "r1", "name": "lab", "static-route_network": "10.9.0.0/16" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let mut payload = tempfile::NamedTempFile::new().unwrap();
    write!(
        payload,
        r#"{{"name":"lab","static-route_network":"10.9.0.0/16","static-route_nexthop":"192.168.1.2"}}"#
    )
    .unwrap();

    mock_cmd(&server)
        .args(["-o", "json-compact", "create", "static-route", "--file"])
        .arg(payload.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""_id":"r1""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_user_forgets_by_mac() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/stamgr"))
        .and(body_partial_json(json!({ "cmd": "forget-sta", "macs": ["aa:bb:cc:dd:ee:ff"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    mock_cmd(&server)
        .args(["delete", "user", "aa:bb:cc:dd:ee:ff"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_payload_is_reported() {
    let mut payload = tempfile::NamedTempFile::new().unwrap();
    write!(payload, "{{ not json").unwrap();

    // Payload parsing happens before any request, so the host is never dialed.
    unifi_cmd()
        .args(["--host", "http://127.0.0.1:9", "--api-key", "k"])
        .args(["create", "network", "--file"])
        .arg(payload.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON payload"));
}
