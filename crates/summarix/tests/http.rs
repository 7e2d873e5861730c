//! HTTP API tests that spawn `smx serve` and exercise the endpoints.

use std::fs;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;

const BIND: &str = "127.0.0.1:7713";

fn smx_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("smx");
    path
}

/// Kills the spawned server when the test ends, pass or fail.
struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn start_server(tmp: &TempDir) -> ServerGuard {
    let config = tmp.path().join("smx.toml");
    fs::write(&config, format!("[server]\nbind = \"{}\"\n", BIND)).unwrap();

    let child = Command::new(smx_binary())
        .args(["--config", config.to_str().unwrap(), "serve"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn smx serve");
    let guard = ServerGuard(child);

    let client = reqwest::blocking::Client::new();
    for _ in 0..50 {
        if client
            .get(format!("http://{}/health", BIND))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
        {
            return guard;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    panic!("server did not become healthy on {}", BIND);
}

#[test]
fn summarize_and_chat_round_trip() {
    let tmp = TempDir::new().unwrap();
    let _server = start_server(&tmp);
    let client = reqwest::blocking::Client::new();

    // Health reports the crate version.
    let health: serde_json::Value = client
        .get(format!("http://{}/health", BIND))
        .send()
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert!(health["version"].is_string());

    // Summarize.
    let resp = client
        .post(format!("http://{}/api/summarize", BIND))
        .json(&serde_json::json!({
            "text": "Bananas differ greatly. Apples grow on tall green trees. Apples apples apples.",
            "ratio": 0.34
        }))
        .send()
        .unwrap();
    assert!(resp.status().is_success());
    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body["summary"], "Apples apples apples.");
    assert!(body["stats"]["original_words"].as_u64().unwrap() > 0);

    // Chat about the summary.
    let resp = client
        .post(format!("http://{}/api/chat", BIND))
        .json(&serde_json::json!({
            "query": "how long is this summary",
            "summary": body["summary"]
        }))
        .send()
        .unwrap();
    assert!(resp.status().is_success());
    let reply: serde_json::Value = resp.json().unwrap();
    assert_eq!(reply["intent"], "summary_length");
    assert!(reply["answer"].as_str().unwrap().contains("Words"));

    // Validation failures use the error contract.
    let resp = client
        .post(format!("http://{}/api/summarize", BIND))
        .json(&serde_json::json!({ "text": "long enough text here.", "ratio": 1.5 }))
        .send()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let err: serde_json::Value = resp.json().unwrap();
    assert_eq!(err["error"]["code"], "invalid_ratio");

    let resp = client
        .post(format!("http://{}/api/chat", BIND))
        .json(&serde_json::json!({ "query": "", "summary": "anything here." }))
        .send()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let err: serde_json::Value = resp.json().unwrap();
    assert_eq!(err["error"]["code"], "empty_input");
}
