use std::io::Write;
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tempfile::TempDir;
use tokio::time::sleep;

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

const DATASET: &str = r#"{
    "destinations": [
        {"id": 1, "name": "Great Wall", "region": "Beijing, China", "type": ["Historical"], "rating": 4.8},
        {"id": 2, "name": "Bondi Beach", "region": "Sydney, Australia", "type": ["Beach"], "rating": 4.5}
    ],
    "regions": [
        {"id": 1, "name": "Beijing, China"},
        {"id": 2, "name": "Sydney, Australia"}
    ]
}"#;

/// Write a dataset plus a minimal valid config into a temp dir, returning the
/// dir (keep it alive) and the config path.
fn write_fixture(port: u16) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();

    let dataset_path = dir.path().join("destinations.json");
    std::fs::File::create(&dataset_path)
        .unwrap()
        .write_all(DATASET.as_bytes())
        .unwrap();

    let config = format!(
        r#"
[catalog]
path = "{}"

[server]
host = "127.0.0.1"
port = {}

[favorites]
backend = "sqlite"
db_path = "{}"
"#,
        dataset_path.display(),
        port,
        dir.path().join("favorites.db").display()
    );

    let config_path = dir.path().join("config.toml");
    std::fs::File::create(&config_path)
        .unwrap()
        .write_all(config.as_bytes())
        .unwrap();

    (dir, config_path)
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_wanderlust"))
        .env("WANDERLUST_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

#[tokio::test]
async fn test_health_endpoint() {
    let port = get_available_port();
    let (_dir, config_path) = write_fixture(port);

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_favorites_survive_restart() {
    let port = get_available_port();
    let (_dir, config_path) = write_fixture(port);
    let client = Client::new();

    // First run: favorite a destination
    {
        let mut server = spawn_server(&config_path).await;
        assert!(
            wait_for_server(port, 40).await,
            "Server did not start in time"
        );

        let response = client
            .post(format!("http://127.0.0.1:{}/api/v1/favorites/1", port))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());

        server.kill().await.ok();
        let _ = server.wait().await;
    }

    // Second run: the favorite is still there
    {
        let mut server = spawn_server(&config_path).await;
        assert!(
            wait_for_server(port, 40).await,
            "Server did not restart in time"
        );

        let response = client
            .get(format!("http://127.0.0.1:{}/api/v1/favorites", port))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());

        let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(json["total"], 1);
        assert_eq!(json["items"][0]["id"], 1);

        server.kill().await.ok();
    }
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let port = get_available_port();
    let (_dir, config_path) = write_fixture(port);

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();

    // Hit an API route so there is something to report
    client
        .get(format!("http://127.0.0.1:{}/api/v1/destinations", port))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/metrics", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("wanderlust_http_requests_total"));

    server.kill().await.ok();
}
