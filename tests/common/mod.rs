#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use coaster_api::{app, auth::AdminPortal, store::CoasterStore, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

pub const ADMIN_PASSWORD: &str = "test-password";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub state: AppState,
}

impl TestServer {
    /// Start the router on a fresh port with an empty store. The server task
    /// lives on the calling test's runtime and stops with it.
    pub async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let state = AppState::new(CoasterStore::new(), AdminPortal::new(ADMIN_PASSWORD));
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        let router = app(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self { port, base_url, state };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Client that reports redirects instead of following them
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build reqwest client")
}

pub fn fury_325() -> Value {
    json!({
        "name": "Fury 325",
        "in_park": "Carowinds",
        "manufacturer": "B+M",
        "height": 99
    })
}

/// POST a coaster and return the created record
pub async fn create_coaster(server: &TestServer, payload: &Value) -> Result<Value> {
    let res = client()
        .post(server.url("/coasters"))
        .json(payload)
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "expected 201 Created, got {}",
        res.status()
    );
    Ok(res.json::<Value>().await?)
}
