mod common;

use anyhow::Result;
use reqwest::{header, StatusCode};

use common::{client, TestServer, ADMIN_PASSWORD};

#[tokio::test]
async fn admin_with_valid_credentials() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = client()
        .get(server.url("/admin"))
        .basic_auth("admin", Some(ADMIN_PASSWORD))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[header::CONTENT_TYPE].to_str()?.starts_with("text/html"));
    assert_eq!(res.text().await?, "<html><h1>Super secret admin portal</h1></html>");

    Ok(())
}

#[tokio::test]
async fn admin_without_credentials_is_401() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = client().get(server.url("/admin")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await?, "401 - Unauthorized");

    Ok(())
}

#[tokio::test]
async fn admin_with_wrong_credentials_is_401() -> Result<()> {
    let server = TestServer::spawn().await?;

    let attempts = [
        ("admin", Some("wrong-password")),
        ("root", Some(ADMIN_PASSWORD)),
        ("admin", None),
    ];

    for (user, pass) in attempts {
        let res = client()
            .get(server.url("/admin"))
            .basic_auth(user, pass)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "user {} pass {:?}", user, pass);
        assert_eq!(res.text().await?, "401 - Unauthorized");
    }

    let res = client()
        .get(server.url("/admin"))
        .bearer_auth(ADMIN_PASSWORD)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn health_reports_record_count() -> Result<()> {
    let server = TestServer::spawn().await?;

    let body = client()
        .get(server.url("/health"))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["coasters"], 0);
    assert!(body["timestamp"].is_string(), "missing timestamp: {}", body);

    Ok(())
}
