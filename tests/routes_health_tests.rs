mod common;

use anyhow::Result;
use axum::http::{StatusCode, header};
use kilo_backend::{app::build_router, config::Config};
use serde_json::json;

use common::{body_json, get, send, test_app};

#[tokio::test]
async fn test_health_ok() -> Result<()> {
    let response = send(test_app(), get("/health")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_health_is_stable_across_calls() -> Result<()> {
    let app = test_app();
    for _ in 0..3 {
        let response = send(app.clone(), get("/health")).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?, json!({"status": "ok"}));
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() -> Result<()> {
    let response = send(test_app(), get("/does-not-exist")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await?, json!({"detail": "Not Found"}));
    Ok(())
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() -> Result<()> {
    let mut request = get("/health");
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:8081".parse()?);

    let response = send(test_app(), request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    Ok(())
}

#[tokio::test]
async fn test_cors_echoes_configured_origin() -> Result<()> {
    let config = Config {
        cors_allowed_origins: vec!["http://localhost:8081".parse()?],
        ..Config::default()
    };
    let app = build_router(&config);

    let mut allowed = get("/health");
    allowed
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:8081".parse()?);
    let response = send(app.clone(), allowed).await?;
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:8081"
    );

    let mut other = get("/health");
    other
        .headers_mut()
        .insert(header::ORIGIN, "http://evil.example".parse()?);
    let response = send(app, other).await?;
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
    Ok(())
}
