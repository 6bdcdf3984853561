use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use kennel_server::{build_router, AppState};
use kennel_store::Catalog;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(Arc::new(Catalog::new())))
}

async fn seeded_app() -> Router {
    let catalog = Catalog::new();
    catalog.seed_defaults().await.unwrap();
    build_router(AppState::new(Arc::new(catalog)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_with(app, method, uri, body, None).await
}

async fn send_with(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn active_css_is_null_without_active_records() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/themes/active-css", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "css": null }));

    let (_, body) = send(&app, Method::GET, "/api/button-presets/active-css", None).await;
    assert_eq!(body, json!({ "css": null }));
}

#[tokio::test]
async fn seeded_site_serves_both_stylesheets() {
    let app = seeded_app().await;
    let (_, theme) = send(&app, Method::GET, "/api/themes/active-css", None).await;
    let css = theme["css"].as_str().unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--primary: 229 76% 66%;"));

    let (_, preset) = send(&app, Method::GET, "/api/button-presets/active-css", None).await;
    assert!(preset["css"]
        .as_str()
        .unwrap()
        .contains("--button-primary: #667eea;"));
}

#[tokio::test]
async fn by_slug_returns_css_and_summary_or_404() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/api/button-presets/by-slug/classic", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["preset"]["slug"], "classic");
    assert_eq!(body["preset"]["borderRadius"], "rounded");
    assert!(body["css"].as_str().unwrap().contains("--button-text:"));

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/button-presets/by-slug/unknown-slug",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["css"], Value::Null);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn theme_lifecycle_over_http() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/themes",
        Some(json!({
            "name": "Violet",
            "slug": "Violet",
            "colors": { "primary": "#8b5cf6" },
            "styles": { "buttonStyle": "pill" },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["theme"]["id"].as_u64().unwrap();
    assert_eq!(body["theme"]["slug"], "violet");
    assert_eq!(body["theme"]["isDefault"], false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/themes/apply",
        Some(json!({ "themeId": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"]["slug"], "violet");

    let (_, body) = send(&app, Method::GET, "/api/themes/active-css", None).await;
    let css = body["css"].as_str().unwrap();
    assert!(css.contains("--primary: 258 90% 66%;"));
    assert!(css.contains("--button-style: pill;"));

    let (_, body) = send(&app, Method::GET, "/api/settings", None).await;
    assert_eq!(body["settings"]["theme"], "violet");
    assert_eq!(body["settings"]["primaryColor"], "#8b5cf6");
    assert_eq!(body["settings"]["buttonStyle"], "pill");

    let (_, body) = send(&app, Method::GET, "/api/themes", None).await;
    let themes = body["themes"].as_array().unwrap();
    assert_eq!(themes.len(), 2);
    assert_eq!(themes[0]["slug"], "violet");
    assert_eq!(
        themes.iter().filter(|t| t["isDefault"] == true).count(),
        1
    );

    let (status, body) = send(&app, Method::DELETE, &format!("/api/themes/{id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("default"));
}

#[tokio::test]
async fn patch_reports_whether_saved_record_is_active() {
    let app = seeded_app().await;
    let (_, body) = send(&app, Method::GET, "/api/button-presets", None).await;
    let classic_id = body["presets"][0]["id"].as_u64().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/button-presets/{classic_id}"),
        Some(json!({ "borderRadius": "square" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isActive"], true);
    assert_eq!(body["preset"]["borderRadius"], "square");

    let (_, body) = send(&app, Method::GET, "/api/button-presets/active-css", None).await;
    assert!(body["css"]
        .as_str()
        .unwrap()
        .contains("--button-border-radius: 0;"));

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/button-presets",
        Some(json!({ "name": "Other", "slug": "other" })),
    )
    .await;
    let other_id = body["preset"]["id"].as_u64().unwrap();
    let (_, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/button-presets/{other_id}"),
        Some(json!({ "name": "Renamed" })),
    )
    .await;
    assert_eq!(body["isActive"], false);
}

#[tokio::test]
async fn validation_errors_are_400() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/themes",
        Some(json!({ "name": "", "slug": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and slug are required");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/themes",
        Some(json!({ "name": "Bad", "slug": "bad", "colors": { "primary": "purple" } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::POST, "/api/themes/apply", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Theme ID is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/button-presets/apply",
        Some(json!({ "presetId": 999 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Button preset not found");
}

#[tokio::test]
async fn clearing_the_global_preset() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::POST, "/api/button-presets/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["activeButtonPreset"], Value::Null);

    let (_, body) = send(&app, Method::GET, "/api/button-presets/active-css", None).await;
    assert_eq!(body["css"], Value::Null);
}

#[tokio::test]
async fn admin_routes_require_the_configured_token() {
    let catalog = Arc::new(Catalog::new());
    let app = build_router(AppState::new(catalog).with_admin_token(Some("s3cret".into())));

    let (status, body) = send(&app, Method::GET, "/api/themes", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = send_with(&app, Method::GET, "/api/themes", None, Some("wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_with(&app, Method::GET, "/api/themes", None, Some("s3cret")).await;
    assert_eq!(status, StatusCode::OK);

    // public endpoints stay open
    let (status, _) = send(&app, Method::GET, "/api/themes/active-css", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
}
