use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_page_shells::AppState;
use axum_page_shells::config::{AppConfig, ServerConfig, SiteConfig};
use axum_page_shells::server::build_router;
use axum_page_shells::ui::{Breakpoint, LayoutTokens};
use axum_test::TestServer;
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            static_dir: "static".to_string(),
        },
        site: SiteConfig {
            title: "Acme".to_string(),
            footer_text: "Footer text".to_string(),
        },
        layout: LayoutTokens::default(),
    }
}

fn server_with(config: AppConfig) -> TestServer {
    let app = build_router(AppState {
        config: Arc::new(config),
    });
    TestServer::new(app).expect("Failed to start test server")
}

fn test_server() -> TestServer {
    server_with(test_config())
}

const PAGES: [&str; 5] = [
    "/",
    "/about",
    "/account",
    "/account/profile",
    "/account/settings",
];

fn class_names(html: &str) -> Vec<&str> {
    html.match_indices("class=\"")
        .flat_map(|(i, m)| {
            let rest = &html[i + m.len()..];
            rest[..rest.find('"').unwrap()].split_whitespace()
        })
        .collect()
}

fn stylesheet_defines(css: &str, class: &str) -> bool {
    let selector = format!(".{}", class.replace(':', "\\:"));
    css.match_indices(&selector).any(|(i, m)| {
        css[i + m.len()..]
            .chars()
            .next()
            .is_some_and(|c| matches!(c, ' ' | '{' | ',' | ':' | '['))
    })
}

fn region_order(html: &str) -> Vec<&str> {
    html.match_indices("data-region=\"")
        .map(|(i, m)| {
            let rest = &html[i + m.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect()
}

#[tokio::test]
async fn home_uses_public_shell() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Home - Acme</title>"));
    assert_eq!(region_order(&html), ["header", "content", "footer"]);
    assert!(html.contains("Footer text"));
}

#[tokio::test]
async fn about_marks_header_link_active() {
    let server = test_server();

    let html = server.get("/about").await.text();
    assert!(html.contains("aria-current=\"page\">About</a>"));
    assert_eq!(region_order(&html), ["header", "content", "footer"]);
}

#[tokio::test]
async fn account_pages_nest_account_shell_in_public_shell() {
    let server = test_server();

    for (path, title) in [
        ("/account", "Account"),
        ("/account/profile", "Profile"),
        ("/account/settings", "Settings"),
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();

        let html = response.text();
        assert!(html.contains(&format!("<title>{title} - Acme</title>")));
        assert_eq!(
            region_order(&html),
            ["header", "content", "sidebar", "main", "footer"]
        );
        assert!(html.contains(&format!("<a href=\"{path}\" class=\"nav-link block")));
        assert!(html.contains("hidden md:block shrink-0"));
        assert!(html.contains("width: 250px"));
    }
}

#[tokio::test]
async fn account_nav_highlights_current_page() {
    let server = test_server();

    let html = server.get("/account/settings").await.text();
    assert!(html.contains("aria-current=\"page\">Settings</a>"));
    assert!(!html.contains("aria-current=\"page\">Profile</a>"));
}

#[tokio::test]
async fn unknown_path_renders_not_found_in_public_shell() {
    let server = test_server();

    let response = server.get("/missing/page").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let html = response.text();
    assert!(html.contains("<title>Not Found - Acme</title>"));
    assert_eq!(region_order(&html), ["header", "content", "footer"]);
}

#[tokio::test]
async fn layout_api_reports_tokens() {
    let server = test_server();

    let json = server.get("/api/layout").await.json::<serde_json::Value>();
    assert_eq!(json["breakpoint"], "md");
    assert_eq!(json["breakpoint_min_width"], 768);
    assert_eq!(json["sidebar_width"], 250);
    assert_eq!(json["max_content_width"], 1024);
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = build_router(AppState {
        config: Arc::new(test_config()),
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/app.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pages_reference_only_assets_that_exist() {
    let server = test_server();

    for path in PAGES {
        let html = server.get(path).await.text();
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/app.css">"#));
        assert!(!html.contains("<script"), "{path} has a script tag");
        assert!(!html.contains("hx-"), "{path} has htmx attributes");
        assert!(!html.contains("theme-switcher"), "{path} has a custom element");
    }

    server.get("/static/app.css").await.assert_status_ok();
}

#[tokio::test]
async fn every_emitted_class_is_styled() {
    let server = test_server();
    let css = std::fs::read_to_string("static/app.css").expect("Failed to read stylesheet");

    for path in PAGES {
        let html = server.get(path).await.text();
        for class in class_names(&html) {
            assert!(
                stylesheet_defines(&css, class),
                "{path} uses undefined class {class}"
            );
        }
    }
}

#[tokio::test]
async fn account_pages_are_padded_once() {
    let server = test_server();

    let html = server.get("/account/profile").await.text();
    assert_eq!(html.matches("padding:").count(), 1);
    assert!(html.contains("max-width: 1024px; padding: 24px"));
}

#[tokio::test]
async fn responsive_classes_follow_configured_breakpoint() {
    let mut config = test_config();
    config.layout.breakpoint = Breakpoint::Lg;
    let server = server_with(config);

    for path in PAGES {
        let html = server.get(path).await.text();
        assert!(!html.contains("md:"), "{path} still switches at md");
    }

    let html = server.get("/account").await.text();
    assert!(html.contains("hidden lg:block"));
    assert!(html.contains("lg:flex-row"));
}
