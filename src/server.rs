use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::pages;
use crate::ui::{
    AccountNav, AccountShell, LayoutSlot, NavLink, PublicShell, SiteFooter, SiteHeader,
    document::html_document,
};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.address();
    let app = build_router(AppState { config });

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // HTML pages
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/account", get(account_overview_handler))
        .route("/account/profile", get(profile_handler))
        .route("/account/settings", get(settings_handler))
        // API
        .route("/api/layout", get(api_layout))
        // Static assets
        .nest_service("/static", static_dir)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Composition
// ─────────────────────────────────────────────────────────────────────────────

fn site_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Home"),
        NavLink::new("/about", "About"),
        NavLink::new("/account", "Account"),
    ]
}

fn public_shell(config: &AppConfig, section: &str) -> PublicShell<SiteHeader, SiteFooter> {
    PublicShell::new(
        SiteHeader::new(config.site.title.as_str(), site_links()).at(section),
        SiteFooter::new(config.site.footer_text.as_str()),
        config.layout,
    )
}

/// Render `content` inside the public shell as a full document.
fn public_page(config: &AppConfig, path: &str, title: &str, content: LayoutSlot) -> String {
    tracing::debug!(path = %path, shell = "public", "Rendering page");

    let tree = public_shell(config, path).render(content);
    html_document(title, &config.site.title, &tree)
}

/// Render `content` inside the account shell, nested in the public shell.
fn account_page(config: &AppConfig, path: &str, title: &str, content: LayoutSlot) -> String {
    tracing::debug!(path = %path, shell = "account", "Rendering page");

    // The public content region already pads; the nested shell must not.
    let account = AccountShell::new(AccountNav::standard().at(path), config.layout)
        .without_outer_padding()
        .render(content);
    let tree = public_shell(config, "/account").render(account.into());
    html_document(title, &config.site.title, &tree)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn home_handler(State(state): State<AppState>) -> Html<String> {
    Html(public_page(&state.config, "/", "Home", pages::home()))
}

async fn about_handler(State(state): State<AppState>) -> Html<String> {
    Html(public_page(&state.config, "/about", "About", pages::about()))
}

async fn account_overview_handler(State(state): State<AppState>) -> Html<String> {
    Html(account_page(
        &state.config,
        "/account",
        "Account",
        pages::account_overview(),
    ))
}

async fn profile_handler(State(state): State<AppState>) -> Html<String> {
    Html(account_page(
        &state.config,
        "/account/profile",
        "Profile",
        pages::profile(),
    ))
}

async fn settings_handler(State(state): State<AppState>) -> Html<String> {
    Html(account_page(
        &state.config,
        "/account/settings",
        "Settings",
        pages::settings(),
    ))
}

async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Html(public_page(
            &state.config,
            uri.path(),
            "Not Found",
            pages::not_found(uri.path()),
        )),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/layout - Layout tokens for client-side components.
async fn api_layout(State(state): State<AppState>) -> Json<serde_json::Value> {
    let tokens = state.config.layout;
    Json(json!({
        "breakpoint": tokens.breakpoint,
        "breakpoint_min_width": tokens.breakpoint.min_width(),
        "sidebar_width": tokens.sidebar_width,
        "max_content_width": tokens.max_content_width,
        "outer_padding": tokens.outer_padding,
    }))
}
