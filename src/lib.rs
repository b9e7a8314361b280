//! Axum page shells
//!
//! A server-rendered site whose pages are composed from a shell and a body.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving HTML pages, a layout API, and static assets
//! - **Shells**: `PublicShell` (header / content / footer) and `AccountShell`
//!   (account nav sidebar beside the page), both pure functions of their content
//! - **Config**: layered defaults, config file, environment, and CLI flags
//!
//! # Modules
//!
//! - [`ui`]: content trees, layout tokens, region providers, and shells
//! - [`pages`]: page bodies placed into the shells
//! - [`server`]: router and handlers
//! - [`config`]: application configuration

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod pages;
pub mod server;
pub mod ui;

use crate::config::AppConfig;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
