//! Storefront host: dev server, static build, and their configuration.

pub mod app;
pub mod config;
pub mod export;

use std::sync::Arc;

use anyhow::Context;

use storefront_content::SiteContent;
use storefront_ui::{PAGES, missing_routes};

use crate::config::ServerConfig;

/// Log every nav href that no registered page serves.
///
/// Links are expected to point at real routes; a miss is reported, not fatal.
pub fn report_missing_routes(content: &SiteContent) -> usize {
    let missing = missing_routes(content.nav_links(), PAGES);
    for href in &missing {
        tracing::warn!(%href, "navigation link has no matching page");
    }
    missing.len()
}

/// Bind and serve the site until the process is stopped.
pub async fn serve(config: ServerConfig, content: SiteContent) -> anyhow::Result<()> {
    report_missing_routes(&content);

    let app = app::build_app(Arc::new(content));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")
}
