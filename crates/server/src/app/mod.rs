//! HTTP application wiring (Axum router + shared content).
//!
//! - `routes/`: page and system handlers
//! - `errors.rs`: fallback responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use storefront_content::SiteContent;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `serve`).
///
/// Content is shared read-only across requests; nothing mutates it after startup.
pub fn build_app(content: Arc<SiteContent>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::pages::router())
        .fallback(errors::not_found)
        .layer(ServiceBuilder::new().layer(Extension(content)))
}
