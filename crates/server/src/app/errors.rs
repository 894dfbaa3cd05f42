use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};

use storefront_content::SiteContent;
use storefront_ui::{Page, render_page};

const NOT_FOUND_PAGE: Page = Page {
    path: "",
    title: "Page not found",
};

/// Fallback for unrouted paths: a 404 document that still carries the navbar.
pub async fn not_found(
    Extension(content): Extension<Arc<SiteContent>>,
    uri: Uri,
) -> axum::response::Response {
    tracing::debug!(path = %uri.path(), "no page for path");

    (
        StatusCode::NOT_FOUND,
        Html(render_page(&NOT_FOUND_PAGE, &content).into_string()),
    )
        .into_response()
}
