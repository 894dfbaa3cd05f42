use std::sync::Arc;

use axum::{Extension, Router, response::Html, routing::get};

use storefront_content::SiteContent;
use storefront_ui::{PAGES, Page, render_page};

/// One GET route per registered page.
pub fn router() -> Router {
    PAGES.iter().fold(Router::new(), |router, page| {
        router.route(
            page.path,
            get(move |Extension(content): Extension<Arc<SiteContent>>| async move {
                render(page, &content)
            }),
        )
    })
}

fn render(page: &Page, content: &SiteContent) -> Html<String> {
    tracing::debug!(path = page.path, "rendering page");
    Html(render_page(page, content).into_string())
}
