//! Page registry and document layout.

use maud::{DOCTYPE, Markup, html};

use storefront_content::SiteContent;
use storefront_core::{Href, NavLink};

use crate::navbar::navbar;

/// A routable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
}

pub const HOME: Page = Page {
    path: "/",
    title: "Home",
};

pub const PRODUCTS: Page = Page {
    path: "/products",
    title: "Products",
};

/// Every page the site serves.
pub static PAGES: &[Page] = &[HOME, PRODUCTS];

pub fn find_page(path: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.path == path)
}

/// Nav hrefs that no page in `pages` serves. Absolute URLs are skipped.
pub fn missing_routes<'a>(links: &'a [NavLink], pages: &[Page]) -> Vec<&'a Href> {
    links
        .iter()
        .map(|link| &link.href)
        .filter(|href| href.as_str().starts_with('/'))
        .filter(|href| !pages.iter().any(|page| page.path == href.as_str()))
        .collect()
}

/// Render a complete HTML document for `page`.
pub fn render_page(page: &Page, content: &SiteContent) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
            }
            body {
                (navbar(content.nav_links()))
                main {
                    h1 { (page.title) }
                }
            }
        }
    }
}
