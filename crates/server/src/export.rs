//! Static build: every registered page written as `<path>/index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use storefront_content::SiteContent;
use storefront_ui::{PAGES, Page, render_page};

/// Where `page` lands under `out` (`/` -> `index.html`, `/products` -> `products/index.html`).
pub fn page_output_path(out: &Path, page: &Page) -> PathBuf {
    let relative = page.path.trim_matches('/');
    if relative.is_empty() {
        out.join("index.html")
    } else {
        out.join(relative).join("index.html")
    }
}

/// Render every page into `out`, returning the written file paths in page order.
pub fn build_site(out: &Path, content: &SiteContent) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(PAGES.len());

    for page in PAGES {
        let path = page_output_path(out, page);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let html = render_page(page, content).into_string();
        fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(page = page.path, file = %path.display(), "wrote page");

        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_paths_to_index_files() {
        let out = Path::new("dist");
        let home = Page { path: "/", title: "Home" };
        let nested = Page { path: "/a/b/", title: "B" };

        assert_eq!(page_output_path(out, &home), PathBuf::from("dist/index.html"));
        assert_eq!(page_output_path(out, &nested), PathBuf::from("dist/a/b/index.html"));
    }

    #[test]
    fn writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let written = build_site(dir.path(), &SiteContent::seeded()).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("index.html"),
                dir.path().join("products").join("index.html"),
            ]
        );

        let products = fs::read_to_string(&written[1]).unwrap();
        assert!(products.contains("<title>Products</title>"));
        assert!(products.contains(r#"<a href="/" class="logo">Home</a>"#));
    }
}
