use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, NavLink, find_duplicate_ids};
use storefront_products::{Product, validate_catalog};

use crate::constants::{MOCK_PRODUCTS, NAV_LINKS};
use crate::error::ContentError;

/// Everything a render pass reads: navigation links and the product catalog.
///
/// The seeded value borrows the compiled-in constants. A content file can
/// replace them; it is validated before anything renders from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    nav_links: Cow<'static, [NavLink]>,
    #[serde(default)]
    products: Cow<'static, [Product]>,
}

impl SiteContent {
    /// Content backed by [`NAV_LINKS`] and [`MOCK_PRODUCTS`].
    pub fn seeded() -> Self {
        Self {
            nav_links: Cow::Borrowed(NAV_LINKS),
            products: Cow::Borrowed(MOCK_PRODUCTS),
        }
    }

    /// Build content from owned sequences, validating them.
    pub fn new(nav_links: Vec<NavLink>, products: Vec<Product>) -> DomainResult<Self> {
        let content = Self {
            nav_links: Cow::Owned(nav_links),
            products: Cow::Owned(products),
        };
        content.validate()?;
        Ok(content)
    }

    /// Parse a TOML document with `[[nav_links]]` and `[[products]]` tables.
    ///
    /// Field-level checks (blank href/label/id, negative price) happen during
    /// deserialization; sequence-level checks run afterwards.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Read and validate a content file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let content = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            nav_links = content.nav_links.len(),
            products = content.products.len(),
            "loaded site content"
        );
        Ok(content)
    }

    /// Check sequence-level invariants.
    ///
    /// Nav hrefs double as sibling identity keys in the rendered list, so a
    /// repeated href is rejected here rather than left to the renderer.
    pub fn validate(&self) -> DomainResult<()> {
        let duplicates = find_duplicate_ids(self.nav_links());
        if !duplicates.is_empty() {
            let hrefs = duplicates
                .iter()
                .map(|h| h.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DomainError::conflict(format!("duplicate nav href(s): {hrefs}")));
        }

        validate_catalog(self.products())
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::seeded()
    }
}
