//! Server-side rendering for the storefront.
//!
//! - `markup.rs`: the in-memory markup tree and its HTML serialization
//! - `navbar.rs`: the site header built from the navigation sequence
//! - `pages.rs`: page registry and full-document layout

pub mod markup;
pub mod navbar;
pub mod pages;

pub use markup::{Element, Node};
pub use navbar::{navbar, site_navbar};
pub use pages::{PAGES, Page, find_page, missing_routes, render_page};
