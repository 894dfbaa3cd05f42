//! Compiled-in site data. Created at process start, never mutated.

use storefront_core::NavLink;
use storefront_products::Product;

/// Site navigation, in display order.
pub static NAV_LINKS: &[NavLink] = &[
    NavLink::from_static("/", "Home"),
    NavLink::from_static("/products", "Products"),
];

/// Seed catalog, in display order.
pub static MOCK_PRODUCTS: &[Product] = &[
    Product::from_static("1", "Product 1", 9999, "This is product 1"),
    Product::from_static("2", "Product 2", 14999, "This is product 2"),
    Product::from_static("3", "Product 3", 19999, "This is product 3"),
    Product::from_static("4", "Product 4", 24999, "This is product 4"),
];
