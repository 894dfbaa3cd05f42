//! `storefront-core`: site-wide building blocks.
//!
//! This crate contains **pure** data primitives (no rendering, no IO): the
//! error model, validated text value objects, and the navigation link shape.

pub mod entity;
pub mod error;
pub mod nav;
pub mod value_object;

pub use entity::{Entity, find_duplicate_ids};
pub use error::{DomainError, DomainResult};
pub use nav::NavLink;
pub use value_object::{Href, Label, ValueObject};
