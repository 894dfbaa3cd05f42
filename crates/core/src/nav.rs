//! Navigation link shape.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::value_object::{Href, Label};

/// A label/destination pair used to build site navigation.
///
/// Every `href` should correspond to a route the hosting site serves. That is
/// not enforced here; hosts check it against their page registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavLink {
    pub href: Href,
    pub label: Label,
}

impl NavLink {
    /// Build a compiled-in link. Blank literals fail at compile time.
    pub const fn from_static(href: &'static str, label: &'static str) -> Self {
        Self {
            href: Href::from_static(href),
            label: Label::from_static(label),
        }
    }

    pub fn new(href: Href, label: Label) -> Self {
        Self { href, label }
    }
}

/// Links are identified by their destination; the renderer keys list items on it.
impl Entity for NavLink {
    type Id = Href;

    fn id(&self) -> &Href {
        &self.href
    }
}
