//! Site header: home link plus the navigation list.

use storefront_content::NAV_LINKS;
use storefront_core::{Entity, NavLink};

use crate::markup::Element;

pub const HOME_HREF: &str = "/";
pub const HOME_LABEL: &str = "Home";

/// Render the site header for `links`.
///
/// Produces `header > div.container > (a.logo, nav.nav > ul > li*)` with one
/// `li` per link, in input order, keyed by the link's href. Pure: the same
/// input always yields an equal tree.
pub fn navbar(links: &[NavLink]) -> Element {
    let home = Element::new("a")
        .with_attr("href", HOME_HREF)
        .with_attr("class", "logo")
        .with_text(HOME_LABEL);

    let list = Element::new("ul").with_children(links.iter().map(nav_item));

    Element::new("header").with_attr("class", "header").with_child(
        Element::new("div")
            .with_attr("class", "container")
            .with_child(home)
            .with_child(Element::new("nav").with_attr("class", "nav").with_child(list)),
    )
}

/// Header for the compiled-in navigation sequence.
pub fn site_navbar() -> Element {
    navbar(NAV_LINKS)
}

fn nav_item(link: &NavLink) -> Element {
    Element::new("li").with_key(link.id().as_str()).with_child(
        Element::new("a")
            .with_attr("href", link.href.as_str())
            .with_text(link.label.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::Render;
    use storefront_core::{Href, Label};

    fn items(header: &Element) -> Vec<&Element> {
        header
            .first("ul")
            .expect("navbar has a list")
            .child_elements()
            .collect()
    }

    fn anchor(item: &Element) -> (&str, String) {
        let a = item.first("a").expect("item has an anchor");
        (a.attr("href").unwrap_or_default(), a.text_content())
    }

    #[test]
    fn renders_seeded_links_in_order() {
        let header = site_navbar();
        let items = items(&header);

        assert_eq!(items.len(), 2);
        assert_eq!(anchor(items[0]), ("/", "Home".to_string()));
        assert_eq!(anchor(items[1]), ("/products", "Products".to_string()));
        assert_eq!(items[0].key(), Some("/"));
        assert_eq!(items[1].key(), Some("/products"));
    }

    #[test]
    fn header_holds_one_home_link_and_one_list() {
        let header = site_navbar();
        assert_eq!(header.tag(), "header");

        let container = header.first("div").unwrap();
        let top = container.child_elements().collect::<Vec<_>>();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].tag(), "a");
        assert_eq!(top[0].attr("href"), Some(HOME_HREF));
        assert_eq!(top[0].attr("class"), Some("logo"));
        assert_eq!(top[0].text_content(), HOME_LABEL);
        assert_eq!(top[1].tag(), "nav");

        assert_eq!(header.find_all("ul").len(), 1);
        assert_eq!(header.find_all("header").len(), 1);
    }

    #[test]
    fn empty_sequence_renders_empty_list() {
        let header = navbar(&[]);
        assert!(items(&header).is_empty());
        assert!(header.first("a").is_some());
    }

    #[test]
    fn serializes_to_expected_html() {
        assert_eq!(
            site_navbar().render().into_string(),
            concat!(
                r#"<header class="header"><div class="container">"#,
                r#"<a href="/" class="logo">Home</a>"#,
                r#"<nav class="nav"><ul>"#,
                r#"<li><a href="/">Home</a></li>"#,
                r#"<li><a href="/products">Products</a></li>"#,
                r#"</ul></nav></div></header>"#,
            )
        );
    }

    #[test]
    fn labels_are_escaped_in_html() {
        let links = [NavLink::new(
            Href::try_new("/a?b=1&c=2").unwrap(),
            Label::try_new("Tips & <Tricks>").unwrap(),
        )];
        let html = navbar(&links).render().into_string();
        assert!(html.contains(r#"<li><a href="/a?b=1&amp;c=2">Tips &amp; &lt;Tricks&gt;</a></li>"#));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_link() -> impl Strategy<Value = NavLink> {
            ("/[a-z0-9/-]{0,20}", "[A-Za-z][A-Za-z0-9 &<>]{0,20}").prop_map(|(href, label)| {
                NavLink::new(Href::try_new(href).unwrap(), Label::try_new(label).unwrap())
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: one list item per link, same order, matching href/label/key.
            #[test]
            fn items_mirror_links(links in proptest::collection::vec(arb_link(), 0..12)) {
                let header = navbar(&links);
                let items = items(&header);

                prop_assert_eq!(items.len(), links.len());
                for (item, link) in items.iter().zip(&links) {
                    let (href, text) = anchor(item);
                    prop_assert_eq!(href, link.href.as_str());
                    prop_assert_eq!(text, link.label.as_str());
                    prop_assert_eq!(item.key(), Some(link.href.as_str()));
                    prop_assert_eq!(item.child_elements().count(), 1);
                }
            }

            /// Property: rendering is idempotent.
            #[test]
            fn rendering_is_idempotent(links in proptest::collection::vec(arb_link(), 0..12)) {
                let first = navbar(&links);
                let second = navbar(&links);
                prop_assert_eq!(first.render().into_string(), second.render().into_string());
                prop_assert_eq!(first, second);
            }
        }
    }
}
