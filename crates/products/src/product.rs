use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, find_duplicate_ids};

use crate::price::Price;

/// Product identifier (unique within a catalog sequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(Cow<'static, str>);

impl ProductId {
    pub const fn from_static(id: &'static str) -> Self {
        assert!(!id.trim_ascii().is_empty(), "product id must not be empty");
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be empty"));
        }
        Ok(Self(Cow::Owned(s.to_owned())))
    }
}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be empty"));
        }
        Ok(Self(Cow::Owned(value)))
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0.into_owned()
    }
}

/// A catalog record. Insertion order is display order; there is no other
/// ordering invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: Cow<'static, str>,
    price: Price,
    description: Cow<'static, str>,
}

impl Product {
    /// Build a compiled-in record.
    pub const fn from_static(
        id: &'static str,
        name: &'static str,
        price_cents: u64,
        description: &'static str,
    ) -> Self {
        Self {
            id: ProductId::from_static(id),
            name: Cow::Borrowed(name),
            price: Price::from_cents(price_cents),
            description: Cow::Borrowed(description),
        }
    }

    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Cow::Owned(name.into()),
            price,
            description: Cow::Owned(description.into()),
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Check sequence-level invariants of a product catalog (unique ids).
pub fn validate_catalog(products: &[Product]) -> DomainResult<()> {
    let duplicates = find_duplicate_ids(products);
    if duplicates.is_empty() {
        return Ok(());
    }

    let ids = duplicates
        .iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Err(DomainError::conflict(format!("duplicate product id(s): {ids}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &'static str) -> Product {
        Product::from_static(id, "Sample", 1000, "A sample product")
    }

    #[test]
    fn accessors_expose_record_fields() {
        let product = Product::from_static("7", "Lamp", 4550, "Warm light");
        assert_eq!(product.id_typed().as_str(), "7");
        assert_eq!(product.name(), "Lamp");
        assert_eq!(product.price().to_string(), "45.50");
        assert_eq!(product.description(), "Warm light");
    }

    #[test]
    fn catalog_with_unique_ids_is_valid() {
        assert!(validate_catalog(&[sample("1"), sample("2"), sample("3")]).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = validate_catalog(&[sample("1"), sample("2"), sample("1")]).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert_eq!(msg, "duplicate product id(s): 1"),
            other => panic!("Expected Conflict error, got {other:?}"),
        }
    }

    #[test]
    fn product_id_rejects_blank_input() {
        let err = "  ".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            other => panic!("Expected InvalidId error, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_from_decimal_price() {
        let product: Product = serde_json::from_str(
            r#"{"id":"9","name":"Chair","price":19.5,"description":"Oak"}"#,
        )
        .unwrap();
        assert_eq!(product, Product::new("9".parse().unwrap(), "Chair", Price::from_cents(1950), "Oak"));

        let err = serde_json::from_str::<Product>(
            r#"{"id":"9","name":"Chair","price":-2,"description":"Oak"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a catalog is valid exactly when its ids are distinct.
            #[test]
            fn validity_matches_id_distinctness(ids in proptest::collection::vec(0u8..6, 0..8)) {
                let products = ids
                    .iter()
                    .map(|n| Product::new(n.to_string().parse().unwrap(), "P", Price::ZERO, ""))
                    .collect::<Vec<_>>();

                let mut distinct = ids.clone();
                distinct.sort_unstable();
                distinct.dedup();

                prop_assert_eq!(validate_catalog(&products).is_ok(), distinct.len() == ids.len());
            }
        }
    }
}
