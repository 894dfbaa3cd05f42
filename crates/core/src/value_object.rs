//! Value objects: equality by value, not identity.
//!
//! Value objects are data that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are equal.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: value objects are values, not references
/// - **PartialEq**: compared by attribute values
/// - **Debug**: useful for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Navigation target: a site path (`/products`) or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Href(Cow<'static, str>);

/// Human-readable link text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(Cow<'static, str>);

macro_rules! impl_text_value {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a compiled-in literal.
            ///
            /// Blank literals fail const evaluation, so a malformed constant is
            /// a build error rather than a runtime one.
            pub const fn from_static(value: &'static str) -> Self {
                assert!(
                    !value.trim_ascii().is_empty(),
                    concat!($name, " must not be empty")
                );
                Self(Cow::Borrowed(value))
            }

            /// Validate a runtime value (e.g. from a content file).
            pub fn try_new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::validation(concat!($name, " must not be empty")));
                }
                Ok(Self(Cow::Owned(value)))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_new(s)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0.into_owned()
            }
        }
    };
}

impl_text_value!(Href, "href");
impl_text_value!(Label, "label");
