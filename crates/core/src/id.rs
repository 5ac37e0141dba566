//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque, stable strings (`"1"`, `"sofa-elegance"`).
//! The only rule is that they are non-blank; surrounding whitespace is trimmed.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

/// Identifier of a catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

/// Identifier of a saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AddressId(String);

/// Identifier of a saved payment method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentMethodId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting blank values.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!(
                        "{}: must not be blank",
                        $name
                    )));
                }
                if trimmed.len() == value.len() {
                    Ok(Self(value))
                } else {
                    Ok(Self(trimmed.to_string()))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.pad(&self.0)
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
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(CategoryId, "CategoryId");
impl_string_newtype!(AddressId, "AddressId");
impl_string_newtype!(PaymentMethodId, "PaymentMethodId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(matches!(ProductId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(CategoryId::new("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let id: ProductId = " 7 ".parse().unwrap();
        assert_eq!(id.as_str(), "7");
        assert_eq!(id, ProductId::new("7").unwrap());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let id: CategoryId = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(id.to_string(), "4");
        assert!(serde_json::from_str::<CategoryId>("\"\"").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::new("10").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"10\"");
    }
}
