//! Money value object.
//!
//! The storefront prices everything in Brazilian reais. Amounts are held as an
//! integer number of centavos so comparisons and totals are exact; the JSON
//! representation is a decimal number of reais (`2999.99`), as in the catalog
//! documents.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Largest representable amount, in centavos (R$ 10 trillion).
///
/// Well inside f64's exact integer range, so every amount survives the
/// decimal JSON form unchanged.
const MAX_CENTS: u64 = 1_000_000_000_000_000;

/// Non-negative monetary amount in centavos.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(MAX_CENTS);

    /// Amounts above [`Money::MAX`] are clamped to it.
    pub const fn from_cents(cents: u64) -> Self {
        if cents > MAX_CENTS {
            Self(MAX_CENTS)
        } else {
            Self(cents)
        }
    }

    /// Build an amount from a decimal number of reais, rounding to the nearest centavo.
    pub fn from_decimal(reais: f64) -> Result<Self, DomainError> {
        if !reais.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if reais < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        let cents = (reais * 100.0).round();
        if cents > MAX_CENTS as f64 {
            return Err(DomainError::validation("amount is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Amount in reais, for serialization and display only.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by a quantity (cart line totals). Saturates at [`Money::MAX`].
    pub fn times(self, quantity: u32) -> Self {
        Self::from_cents(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<f64> for Money {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.as_decimal()
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Accepts `1299.99`, `1299,99` and `1000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(',', ".");
        let reais: f64 = normalized
            .parse()
            .map_err(|_| DomainError::validation(format!("not a monetary amount: {s:?}")))?;
        Self::from_decimal(reais)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_input_rounds_to_nearest_centavo() {
        assert_eq!(Money::from_decimal(2999.99).unwrap().cents(), 299_999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_decimal(1000.0).unwrap().cents(), 100_000);
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        assert!(matches!(
            Money::from_decimal(-0.01),
            Err(DomainError::Validation(_))
        ));
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(f64::INFINITY).is_err());
        assert!(Money::from_decimal(1e300).is_err());
        assert!(Money::from_decimal(10_000_000_000_000.01).is_err());
    }

    #[test]
    fn arithmetic_saturates_at_max() {
        assert_eq!(Money::from_cents(u64::MAX), Money::MAX);
        assert_eq!(Money::MAX.times(3), Money::MAX);
        assert_eq!(Money::MAX + Money::from_cents(1), Money::MAX);
    }

    #[test]
    fn largest_amount_survives_json() {
        let json = serde_json::to_string(&Money::MAX).unwrap();
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), Money::MAX);

        let clamped = Money::from_cents(u64::MAX).times(2);
        let json = serde_json::to_string(&clamped).unwrap();
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), clamped);
    }

    #[test]
    fn displays_like_the_price_labels() {
        assert_eq!(Money::from_cents(299_999).to_string(), "R$ 2999.99");
        assert_eq!(Money::from_cents(5).to_string(), "R$ 0.05");
        assert_eq!(Money::ZERO.to_string(), "R$ 0.00");
    }

    #[test]
    fn parses_dot_and_comma_decimals() {
        assert_eq!("1299.99".parse::<Money>().unwrap(), Money::from_cents(129_999));
        assert_eq!("1299,99".parse::<Money>().unwrap(), Money::from_cents(129_999));
        assert_eq!(" 1000 ".parse::<Money>().unwrap(), Money::from_cents(100_000));
        assert!("mil".parse::<Money>().is_err());
    }

    #[test]
    fn json_uses_decimal_reais() {
        let m: Money = serde_json::from_str("2499.99").unwrap();
        assert_eq!(m.cents(), 249_999);
        assert_eq!(serde_json::to_string(&m).unwrap(), "2499.99");
        assert!(serde_json::from_str::<Money>("-1").is_err());
    }

    #[test]
    fn totals_add_up_exactly() {
        let total: Money = [Money::from_cents(299_999), Money::from_cents(249_999).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(799_997));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: ordering of amounts follows ordering of centavos.
            #[test]
            fn ordering_matches_cents(a in 0u64..10_000_000, b in 0u64..10_000_000) {
                prop_assert_eq!(
                    Money::from_cents(a).cmp(&Money::from_cents(b)),
                    a.cmp(&b)
                );
            }

            /// Property: the decimal form of any centavo amount parses back to the same amount.
            #[test]
            fn decimal_form_is_exact(cents in 0u64..=MAX_CENTS) {
                let m = Money::from_cents(cents);
                prop_assert_eq!(Money::from_decimal(m.as_decimal()).unwrap(), m);
            }
        }
    }
}
