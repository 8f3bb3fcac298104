//! Monetary amounts using decimal arithmetic.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The input string is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative monetary amount with two decimal places.
///
/// Prices are stored in the currency's standard unit (e.g., dollars, not
/// cents) and rounded to two places on construction. Cart items and order
/// items hold a `Price` snapshot taken at write time, decoupled from the live
/// product price.
///
/// ## Examples
///
/// ```
/// use tangelo_core::Price;
///
/// let price: Price = "5.00".parse().unwrap();
/// assert_eq!(price.to_string(), "5.00");
///
/// assert!("-1.50".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of decimal places kept.
    pub const SCALE: u32 = 2;

    /// Create a new price, rounding to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount.round_dp(Self::SCALE)))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Extended amount for a line of `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: Quantity) -> Decimal {
        self.0 * Decimal::from(quantity.get())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s).map_err(|e| PriceError::Invalid(e.to_string()))?;
        Self::new(amount)
    }
}

// SQLx support (with sqlite feature)
//
// SQLite has no decimal column type, so prices travel as TEXT and are parsed
// on the way out.
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Price {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Price {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        let amount = Decimal::from_str(s)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode(self.to_string(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_to_two_places() {
        let price = Price::new(Decimal::new(5_005, 3)).unwrap(); // 5.005
        assert_eq!(price.to_string(), "5.00"); // banker's rounding
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative)
        ));
    }

    #[test]
    fn test_zero() {
        assert_eq!(Price::ZERO.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_from_str() {
        let price: Price = "19.99".parse().unwrap();
        assert_eq!(price.amount(), Decimal::new(1_999, 2));

        assert!(matches!(
            "not-a-price".parse::<Price>(),
            Err(PriceError::Invalid(_))
        ));
        assert!(matches!(
            "-0.01".parse::<Price>(),
            Err(PriceError::Negative)
        ));
    }

    #[test]
    fn test_times() {
        let price: Price = "2.50".parse().unwrap();
        let qty = crate::Quantity::new(4).unwrap();
        assert_eq!(price.times(qty), Decimal::new(1_000, 2));
    }

    #[test]
    fn test_display_pads_scale() {
        let price: Price = "5".parse().unwrap();
        assert_eq!(price.to_string(), "5.00");
    }
}
