//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A price amount below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("price cannot be negative: {0}")]
pub struct NegativePrice(pub Decimal);

/// A non-negative unit price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a price, or `None` if the amount is negative.
    #[must_use]
    pub fn new(amount: Decimal, currency_code: CurrencyCode) -> Option<Self> {
        (!amount.is_sign_negative() || amount.is_zero()).then_some(Self {
            amount,
            currency_code,
        })
    }

    /// Create a USD price from whole cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self {
            amount: Decimal::new(i64::from(cents), 2),
            currency_code: CurrencyCode::USD,
        }
    }

    /// The amount in standard units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this price.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Total value of `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.amount * Decimal::from(quantity)
    }
}

/// Wire shape of a [`Price`], checked before it becomes one.
#[derive(Deserialize)]
struct RawPrice {
    amount: Decimal,
    currency_code: CurrencyCode,
}

impl TryFrom<RawPrice> for Price {
    type Error = NegativePrice;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Self::new(raw.amount, raw.currency_code).ok_or(NegativePrice(raw.amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.currency_code.symbol(),
            group_thousands(&self.amount.round_dp(2).to_string())
        )
    }
}

/// ISO 4217 currency codes. The catalog is priced in dollars only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

/// Insert `,` separators into the integer part of a decimal string.
///
/// `"89420"` becomes `"89,420"`, `"-1234.5"` becomes `"-1,234.5"`.
/// Input that is not numeric is returned unchanged.
#[must_use]
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = number
        .strip_prefix('-')
        .map_or(("", number), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_owned();
    }

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("89420"), "89,420");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("-1234.5"), "-1,234.5");
        assert_eq!(group_thousands("n/a"), "n/a");
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(Price::new(Decimal::new(-1, 0), CurrencyCode::USD).is_none());
        assert!(Price::new(Decimal::ZERO, CurrencyCode::USD).is_some());
    }

    #[test]
    fn test_deserialize_checks_sign() {
        let price: Price =
            serde_json::from_str(r#"{"amount":"12.50","currency_code":"USD"}"#).unwrap();
        assert_eq!(price, Price::from_cents(1_250));

        let negative = serde_json::from_str::<Price>(r#"{"amount":"-0.01","currency_code":"USD"}"#);
        assert!(negative.unwrap_err().to_string().contains("cannot be negative"));

        let euros = serde_json::from_str::<Price>(r#"{"amount":"1","currency_code":"EUR"}"#);
        assert!(euros.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(15_000).to_string(), "$150.00");
        assert_eq!(Price::from_cents(123_456_78).to_string(), "$123,456.78");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::from_cents(15_000).times(45), Decimal::new(6750, 0));
    }
}
