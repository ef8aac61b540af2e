//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Percent discounts make it worse:                                       │
//! │    333.33 × 15% = 49.9995 → rounded per line, summed, rounded again    │
//! │    → totals drift by a few paise/cents across a large cart             │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, rounded ONLY for display                 │
//! │    Every line total, subtotal and discount is kept exact.               │
//! │    `rounded()` is called once, at the edge (UI, order summary).        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_major(1000);
//! let doubled = price * 2;
//! assert_eq!(doubled, Money::from_major(2000));
//!
//! let total = price + Money::from_minor(4999); // 1049.99
//! assert_eq!(total.to_string(), "1049.99");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::types::Percent;
use crate::CURRENCY_MINOR_DIGITS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the store currency's major unit (e.g. `1600.50`).
///
/// ## Design Decisions
/// - **Decimal, not float**: exact base-10 arithmetic
/// - **Full precision internally**: no rounding while accumulating
/// - **Serialized as a string**: the exact, unrounded amount in canonical
///   form (no trailing zeros), so `1600.00` and `1600` both travel as
///   `"1600"` and `254.9745` as `"254.9745"`. Rounding for display is the
///   reader's job, as it is here.
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► CartLineItem.unit_price ──► line_total               │
/// │                                                  │                      │
/// │                                                  ▼                      │
/// │          subtotal ──► shipping / coupon ──► grand_total ──► checkout   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a whole amount in the major unit (no fractional part).
    ///
    /// `const` so that pricing policy constants can be declared with it.
    #[inline]
    pub const fn from_major(major: u32) -> Self {
        Money(Decimal::from_parts(major, 0, 0, false, 0))
    }

    /// Creates an amount from minor units (hundredths of the major unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1099).to_string(), "10.99");
    /// assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
    /// ```
    #[inline]
    pub fn from_minor(minor: i64) -> Self {
        Money(Decimal::new(minor, CURRENCY_MINOR_DIGITS))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Returns `percent` of this amount, exactly.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::Percent;
    ///
    /// let subtotal = Money::from_major(1600);
    /// let ten = Percent::new(10).unwrap();
    /// assert_eq!(subtotal.percent_of(ten), Money::from_major(160));
    /// ```
    pub fn percent_of(&self, percent: Percent) -> Money {
        Money(self.0 * percent.as_fraction())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// `unit_price × (1 − percent/100)`, kept at full precision.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::Percent;
    ///
    /// let price = Money::from_major(1000);
    /// let twenty = Percent::new(20).unwrap();
    /// assert_eq!(price.apply_percentage_discount(twenty), Money::from_major(800));
    /// ```
    pub fn apply_percentage_discount(&self, percent: Percent) -> Money {
        Money(self.0 * (Decimal::ONE - percent.as_fraction()))
    }

    /// Multiplies money by a quantity.
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Rounds to `decimals` places using Bankers Rounding (half to even).
    ///
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  BANKERS ROUNDING (Round Half to Even)                              │
    /// │                                                                     │
    /// │    0.125 → 0.12,  0.135 → 0.14,  0.145 → 0.14                      │
    /// │                                                                     │
    /// │  Halves alternate direction, so no systematic bias over many       │
    /// │  orders. Only ever applied at the display / checkout edge.         │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn rounded(&self, decimals: u32) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Returns the amount as an integer count of minor units, after rounding.
    ///
    /// Payment initiation usually wants `160000` rather than `"1600.00"`.
    /// `None` if the amount does not fit in an `i64`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(194_050).to_minor_units(2), Some(194_050));
    /// ```
    pub fn to_minor_units(&self, decimals: u32) -> Option<i64> {
        let scale = Decimal::from(10_i64.checked_pow(decimals)?);
        self.rounded(decimals).0.checked_mul(scale)?.to_i64()
    }

    /// Formats the rounded amount with exactly `decimals` fractional digits.
    pub fn format_fixed(&self, decimals: u32) -> String {
        let mut value = self.rounded(decimals).0;
        value.rescale(decimals);
        value.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to the default minor unit, without a symbol.
///
/// ## Note
/// Currency symbols are a presentation concern, see the shell's
/// `StoreConfig::format_currency`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_fixed(CURRENCY_MINOR_DIGITS))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.normalize())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(value: u8) -> Percent {
        Percent::new(value).unwrap()
    }

    #[test]
    fn test_from_major_and_minor() {
        assert_eq!(Money::from_major(10), Money::from_minor(1000));
        assert_eq!(Money::from_minor(1099).amount(), Decimal::new(1099, 2));
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Money::from_major(1600).to_string(), "1600.00");
        assert_eq!(Money::from_minor(505).to_string(), "5.05");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(1000);
        let b = Money::from_major(500);

        assert_eq!(a + b, Money::from_major(1500));
        assert_eq!(a - b, Money::from_major(500));
        assert_eq!(a * 3, Money::from_major(3000));
        assert_eq!(-b, Money::from_minor(-50_000));
        assert!(!(-Money::zero()).is_negative());

        let mut c = a;
        c += b;
        c -= Money::from_major(100);
        assert_eq!(c, Money::from_major(1400));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_minor(150), Money::from_minor(250)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::from_major(4));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_percentage_discount_keeps_full_precision() {
        // 333.33 at 15% off = 283.3305, not 283.33
        let price = Money::from_minor(33333);
        let discounted = price.apply_percentage_discount(pct(15));
        assert_eq!(discounted.amount(), Decimal::new(2833305, 4));
        assert_eq!(discounted.to_string(), "283.33");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(Money::from_major(1600).percent_of(pct(10)), Money::from_major(160));
        assert_eq!(Money::from_major(1600).percent_of(pct(0)), Money::zero());
        assert_eq!(Money::from_major(1600).percent_of(pct(100)), Money::from_major(1600));
    }

    #[test]
    fn test_bankers_rounding() {
        assert_eq!(Money::from_str("0.125").unwrap().rounded(2), Money::from_minor(12));
        assert_eq!(Money::from_str("0.135").unwrap().rounded(2), Money::from_minor(14));
        assert_eq!(Money::from_str("0.145").unwrap().rounded(2), Money::from_minor(14));
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(Money::from_major(1940).to_minor_units(2), Some(194_000));
        assert_eq!(Money::from_str("10.005").unwrap().to_minor_units(2), Some(1000));
        assert_eq!(Money::from_major(7).to_minor_units(0), Some(7));
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(Money::from_major(12).format_fixed(0), "12");
        assert_eq!(Money::from_minor(1234).format_fixed(3), "12.340");
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 49.99 ".parse::<Money>().unwrap(), Money::from_minor(4999));
        assert!("forty".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::zero() - Money::from_major(1);
        assert!(negative.is_negative());
        assert!(Money::from_major(1).is_positive());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Money::from_minor(160050)).unwrap();
        assert_eq!(json, "\"1600.5\"");

        let back: Money = serde_json::from_str("\"1600.5\"").unwrap();
        assert_eq!(back, Money::from_minor(160050));
    }

    #[test]
    fn test_serialization_scale_is_canonical() {
        let scaled = Money::from_major(500).rounded(2);
        assert_eq!(serde_json::to_string(&scaled).unwrap(), "\"500\"");
        assert_eq!(serde_json::to_string(&Money::from_major(500)).unwrap(), "\"500\"");
        assert_eq!(serde_json::to_string(&Money::from_minor(-1250)).unwrap(), "\"-12.5\"");

        let exact: Money = "254.9745".parse().unwrap();
        assert_eq!(serde_json::to_string(&exact).unwrap(), "\"254.9745\"");
    }
}
