//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   snapshot   ┌─────────────────┐                   │
//! │  │    Product      │ ───────────► │  CartLineItem   │                   │
//! │  │  ─────────────  │              │  ─────────────  │                   │
//! │  │  id             │              │  id             │                   │
//! │  │  name           │              │  name           │                   │
//! │  │  price          │              │  unit_price     │                   │
//! │  │  discount %     │              │  discount %     │                   │
//! │  │  in_stock       │              │  quantity       │                   │
//! │  └─────────────────┘              └─────────────────┘                   │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    Percent      │  0..=100, used for item promos and coupons        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Percent
// =============================================================================

/// A whole percentage in `0..=100`.
///
/// Construction is checked, so a `Percent` can never push a price below
/// zero. Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    /// Creates a percentage, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: "percent".to_string(),
                min: 0,
                max: i64::from(Self::MAX),
            });
        }
        Ok(Percent(value))
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the percentage as an exact fraction (`20` → `0.20`).
    pub fn as_fraction(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<u8> for Percent {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, e.g. `"p-headphones"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// List price before any promotion.
    pub price: Money,

    /// Promotional discount shown as "20% off" on the product card.
    #[serde(default)]
    pub discount_percent: Option<Percent>,

    /// Out-of-stock products are listed but cannot be added to the cart.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Price after the product's own promotion.
    pub fn effective_price(&self) -> Money {
        match self.discount_percent {
            Some(percent) => self.price.apply_percentage_discount(percent),
            None => self.price,
        }
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Price Freezing
/// Price and promotion are captured when the line is created. A later
/// catalog change does not reprice what is already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Product identifier, unique within a cart.
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Base unit price before the per-item discount (frozen).
    pub unit_price: Money,

    /// Per-item promotional discount.
    pub discount_percent: Option<Percent>,

    /// Always at least 1 inside a cart.
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        discount_percent: Option<Percent>,
        quantity: u32,
    ) -> Self {
        CartLineItem {
            id: id.into(),
            name: name.into(),
            unit_price,
            discount_percent,
            quantity,
        }
    }

    /// Snapshots a catalog product into a line item.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartLineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            discount_percent: product.discount_percent,
            quantity,
        }
    }

    /// Line total (discounted unit price × quantity), unrounded.
    #[inline]
    pub fn line_total(&self) -> Money {
        crate::pricing::line_total(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::new(0).unwrap(), Percent::zero());
        assert_eq!(Percent::new(100).unwrap().value(), 100);
        assert!(Percent::new(101).is_err());
    }

    #[test]
    fn test_percent_as_fraction() {
        assert_eq!(Percent::new(20).unwrap().as_fraction(), Decimal::new(20, 2));
        assert_eq!(Percent::new(100).unwrap().as_fraction(), Decimal::ONE);
    }

    #[test]
    fn test_percent_deserialize_is_checked() {
        let ok: Percent = serde_json::from_str("25").unwrap();
        assert_eq!(ok.value(), 25);
        assert!(serde_json::from_str::<Percent>("150").is_err());
    }

    #[test]
    fn test_product_effective_price() {
        let mut product = Product {
            id: "p-1".to_string(),
            name: "Desk Lamp".to_string(),
            price: Money::from_major(1000),
            discount_percent: Some(Percent::new(20).unwrap()),
            in_stock: true,
        };
        assert_eq!(product.effective_price(), Money::from_major(800));

        product.discount_percent = None;
        assert_eq!(product.effective_price(), Money::from_major(1000));
    }

    #[test]
    fn test_product_json_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p-2","name":"Mug","price":"249.50"}"#).unwrap();
        assert!(product.in_stock);
        assert_eq!(product.discount_percent, None);
        assert_eq!(product.price, Money::from_minor(24950));
    }

    #[test]
    fn test_line_item_from_product_freezes_price() {
        let mut product = Product {
            id: "p-1".to_string(),
            name: "Desk Lamp".to_string(),
            price: Money::from_major(1000),
            discount_percent: None,
            in_stock: true,
        };
        let line = CartLineItem::from_product(&product, 2);
        product.price = Money::from_major(1200);

        assert_eq!(line.unit_price, Money::from_major(1000));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), Money::from_major(2000));
    }
}
