//! # Pricing Engine
//!
//! Turns a list of cart lines and an optional coupon into the numbers the
//! cart page shows: subtotal, shipping, discount and grand total.
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Pricing                                     │
//! │                                                                         │
//! │  line_total(item) = unit_price × (1 − item%/100) × quantity            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  subtotal = Σ line_total                                                │
//! │          │                                                              │
//! │          ├──► shipping_cost(subtotal)   500, or 0 when ≥ 5000          │
//! │          │                                                              │
//! │          └──► apply_coupon(code, subtotal)   coupon% of subtotal       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  grand_total = subtotal + shipping − min(discount, subtotal+shipping)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Precondition
//! Every function here is pure and infallible. Inputs are assumed to have
//! passed the cart's mutation boundary (positive prices, percents within
//! `0..=100`, quantities ≥ 1). Nothing is rounded; see [`Money::rounded`].
//!
//! ## Example
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::pricing::{apply_coupon, grand_total, line_total, shipping_cost};
//! use storefront_core::types::{CartLineItem, Percent};
//!
//! let item = CartLineItem::new(
//!     "p-lamp",
//!     "Desk Lamp",
//!     Money::from_major(1000),
//!     Some(Percent::new(20).unwrap()),
//!     2,
//! );
//! let subtotal = line_total(&item);
//! assert_eq!(subtotal, Money::from_major(1600));
//!
//! let shipping = shipping_cost(subtotal);
//! let discount = apply_coupon("discount10", subtotal);
//! assert_eq!(grand_total(subtotal, shipping, discount), Money::from_major(1940));
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coupon::{AppliedCoupon, CouponTable};
use crate::money::Money;
use crate::types::CartLineItem;

// =============================================================================
// Policy Constants
// =============================================================================

/// Subtotal at which shipping becomes free (inclusive).
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_major(5000);

/// Flat shipping fee charged below the threshold.
pub const SHIPPING_FEE: Money = Money::from_major(500);

// =============================================================================
// Pricing Operations
// =============================================================================

/// Discounted unit price multiplied by quantity.
///
/// A missing or zero discount leaves the unit price untouched.
pub fn line_total(item: &CartLineItem) -> Money {
    let effective_unit_price = match item.discount_percent {
        Some(percent) if !percent.is_zero() => item.unit_price.apply_percentage_discount(percent),
        _ => item.unit_price,
    };
    effective_unit_price.multiply_quantity(item.quantity)
}

/// Sum of line totals. An empty slice yields zero.
pub fn subtotal(items: &[CartLineItem]) -> Money {
    items.iter().map(line_total).sum()
}

/// Flat fee below [`FREE_SHIPPING_THRESHOLD`], free at or above it.
///
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::pricing::{shipping_cost, SHIPPING_FEE};
///
/// assert_eq!(shipping_cost(Money::from_major(4999)), SHIPPING_FEE);
/// assert_eq!(shipping_cost(Money::from_major(5000)), Money::zero());
/// ```
pub fn shipping_cost(subtotal: Money) -> Money {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        SHIPPING_FEE
    }
}

/// Discount granted by a user-entered coupon code on `subtotal`.
///
/// Matches case-insensitively against the default [`CouponTable`].
/// Unknown codes give zero, never an error.
pub fn apply_coupon(code: &str, subtotal: Money) -> Money {
    CouponTable::default().discount_for(code, subtotal)
}

/// `subtotal + shipping − discount`, never below zero.
///
/// The discount is capped at `subtotal + shipping`, so a coupon or stacking
/// rule worth more than the order cannot produce a negative payable amount.
pub fn grand_total(subtotal: Money, shipping: Money, discount: Money) -> Money {
    let gross = subtotal + shipping;
    let discount = discount.max(Money::zero()).min(gross);
    (gross - discount).max(Money::zero())
}

/// How much more subtotal unlocks free shipping. Zero once qualified.
pub fn amount_to_free_shipping(subtotal: Money) -> Money {
    (FREE_SHIPPING_THRESHOLD - subtotal).max(Money::zero())
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Everything the cart summary panel shows, in one value.
///
/// ## Serialization
/// Amounts are exact and unrounded, written without trailing zeros.
/// ```json
/// {
///   "itemCount": 1,
///   "totalQuantity": 2,
///   "subtotal": "1600",
///   "shipping": "500",
///   "discount": "160",
///   "grandTotal": "1940",
///   "amountToFreeShipping": "3400",
///   "couponCode": "DISCOUNT10"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub shipping: Money,
    pub discount: Money,
    pub grand_total: Money,
    pub amount_to_free_shipping: Money,
    pub coupon_code: Option<String>,
}

/// Prices a whole cart with an optional applied coupon.
///
/// An empty cart has nothing to ship, so it is charged no shipping and its
/// grand total is zero.
pub fn price_cart(items: &[CartLineItem], coupon: Option<&AppliedCoupon>) -> CartTotals {
    let subtotal = subtotal(items);
    let shipping = if items.is_empty() {
        Money::zero()
    } else {
        shipping_cost(subtotal)
    };
    let discount = coupon.map_or(Money::zero(), |c| c.discount(subtotal));

    CartTotals {
        item_count: items.len(),
        total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
        subtotal,
        shipping,
        discount,
        grand_total: grand_total(subtotal, shipping, discount),
        amount_to_free_shipping: amount_to_free_shipping(subtotal),
        coupon_code: coupon.map(|c| c.code.clone()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
