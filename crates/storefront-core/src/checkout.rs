//! # Checkout
//!
//! Freezes a priced cart into an [`OrderSummary`] whose `amount_due` is
//! forwarded for payment initiation.
//!
//! ## Snapshot Pattern
//! Order lines copy name, price and promotion out of the cart, so the
//! summary stays meaningful after the cart is cleared.
//!
//! ## Rounding
//! The cart is priced at full precision first. Each figure in the summary
//! is then rounded to the minor unit on its own. `amount_due` is the
//! rounded grand total, not the sum of the rounded parts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartState;
use crate::coupon::AppliedCoupon;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLineItem, Percent};
use crate::CURRENCY_MINOR_DIGITS;

/// One frozen line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Money,
    pub discount_percent: Option<Percent>,
    pub quantity: u32,
    /// Rounded line total.
    pub line_total: Money,
}

impl From<&CartLineItem> for OrderLine {
    fn from(item: &CartLineItem) -> Self {
        OrderLine {
            product_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            discount_percent: item.discount_percent,
            quantity: item.quantity,
            line_total: item.line_total().rounded(CURRENCY_MINOR_DIGITS),
        }
    }
}

/// A checked-out cart, ready to hand to a payment flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    #[ts(as = "String")]
    pub order_id: Uuid,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub shipping: Money,
    pub discount: Money,
    pub coupon_code: Option<String>,
    /// Rounded grand total.
    pub amount_due: Money,
    /// `amount_due` in minor units (paise / cents), as payment APIs expect.
    pub amount_due_minor: i64,
}

impl OrderSummary {
    /// Prices `cart` and snapshots it.
    ///
    /// Identity and timestamp are passed in so the snapshot stays a pure
    /// function of its inputs.
    ///
    /// ## Errors
    /// - `EmptyCart` when there is nothing to order
    /// - `InvalidPaymentAmount` when the total does not fit in minor units
    pub fn from_cart(
        cart: &CartState,
        coupon: Option<&AppliedCoupon>,
        order_id: Uuid,
        placed_at: DateTime<Utc>,
    ) -> CoreResult<OrderSummary> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let totals = cart.totals(coupon);
        let amount_due = totals.grand_total.rounded(CURRENCY_MINOR_DIGITS);
        let amount_due_minor = amount_due
            .to_minor_units(CURRENCY_MINOR_DIGITS)
            .ok_or_else(|| CoreError::InvalidPaymentAmount {
                reason: format!("{} is too large to charge", amount_due),
            })?;

        Ok(OrderSummary {
            order_id,
            placed_at,
            lines: cart.items().iter().map(OrderLine::from).collect(),
            total_quantity: totals.total_quantity,
            subtotal: totals.subtotal.rounded(CURRENCY_MINOR_DIGITS),
            shipping: totals.shipping.rounded(CURRENCY_MINOR_DIGITS),
            discount: totals.discount.rounded(CURRENCY_MINOR_DIGITS),
            coupon_code: totals.coupon_code,
            amount_due,
            amount_due_minor,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::CouponTable;
    use crate::validation::MAX_UNIT_PRICE;
    use chrono::TimeZone;

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn lamp_cart() -> CartState {
        let mut cart = CartState::new();
        cart.add_item(CartLineItem::new(
            "lamp",
            "Desk Lamp",
            Money::from_major(1000),
            Some(Percent::new(20).unwrap()),
            2,
        ))
        .unwrap();
        cart
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let result = OrderSummary::from_cart(&CartState::new(), None, Uuid::nil(), placed_at());
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_checkout_without_coupon() {
        let order_id = Uuid::new_v4();
        let summary = OrderSummary::from_cart(&lamp_cart(), None, order_id, placed_at()).unwrap();

        assert_eq!(summary.order_id, order_id);
        assert_eq!(summary.placed_at, placed_at());
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].line_total, Money::from_major(1600));
        assert_eq!(summary.shipping, Money::from_major(500));
        assert_eq!(summary.amount_due, Money::from_major(2100));
        assert_eq!(summary.amount_due_minor, 210_000);
        assert_eq!(summary.coupon_code, None);
    }

    #[test]
    fn test_checkout_with_coupon() {
        let coupon = CouponTable::default().resolve("discount10").unwrap();
        let summary =
            OrderSummary::from_cart(&lamp_cart(), Some(&coupon), Uuid::nil(), placed_at()).unwrap();

        assert_eq!(summary.discount, Money::from_major(160));
        assert_eq!(summary.amount_due, Money::from_major(1940));
        assert_eq!(summary.coupon_code.as_deref(), Some("DISCOUNT10"));
    }

    #[test]
    fn test_amount_due_rounds_the_exact_total() {
        // Three lines of 0.333 each: rounded parts sum to 0.99 but the exact
        // subtotal 0.999 rounds to 1.00.
        let mut cart = CartState::new();
        for id in ["a", "b", "c"] {
            cart.add_item(CartLineItem::new(
                id,
                "Sticker",
                "0.333".parse().unwrap(),
                None,
                1,
            ))
            .unwrap();
        }

        let summary = OrderSummary::from_cart(&cart, None, Uuid::nil(), placed_at()).unwrap();
        let rounded_parts: Money = summary.lines.iter().map(|l| l.line_total).sum();

        assert_eq!(rounded_parts, Money::from_minor(99));
        assert_eq!(summary.subtotal, Money::from_minor(100));
        assert_eq!(summary.amount_due, Money::from_minor(50_100));
    }

    #[test]
    fn test_amount_too_large_for_minor_units() {
        // 100 × 10^15 = 10^17, i.e. 10^19 minor units, past i64::MAX.
        let price: Money = MAX_UNIT_PRICE.to_string().parse().unwrap();
        let mut cart = CartState::new();
        cart.add_item(CartLineItem::new("p-yacht", "Yacht", price, None, 100))
            .unwrap();

        let result = OrderSummary::from_cart(&cart, None, Uuid::nil(), placed_at());
        match result {
            Err(CoreError::InvalidPaymentAmount { reason }) => {
                assert!(reason.contains("too large to charge"));
            }
            other => panic!("expected InvalidPaymentAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_serializes_ids_as_strings() {
        let summary = OrderSummary::from_cart(&lamp_cart(), None, Uuid::nil(), placed_at()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["orderId"], "00000000-0000-0000-0000-000000000000");
        let amount_due: Money = json["amountDue"].as_str().unwrap().parse().unwrap();
        assert_eq!(amount_due, Money::from_major(2100));
        assert_eq!(json["amountDueMinor"], 210_000);
    }
}
