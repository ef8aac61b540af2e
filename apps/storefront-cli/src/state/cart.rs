//! # Cart Session
//!
//! The single owner of the shopper's cart and applied coupon.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  Input Line              Command Handler          Session Change        │
//! │  ──────────              ───────────────          ──────────────        │
//! │                                                                         │
//! │  add p-lamp --qty 2 ───► add_to_cart() ─────────► cart.add_product()    │
//! │                                                                         │
//! │  update p-lamp 3 ──────► update_cart_item() ────► cart.update_quantity()│
//! │                                                                         │
//! │  remove p-lamp ────────► remove_from_cart() ────► cart.remove_item()    │
//! │                                                                         │
//! │  coupon discount10 ────► apply_coupon() ────────► coupon = Some(..)     │
//! │                                                                         │
//! │  clear ────────────────► clear_cart() ──────────► cart + coupon reset   │
//! │                                                                         │
//! │  checkout ─────────────► checkout() ────────────► OrderSummary, reset   │
//! │                                                                         │
//! │  NOTE: The session is owned by the command loop and mutated through     │
//! │        `&mut self` only. There is no shared state and no lock.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::{
    AppliedCoupon, CartLineItem, CartState, CartTotals, CoreResult, CouponTable, OrderSummary,
    Product,
};
use uuid::Uuid;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

/// Cart plus the coupon currently applied to it.
///
/// ## Invariants
/// - At most one coupon is active; applying a known code replaces it
/// - `clear` and a successful `checkout` drop the coupon with the items
#[derive(Debug, Default)]
pub struct CartSession {
    cart: CartState,
    coupon: Option<AppliedCoupon>,
    coupons: CouponTable,
}

impl CartSession {
    /// Creates an empty session using the default coupon table.
    pub fn new() -> Self {
        Self::with_coupons(CouponTable::default())
    }

    /// Creates an empty session that resolves codes against `coupons`.
    pub fn with_coupons(coupons: CouponTable) -> Self {
        CartSession {
            cart: CartState::new(),
            coupon: None,
            coupons,
        }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.as_ref()
    }

    pub fn add_product(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        self.cart.add_product(product, quantity)
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        self.cart.update_quantity(id, quantity)
    }

    pub fn remove_item(&mut self, id: &str) -> CoreResult<CartLineItem> {
        self.cart.remove_item(id)
    }

    /// Empties the cart and drops the coupon.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.coupon = None;
    }

    /// Applies `code` if the coupon table knows it.
    ///
    /// Returns whether a coupon was applied. An unknown code is not an
    /// error and leaves the current coupon in place.
    pub fn apply_coupon(&mut self, code: &str) -> bool {
        match self.coupons.resolve(code) {
            Some(applied) => {
                self.coupon = Some(applied);
                true
            }
            None => false,
        }
    }

    /// Drops the applied coupon, returning it if there was one.
    pub fn remove_coupon(&mut self) -> Option<AppliedCoupon> {
        self.coupon.take()
    }

    /// Prices the cart with the applied coupon.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals(self.coupon.as_ref())
    }

    /// Snapshot of items and totals for display.
    pub fn snapshot(&self) -> CartResponse {
        CartResponse {
            items: self.cart.items().to_vec(),
            totals: self.totals(),
        }
    }

    /// Freezes the cart into an order and starts a fresh cart.
    ///
    /// On error the cart and coupon are left untouched.
    pub fn checkout(&mut self, order_id: Uuid, placed_at: DateTime<Utc>) -> CoreResult<OrderSummary> {
        let summary = OrderSummary::from_cart(&self.cart, self.coupon.as_ref(), order_id, placed_at)?;
        self.clear();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CoreError, Money, Percent};

    fn lamp() -> Product {
        Product {
            id: "p-lamp".to_string(),
            name: "Desk Lamp".to_string(),
            price: Money::from_major(1000),
            discount_percent: Some(Percent::new(20).unwrap()),
            in_stock: true,
        }
    }

    #[test]
    fn test_totals_without_coupon() {
        let mut session = CartSession::new();
        session.add_product(&lamp(), 2).unwrap();

        let totals = session.totals();
        assert_eq!(totals.subtotal, Money::from_major(1600));
        assert_eq!(totals.shipping, Money::from_major(500));
        assert_eq!(totals.grand_total, Money::from_major(2100));
    }

    #[test]
    fn test_apply_coupon_case_insensitive() {
        let mut session = CartSession::new();
        session.add_product(&lamp(), 2).unwrap();

        assert!(session.apply_coupon("discount10"));
        let totals = session.totals();
        assert_eq!(totals.discount, Money::from_major(160));
        assert_eq!(totals.grand_total, Money::from_major(1940));
        assert_eq!(totals.coupon_code.as_deref(), Some("DISCOUNT10"));
    }

    #[test]
    fn test_unknown_coupon_keeps_previous() {
        let mut session = CartSession::new();
        assert!(session.apply_coupon("DISCOUNT10"));
        assert!(!session.apply_coupon("WRONG"));
        assert_eq!(session.coupon().map(|c| c.code.as_str()), Some("DISCOUNT10"));
    }

    #[test]
    fn test_remove_coupon() {
        let mut session = CartSession::new();
        session.apply_coupon("DISCOUNT10");
        assert!(session.remove_coupon().is_some());
        assert!(session.remove_coupon().is_none());
    }

    #[test]
    fn test_clear_drops_coupon() {
        let mut session = CartSession::new();
        session.add_product(&lamp(), 1).unwrap();
        session.apply_coupon("DISCOUNT10");

        session.clear();
        assert!(session.cart().is_empty());
        assert!(session.coupon().is_none());
    }

    #[test]
    fn test_checkout_resets_session() {
        let mut session = CartSession::new();
        session.add_product(&lamp(), 2).unwrap();
        session.apply_coupon("DISCOUNT10");

        let summary = session.checkout(Uuid::new_v4(), Utc::now()).unwrap();
        assert_eq!(summary.amount_due, Money::from_major(1940));
        assert_eq!(summary.amount_due_minor, 194_000);
        assert!(session.cart().is_empty());
        assert!(session.coupon().is_none());
    }

    #[test]
    fn test_checkout_empty_cart_keeps_coupon() {
        let mut session = CartSession::new();
        session.apply_coupon("DISCOUNT10");

        let result = session.checkout(Uuid::new_v4(), Utc::now());
        assert!(matches!(result, Err(CoreError::EmptyCart)));
        assert!(session.coupon().is_some());
    }

    #[test]
    fn test_custom_coupon_table() {
        let table = CouponTable::empty().with_coupon("HALF", Percent::new(50).unwrap());
        let mut session = CartSession::with_coupons(table);
        session.add_product(&lamp(), 1).unwrap();

        assert!(!session.apply_coupon("DISCOUNT10"));
        assert!(session.apply_coupon(" half "));
        assert_eq!(session.totals().discount, Money::from_major(400));
    }

    #[test]
    fn test_snapshot_lists_items() {
        let mut session = CartSession::new();
        session.add_product(&lamp(), 3).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 3);
        assert_eq!(snapshot.totals.total_quantity, 3);
    }
}
