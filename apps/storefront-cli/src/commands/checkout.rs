//! # Checkout Command
//!
//! Turns the cart into an [`OrderSummary`] and starts a fresh cart.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Cart empty? ── yes ──► CART_ERROR "Cannot check out an empty cart"    │
//! │     │ no                                                                │
//! │     ▼                                                                   │
//! │  price_cart(items, coupon) ──► round each figure to minor units        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  OrderSummary { order_id, placed_at, lines, amount_due, ... }          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  cart + coupon cleared, summary handed to the payment step             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use storefront_core::OrderSummary;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::CartSession;

/// Places the order for the current cart.
pub fn checkout(session: &mut CartSession) -> Result<OrderSummary, ApiError> {
    debug!(items = session.cart().len(), "checkout command");

    let summary = session.checkout(Uuid::new_v4(), Utc::now())?;

    info!(
        order_id = %summary.order_id,
        amount_due = %summary.amount_due,
        lines = summary.lines.len(),
        coupon = ?summary.coupon_code,
        "Order placed"
    );

    Ok(summary)
}
