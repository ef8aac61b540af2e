//! # Coupon Commands
//!
//! An unrecognised code is reported as "not applied", never as an error.

use serde::Serialize;
use storefront_core::{AppliedCoupon, CartTotals};
use tracing::debug;

use crate::state::{CartResponse, CartSession};

/// Result of a `coupon <code>` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    /// Code as the shopper typed it.
    pub requested_code: String,

    /// Whether `requested_code` matched the coupon table.
    pub applied: bool,

    /// Coupon active after the command (may be an earlier one).
    pub coupon: Option<AppliedCoupon>,

    pub totals: CartTotals,
}

/// Applies a coupon code to the cart.
pub fn apply_coupon(session: &mut CartSession, code: &str) -> CouponResponse {
    let applied = session.apply_coupon(code);
    debug!(code = %code, applied = applied, "apply_coupon command");

    CouponResponse {
        requested_code: code.to_string(),
        applied,
        coupon: session.coupon().cloned(),
        totals: session.totals(),
    }
}

/// Drops the applied coupon.
pub fn remove_coupon(session: &mut CartSession) -> CartResponse {
    let removed = session.remove_coupon();
    debug!(removed = ?removed.map(|c| c.code), "remove_coupon command");
    session.snapshot()
}
