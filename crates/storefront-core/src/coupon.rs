//! # Coupons
//!
//! A small table of recognised coupon codes and the percentage each one
//! takes off the pre-shipping subtotal.
//!
//! ## Lookup Contract
//! - Codes are matched case-insensitively, ignoring surrounding whitespace.
//! - An unknown code is not an error: it resolves to no coupon and a zero
//!   discount.
//! - No expiry, usage limit or per-customer restriction.
//! - One coupon at a time. The cart session replaces the active coupon
//!   rather than stacking a second one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Percent;

/// The only code the storefront ships with.
pub const DEFAULT_COUPON_CODE: &str = "DISCOUNT10";

/// Percentage taken off by [`DEFAULT_COUPON_CODE`].
pub const DEFAULT_COUPON_PERCENT: u8 = 10;

/// Allow-list of coupon codes, keyed by normalised (upper-case) code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponTable {
    rates: BTreeMap<String, Percent>,
}

impl CouponTable {
    /// A table that recognises nothing.
    pub fn empty() -> Self {
        CouponTable {
            rates: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with_coupon(mut self, code: &str, percent: Percent) -> Self {
        self.insert(code, percent);
        self
    }

    /// Registers `code`, returning the percent it previously mapped to.
    pub fn insert(&mut self, code: &str, percent: Percent) -> Option<Percent> {
        self.rates.insert(normalize_code(code), percent)
    }

    /// Looks up a user-entered code.
    pub fn resolve(&self, code: &str) -> Option<AppliedCoupon> {
        let code = normalize_code(code);
        self.rates
            .get(&code)
            .map(|&percent| AppliedCoupon { code, percent })
    }

    /// Discount a code is worth on `subtotal`; zero for unknown codes.
    pub fn discount_for(&self, code: &str, subtotal: Money) -> Money {
        self.resolve(code)
            .map_or(Money::zero(), |coupon| coupon.discount(subtotal))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for CouponTable {
    /// The storefront's built-in table: `DISCOUNT10` → 10%.
    fn default() -> Self {
        let mut table = CouponTable::empty();
        if let Ok(percent) = Percent::new(DEFAULT_COUPON_PERCENT) {
            table.insert(DEFAULT_COUPON_CODE, percent);
        }
        table
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// A coupon that matched the table and is active on the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppliedCoupon {
    /// Normalised code, e.g. `"DISCOUNT10"`.
    pub code: String,
    pub percent: Percent,
}

impl AppliedCoupon {
    /// `percent` of the pre-shipping subtotal.
    pub fn discount(&self, subtotal: Money) -> Money {
        subtotal.percent_of(self.percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
