//! # storefront-core: Pure Cart & Pricing Logic
//!
//! This crate is the **heart** of the storefront. It contains the cart,
//! its mutation rules and the pricing engine as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Presentation (web frontend / storefront shell)       │   │
//! │  │    Product list ──► Cart page ──► Coupon box ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │  money  │ │  cart   │ │ pricing │ │ coupon  │ │ checkout │  │   │
//! │  │  │  Money  │ │CartState│ │ totals  │ │  table  │ │  order   │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLineItem, Percent)
//! - [`money`] - Exact decimal money, rounded only for display
//! - [`pricing`] - Line totals, subtotal, shipping, coupon, grand total
//! - [`coupon`] - Coupon table and the applied coupon
//! - [`cart`] - Owned cart state and its mutation boundary
//! - [`checkout`] - Order summary snapshot
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{CartState, CouponTable, Money, Percent, Product};
//!
//! let lamp = Product {
//!     id: "p-lamp".to_string(),
//!     name: "Desk Lamp".to_string(),
//!     price: Money::from_major(1000),
//!     discount_percent: Some(Percent::new(20).unwrap()),
//!     in_stock: true,
//! };
//!
//! let mut cart = CartState::new();
//! cart.add_product(&lamp, 2).unwrap();
//!
//! let coupon = CouponTable::default().resolve("discount10");
//! let totals = cart.totals(coupon.as_ref());
//! assert_eq!(totals.grand_total, Money::from_major(1940));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod coupon;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartState;
pub use checkout::{OrderLine, OrderSummary};
pub use coupon::{AppliedCoupon, CouponTable};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CartTotals, FREE_SHIPPING_THRESHOLD, SHIPPING_FEE};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps an order reviewable on one screen.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Fractional digits of the store currency's minor unit.
pub const CURRENCY_MINOR_DIGITS: u32 = 2;
