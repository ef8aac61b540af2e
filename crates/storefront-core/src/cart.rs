//! # Cart State
//!
//! The owned shopping cart and its mutation boundary.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shopper Action           Operation               Cart State Change     │
//! │  ──────────────           ─────────               ─────────────────     │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_product() ───────► push / qty += n      │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► items[i].qty = n     │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  Place order / Clear ────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  View Cart ──────────────► totals() ────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no shared or global cart. Whoever owns a `CartState` value is
//! the only one able to mutate it, through `&mut self`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coupon::AppliedCoupon;
use crate::error::{CoreError, CoreResult};
use crate::pricing::{self, CartTotals};
use crate::types::{CartLineItem, Product};
use crate::validation::{
    validate_product_id, validate_product_name, validate_quantity, validate_unit_price,
};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`, never zero
/// - At most `MAX_CART_ITEMS` distinct items
/// - Insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Lines in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Adds a catalog product, snapshotting its price and promotion.
    ///
    /// ## Behavior
    /// - Out-of-stock product: rejected
    /// - Product already in cart: quantity increases, frozen price is kept
    /// - Product not in cart: appended as a new line
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if !product.in_stock {
            return Err(CoreError::OutOfStock(product.id.clone()));
        }

        let quantity = validate_quantity(quantity)?;
        self.add_item(CartLineItem::from_product(product, quantity))
    }

    /// Adds a prepared line, merging with an existing line of the same id.
    ///
    /// Every field is validated here so the pricing engine never sees a
    /// non-positive price or quantity.
    pub fn add_item(&mut self, line: CartLineItem) -> CoreResult<()> {
        validate_product_id(&line.id)?;
        validate_product_name(&line.name)?;
        validate_unit_price(line.unit_price)?;
        validate_quantity(i64::from(line.quantity))?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == line.id) {
            let new_qty = i64::from(existing.quantity) + i64::from(line.quantity);
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = validate_quantity(new_qty)?;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(line);
        Ok(())
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - Quantity must be `1..=999`; zero is rejected, use [`remove_item`]
    /// - Product not in cart: `ItemNotFound`
    ///
    /// [`remove_item`]: CartState::remove_item
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        let quantity = validate_quantity(quantity)?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Removes a line by product id and returns it.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<CartLineItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Prices the cart with an optional applied coupon.
    pub fn totals(&self, coupon: Option<&AppliedCoupon>) -> CartTotals {
        pricing::price_cart(&self.items, coupon)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
