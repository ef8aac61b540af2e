//! # Cart Commands
//!
//! Handlers for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Coupon  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ (option) │     │ Summary  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                       checkout           │
//! │                   update_cart_item                (checkout.rs)        │
//! │                   remove_from_cart                       │              │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   clear_cart ──────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartSession, Catalog};

/// Gets the current cart contents and totals.
pub fn get_cart(session: &CartSession) -> CartResponse {
    debug!("get_cart command");
    session.snapshot()
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new item
/// - Price is "frozen" at time of adding
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    session: &mut CartSession,
    catalog: &Catalog,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = catalog.require(product_id)?;
    session.add_product(product, quantity)?;

    Ok(session.snapshot())
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity must be 1..=999; use `remove_from_cart` to drop a line
/// - Unknown product: NOT_FOUND
pub fn update_cart_item(
    session: &mut CartSession,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    session.update_quantity(product_id, quantity)?;

    Ok(session.snapshot())
}

/// Removes an item from the cart.
pub fn remove_from_cart(
    session: &mut CartSession,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    session.remove_item(product_id)?;

    Ok(session.snapshot())
}

/// Clears all items from the cart and drops the coupon.
pub fn clear_cart(session: &mut CartSession) -> CartResponse {
    debug!("clear_cart command");
    session.clear();
    session.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::Money;

    #[test]
    fn test_add_to_cart_defaults_to_one() {
        let mut session = CartSession::new();
        let response = add_to_cart(&mut session, &Catalog::builtin(), "p-lamp", None).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 1);
        assert_eq!(response.totals.subtotal, Money::from_major(800));
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = CartSession::new();
        let err = add_to_cart(&mut session, &Catalog::builtin(), "p-missing", Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-missing");
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_out_of_stock_product() {
        let mut session = CartSession::new();
        let err = add_to_cart(&mut session, &Catalog::builtin(), "p-keyboard", Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_update_rejects_zero() {
        let mut session = CartSession::new();
        add_to_cart(&mut session, &Catalog::builtin(), "p-lamp", Some(2)).unwrap();

        let err = update_cart_item(&mut session, "p-lamp", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.cart().total_quantity(), 2);
    }

    #[test]
    fn test_update_and_remove() {
        let mut session = CartSession::new();
        let catalog = Catalog::builtin();
        add_to_cart(&mut session, &catalog, "p-lamp", Some(2)).unwrap();

        let response = update_cart_item(&mut session, "p-lamp", 5).unwrap();
        assert_eq!(response.totals.total_quantity, 5);

        let response = remove_from_cart(&mut session, "p-lamp").unwrap();
        assert!(response.items.is_empty());

        let err = remove_from_cart(&mut session, "p-lamp").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_cart() {
        let mut session = CartSession::new();
        add_to_cart(&mut session, &Catalog::builtin(), "p-mug", Some(3)).unwrap();

        let response = clear_cart(&mut session);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.grand_total, Money::zero());
    }
}
