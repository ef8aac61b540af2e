//! # Catalog Commands
//!
//! Product listing for the `products` command.

use serde::Serialize;
use storefront_core::{Money, Percent, Product};
use tracing::debug;

use crate::state::Catalog;

/// Product data for display.
///
/// Carries the effective price next to the list price so the listing can
/// show "₹1000.00 → ₹800.00 (20% off)" without recomputing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub discount_percent: Option<Percent>,
    pub effective_price: Money,
    pub in_stock: bool,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            discount_percent: p.discount_percent,
            effective_price: p.effective_price(),
            in_stock: p.in_stock,
        }
    }
}

/// Lists the catalog in its listing order, out-of-stock products included.
pub fn list_products(catalog: &Catalog) -> Vec<ProductDto> {
    debug!(count = catalog.len(), "list_products command");
    catalog.products().iter().map(ProductDto::from).collect()
}
