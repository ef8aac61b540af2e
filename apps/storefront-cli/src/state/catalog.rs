//! # Catalog State
//!
//! The static product list the shopper can add from.
//!
//! Either the built-in mock catalog or a JSON file passed with
//! `--catalog`. Every entry is validated on load so the cart never sees a
//! product it would reject for its shape.
//!
//! ## File Format
//! ```json
//! [
//!   { "id": "p-lamp", "name": "Desk Lamp", "price": "1000",
//!     "discountPercent": 20, "inStock": true }
//! ]
//! ```
//! `discountPercent` and `inStock` are optional (none / `true`).

use std::collections::HashSet;
use std::path::Path;

use storefront_core::validation::{validate_product_id, validate_product_name, validate_unit_price};
use storefront_core::{CoreError, CoreResult, Money, Percent, Product};

use crate::error::CatalogError;

/// Read-only product catalog, in listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed entries and duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for product in &products {
            validate_product(product).map_err(|source| CatalogError::InvalidProduct {
                id: product.id.clone(),
                source,
            })?;

            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in mock catalog.
    pub fn builtin() -> Self {
        Catalog {
            products: vec![
                product("p-headphones", "Wireless Headphones", Money::from_major(2999), Some(20), true),
                product("p-smartwatch", "Smart Watch", Money::from_major(4999), Some(10), true),
                product("p-backpack", "Travel Backpack", Money::from_major(1499), None, true),
                product("p-lamp", "Desk Lamp", Money::from_major(1000), Some(20), true),
                product("p-speaker", "Bluetooth Speaker", Money::from_major(2500), None, true),
                product("p-mug", "Ceramic Mug", Money::from_minor(24_950), None, true),
                product("p-keyboard", "Mechanical Keyboard", Money::from_major(3499), Some(15), false),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but a missing id is `ProductNotFound`.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn product(id: &str, name: &str, price: Money, discount: Option<u8>, in_stock: bool) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        discount_percent: discount.and_then(|d| Percent::new(d).ok()),
        in_stock,
    }
}

fn validate_product(product: &Product) -> Result<(), storefront_core::ValidationError> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_unit_price(product.price)?;
    Ok(())
}
